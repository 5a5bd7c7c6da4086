//! # Sales Screen
//!
//! Records sales against the product list and shows the sales history.
//! Recording a sale changes stock on the service, so both lists are reloaded
//! afterwards (sales first, then products).

use tracing::debug;

use wings_core::metrics::product_name_for;
use wings_core::{Product, Sale, SaleDraft};

use super::Api;
use crate::error::{FAILED_LOAD_PRODUCTS, FAILED_LOAD_SALES, FAILED_RECORD_SALE};

pub struct SalesScreen {
    api: Api,
    products: Vec<Product>,
    sales: Vec<Sale>,
    draft: SaleDraft,
    error: Option<String>,
}

impl SalesScreen {
    pub fn new(api: Api) -> Self {
        SalesScreen {
            api,
            products: Vec::new(),
            sales: Vec::new(),
            draft: SaleDraft::default(),
            error: None,
        }
    }

    /// Loads both lists. Each one fails on its own.
    pub async fn load(&mut self) {
        self.load_sales().await;
        self.load_products().await;
    }

    pub async fn load_products(&mut self) {
        match self.api.list_products().await {
            Ok(products) => self.products = products,
            Err(_) => self.error = Some(FAILED_LOAD_PRODUCTS.to_string()),
        }
    }

    pub async fn load_sales(&mut self) {
        match self.api.list_sales().await {
            Ok(sales) => self.sales = sales,
            Err(_) => self.error = Some(FAILED_LOAD_SALES.to_string()),
        }
    }

    pub fn draft_mut(&mut self) -> &mut SaleDraft {
        &mut self.draft
    }

    pub async fn submit(&mut self) -> bool {
        let request = self.draft.to_request(&self.products);

        match self.api.record_sale(&request).await {
            Ok(sale) => {
                debug!(id = %sale.id, product_id = %sale.product_id, "Sale recorded");
                self.draft = SaleDraft::default();
                self.load().await;
                true
            }
            Err(_) => {
                self.error = Some(FAILED_RECORD_SALE.to_string());
                false
            }
        }
    }

    /// Name shown in the history for a sale; `"Unknown"` once the product
    /// is gone.
    pub fn product_name(&self, sale: &Sale) -> &str {
        product_name_for(&self.products, &sale.product_id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn draft(&self) -> &SaleDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::fixtures::cafe;
    use wings_client::{Fault, InventoryApi, Operation};
    use wings_core::RecordId;

    #[tokio::test]
    async fn test_record_sale_reloads_sales_then_products() {
        let fake = cafe();
        let mut screen = SalesScreen::new(fake.clone());
        screen.load().await;

        let draft = screen.draft_mut();
        draft.product_id = "2".to_string();
        draft.quantity = "4".to_string();
        assert!(screen.submit().await);

        assert_eq!(screen.sales().len(), 2);
        assert_eq!(screen.sales()[0].product_id, RecordId::Number(2));
        assert_eq!(screen.products()[1].quantity, 16);
        assert_eq!(screen.draft(), &SaleDraft::default());

        let calls = fake.calls().await;
        assert_eq!(
            &calls[2..],
            &[
                Operation::RecordSale,
                Operation::ListSales,
                Operation::ListProducts
            ]
        );
    }

    #[tokio::test]
    async fn test_overselling_keeps_draft() {
        let fake = cafe();
        let mut screen = SalesScreen::new(fake.clone());
        screen.load().await;

        let draft = screen.draft_mut();
        draft.product_id = "1".to_string();
        draft.quantity = "50".to_string();
        assert!(!screen.submit().await);

        assert_eq!(screen.error(), Some(FAILED_RECORD_SALE));
        assert_eq!(screen.draft().quantity, "50");
        assert_eq!(fake.sales().await.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_selection_is_sent_and_rejected() {
        let fake = cafe();
        let mut screen = SalesScreen::new(fake.clone());
        screen.draft_mut().quantity = "1".to_string();

        assert!(!screen.submit().await);
        assert_eq!(screen.error(), Some(FAILED_RECORD_SALE));
        assert_eq!(fake.calls().await, vec![Operation::RecordSale]);
        assert_eq!(fake.sales().await.len(), 1);
    }

    #[tokio::test]
    async fn test_lists_fail_independently() {
        let fake = cafe();
        fake.fail(Operation::ListSales, Fault::Unreachable).await;

        let mut screen = SalesScreen::new(fake.clone());
        screen.load().await;

        assert_eq!(screen.error(), Some(FAILED_LOAD_SALES));
        assert!(screen.sales().is_empty());
        assert_eq!(screen.products().len(), 2);
    }

    #[tokio::test]
    async fn test_error_not_cleared_by_later_success() {
        let fake = cafe();
        fake.fail(Operation::ListProducts, Fault::Status(500)).await;
        let mut screen = SalesScreen::new(fake.clone());
        screen.load().await;
        assert_eq!(screen.error(), Some(FAILED_LOAD_PRODUCTS));

        fake.clear_faults().await;
        screen.load().await;
        assert_eq!(screen.error(), Some(FAILED_LOAD_PRODUCTS));
        assert_eq!(screen.products().len(), 2);
    }

    #[tokio::test]
    async fn test_deleted_product_shows_unknown() {
        let fake = cafe();
        let mut screen = SalesScreen::new(fake.clone());
        fake.delete_product(&RecordId::Number(1)).await.unwrap();
        screen.load().await;

        let sale = &screen.sales()[0];
        assert_eq!(screen.product_name(sale), "Unknown");
    }
}
