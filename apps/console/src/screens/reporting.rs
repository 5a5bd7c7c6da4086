//! # Reporting Screen
//!
//! Read-only: the low-stock report and units sold per product.

use wings_core::metrics::{low_stock_products, sales_summary, SalesSummaryRow};
use wings_core::{Product, Sale};

use super::Api;
use crate::error::{FAILED_LOAD_PRODUCTS, FAILED_LOAD_SALES};

pub struct ReportingScreen {
    api: Api,
    products: Vec<Product>,
    sales: Vec<Sale>,
    error: Option<String>,
}

impl ReportingScreen {
    pub fn new(api: Api) -> Self {
        ReportingScreen {
            api,
            products: Vec::new(),
            sales: Vec::new(),
            error: None,
        }
    }

    pub async fn load(&mut self) {
        match self.api.list_products().await {
            Ok(products) => self.products = products,
            Err(_) => self.error = Some(FAILED_LOAD_PRODUCTS.to_string()),
        }
        match self.api.list_sales().await {
            Ok(sales) => self.sales = sales,
            Err(_) => self.error = Some(FAILED_LOAD_SALES.to_string()),
        }
    }

    pub fn low_stock(&self) -> Vec<&Product> {
        low_stock_products(&self.products)
    }

    pub fn summary(&self) -> Vec<SalesSummaryRow<'_>> {
        sales_summary(&self.products, &self.sales)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::fixtures::cafe;
    use wings_client::{Fault, Operation};

    #[tokio::test]
    async fn test_report() {
        let mut screen = ReportingScreen::new(cafe());
        screen.load().await;

        assert_eq!(screen.error(), None);
        let low: Vec<&str> = screen.low_stock().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(low, vec!["Tea"]);

        let summary: Vec<(&str, i64)> = screen
            .summary()
            .iter()
            .map(|row| (row.product.name.as_str(), row.total_sold))
            .collect();
        assert_eq!(summary, vec![("Tea", 3), ("Coffee", 0)]);
    }

    #[tokio::test]
    async fn test_sales_failure_still_lists_products() {
        let fake = cafe();
        fake.fail(Operation::ListSales, Fault::Status(503)).await;
        let mut screen = ReportingScreen::new(fake);
        screen.load().await;

        assert_eq!(screen.error(), Some(FAILED_LOAD_SALES));
        assert_eq!(screen.summary().len(), 2);
        assert!(screen.summary().iter().all(|row| row.total_sold == 0));
    }
}
