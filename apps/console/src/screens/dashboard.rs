//! # Dashboard Screen
//!
//! Headline metrics, recent sales, low-stock alerts and the full product
//! list, all from one concurrent fetch.

use tracing::debug;

use wings_client::fetch_dashboard;
use wings_core::metrics::{dashboard_metrics, low_stock_products, DashboardMetrics};
use wings_core::{Customer, Product, Sale};

use super::Api;
use crate::error::connection_aware_message;

pub struct DashboardScreen {
    api: Api,
    products: Vec<Product>,
    sales: Vec<Sale>,
    customers: Vec<Customer>,
    error: Option<String>,
}

impl DashboardScreen {
    pub fn new(api: Api) -> Self {
        DashboardScreen {
            api,
            products: Vec::new(),
            sales: Vec::new(),
            customers: Vec::new(),
            error: None,
        }
    }

    /// Fetches products, sales and customers concurrently.
    ///
    /// All or nothing: if any fetch fails, every snapshot keeps its previous
    /// contents and the first failure (products, sales, customers) is shown.
    pub async fn load(&mut self) {
        let fetch = fetch_dashboard(self.api.as_ref()).await;
        match fetch.into_all() {
            Ok((products, sales, customers)) => {
                debug!(
                    products = products.len(),
                    sales = sales.len(),
                    customers = customers.len(),
                    "Dashboard loaded"
                );
                self.products = products;
                self.sales = sales;
                self.customers = customers;
            }
            Err(e) => self.error = Some(connection_aware_message(&e)),
        }
    }

    pub fn metrics(&self) -> DashboardMetrics<'_> {
        dashboard_metrics(&self.products, &self.sales, &self.customers)
    }

    pub fn low_stock(&self) -> Vec<&Product> {
        low_stock_products(&self.products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CONNECTION_FAILED;
    use crate::screens::fixtures::cafe;
    use wings_client::{Fault, Operation};

    #[tokio::test]
    async fn test_load_computes_metrics() {
        let mut screen = DashboardScreen::new(cafe());
        screen.load().await;

        assert_eq!(screen.error(), None);
        let metrics = screen.metrics();
        assert_eq!(metrics.total_products, 2);
        assert_eq!(metrics.low_stock_count, 1);
        assert_eq!(metrics.total_sales, 1);
        assert_eq!(metrics.total_customers, 1);
        assert_eq!(screen.low_stock()[0].name, "Tea");
    }

    #[tokio::test]
    async fn test_one_failure_keeps_every_snapshot() {
        let fake = cafe();
        let mut screen = DashboardScreen::new(fake.clone());
        screen.load().await;

        fake.fail(Operation::ListCustomers, Fault::Unreachable).await;
        screen.load().await;

        assert_eq!(screen.error(), Some(CONNECTION_FAILED));
        assert_eq!(screen.metrics().total_products, 2);
        assert_eq!(screen.metrics().total_customers, 1);
    }

    #[tokio::test]
    async fn test_first_failure_wins() {
        let fake = cafe();
        fake.fail(Operation::ListSales, Fault::Status(500)).await;
        fake.fail(Operation::ListCustomers, Fault::Unreachable).await;

        let mut screen = DashboardScreen::new(fake);
        screen.load().await;

        assert_eq!(screen.error(), Some("Error: Failed to fetch sales"));
        assert!(screen.products().is_empty());
    }

    #[tokio::test]
    async fn test_fetches_all_three() {
        let fake = cafe();
        let mut screen = DashboardScreen::new(fake.clone());
        screen.load().await;

        let mut calls = fake.calls().await;
        calls.sort_by_key(|op| op.name());
        assert_eq!(
            calls,
            vec![Operation::ListCustomers, Operation::ListProducts, Operation::ListSales]
        );
    }
}
