//! # Inventory API
//!
//! The seam between screens and the inventory service.
//!
//! ```text
//! ┌──────────────────┐      ┌────────────────────┐      ┌──────────────────┐
//! │ Screen controller│ ───► │ dyn InventoryApi   │ ───► │ HttpInventory    │ ──► service
//! └──────────────────┘      └────────────────────┘  or  │ InMemoryInventory│
//!                                                       └──────────────────┘
//! ```

use async_trait::async_trait;
use tracing::debug;

use wings_core::{
    Customer, CustomerPayload, ImageUpload, Product, ProductPayload, RecordId, Sale, SaleRequest,
    StockTransaction,
};

use crate::error::ClientResult;

/// Every request the screens make, one method per service operation.
///
/// Each call is an independent request/response. Nothing is cached, retried
/// or de-duplicated.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    async fn list_products(&self) -> ClientResult<Vec<Product>>;

    async fn create_product(
        &self,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> ClientResult<Product>;

    async fn update_product(
        &self,
        id: &RecordId,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> ClientResult<Product>;

    async fn delete_product(&self, id: &RecordId) -> ClientResult<()>;

    /// The service does the quantity arithmetic and returns the product.
    async fn apply_stock_transaction(
        &self,
        product_id: &RecordId,
        transaction: &StockTransaction,
    ) -> ClientResult<Product>;

    async fn list_sales(&self) -> ClientResult<Vec<Sale>>;

    /// The service decrements the product's stock.
    async fn record_sale(&self, sale: &SaleRequest) -> ClientResult<Sale>;

    async fn list_customers(&self) -> ClientResult<Vec<Customer>>;

    async fn create_customer(&self, payload: &CustomerPayload) -> ClientResult<Customer>;

    async fn update_customer(
        &self,
        id: &RecordId,
        payload: &CustomerPayload,
    ) -> ClientResult<Customer>;

    async fn delete_customer(&self, id: &RecordId) -> ClientResult<()>;
}

// =============================================================================
// Dashboard Fetch
// =============================================================================

/// Outcome of the dashboard's three concurrent fetches, one result each.
#[derive(Debug)]
pub struct DashboardFetch {
    pub products: ClientResult<Vec<Product>>,
    pub sales: ClientResult<Vec<Sale>>,
    pub customers: ClientResult<Vec<Customer>>,
}

impl DashboardFetch {
    /// All three collections, or the first failure in products, sales,
    /// customers order.
    pub fn into_all(self) -> ClientResult<(Vec<Product>, Vec<Sale>, Vec<Customer>)> {
        Ok((self.products?, self.sales?, self.customers?))
    }
}

/// Issues the three dashboard fetches concurrently and waits for all of them.
pub async fn fetch_dashboard<A>(api: &A) -> DashboardFetch
where
    A: InventoryApi + ?Sized,
{
    debug!("Fetching dashboard collections");
    let (products, sales, customers) = tokio::join!(
        api.list_products(),
        api.list_sales(),
        api.list_customers()
    );
    DashboardFetch {
        products,
        sales,
        customers,
    }
}
