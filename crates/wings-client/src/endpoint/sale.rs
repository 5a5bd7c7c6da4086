//! # Sale Endpoint

use tracing::debug;

use wings_core::{Sale, SaleRequest};

use crate::error::{ClientResult, Operation};
use crate::http::HttpInventory;

/// Sales history and sale recording.
#[derive(Debug, Clone, Copy)]
pub struct SaleEndpoint<'a> {
    http: &'a HttpInventory,
}

impl<'a> SaleEndpoint<'a> {
    pub(crate) fn new(http: &'a HttpInventory) -> Self {
        SaleEndpoint { http }
    }

    /// `GET /sales`, in the order the service returns them.
    pub async fn list(&self) -> ClientResult<Vec<Sale>> {
        let request = self.http.client().get(self.http.url(&["sales"]));
        let sales: Vec<Sale> = self.http.send_json(Operation::ListSales, request).await?;
        debug!(count = sales.len(), "Fetched sales");
        Ok(sales)
    }

    /// `POST /sales` with `{productId, quantity}`. Stock is decremented by the
    /// service.
    pub async fn record(&self, sale: &SaleRequest) -> ClientResult<Sale> {
        debug!(product_id = %sale.product_id, quantity = ?sale.quantity, "Recording sale");
        let request = self.http.client().post(self.http.url(&["sales"])).json(sale);
        self.http.send_json(Operation::RecordSale, request).await
    }
}
