//! # Stock Endpoint

use tracing::debug;

use wings_core::{Product, RecordId, StockTransaction};

use crate::error::{ClientResult, Operation};
use crate::http::HttpInventory;

/// Stock adjustments. The service applies the arithmetic and returns the
/// product with its new quantity.
#[derive(Debug, Clone, Copy)]
pub struct StockEndpoint<'a> {
    http: &'a HttpInventory,
}

impl<'a> StockEndpoint<'a> {
    pub(crate) fn new(http: &'a HttpInventory) -> Self {
        StockEndpoint { http }
    }

    /// `POST /stock/{id}` with `{quantity, type}`.
    pub async fn apply(
        &self,
        product_id: &RecordId,
        transaction: &StockTransaction,
    ) -> ClientResult<Product> {
        debug!(
            product_id = %product_id,
            quantity = ?transaction.quantity,
            direction = %transaction.direction,
            "Applying stock transaction"
        );
        let url = self.http.url(&["stock", &*product_id.as_key()]);
        let request = self.http.client().post(url).json(transaction);
        self.http.send_json(Operation::ApplyStock, request).await
    }
}
