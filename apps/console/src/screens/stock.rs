//! # Stock Screen
//!
//! Current levels per product and the add/deduct form. The service does the
//! arithmetic; this screen only sends the transaction and reloads.

use tracing::debug;

use wings_core::metrics::StockStatus;
use wings_core::{Product, StockDraft};

use super::Api;
use crate::error::connection_aware_message;

pub struct StockScreen {
    api: Api,
    products: Vec<Product>,
    draft: StockDraft,
    error: Option<String>,
}

impl StockScreen {
    pub fn new(api: Api) -> Self {
        StockScreen {
            api,
            products: Vec::new(),
            draft: StockDraft::default(),
            error: None,
        }
    }

    pub async fn load(&mut self) {
        match self.api.list_products().await {
            Ok(products) => self.products = products,
            Err(e) => self.error = Some(connection_aware_message(&e)),
        }
    }

    pub fn draft_mut(&mut self) -> &mut StockDraft {
        &mut self.draft
    }

    /// Sends the transaction. On success the form resets to `add` with
    /// nothing selected.
    pub async fn submit(&mut self) -> bool {
        let (product_id, transaction) = self.draft.to_transaction();

        match self.api.apply_stock_transaction(&product_id, &transaction).await {
            Ok(product) => {
                debug!(id = %product.id, quantity = product.quantity, "Stock updated");
                self.draft = StockDraft::default();
                self.error = None;
                self.load().await;
                true
            }
            Err(e) => {
                self.error = Some(connection_aware_message(&e));
                false
            }
        }
    }

    /// Each product with its stock status label.
    pub fn levels(&self) -> Vec<(&Product, StockStatus)> {
        self.products
            .iter()
            .map(|p| (p, StockStatus::of(p)))
            .collect()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn draft(&self) -> &StockDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
