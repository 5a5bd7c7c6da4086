//! # HTTP Transport
//!
//! The reqwest-backed [`InventoryApi`]. This module owns transport details
//! only: URLs, request ids, status mapping, and JSON decoding. The per-resource
//! request shapes live in [`crate::endpoint`].
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  endpoint builds request ──► x-request-id: <uuid v4> ──► send          │
//! │                                                     │                   │
//! │                         ┌───────────────────────────┼──────────────┐    │
//! │                         ▼                           ▼              ▼    │
//! │                  transport error             non-2xx status      2xx    │
//! │                  → Connectivity              → Request         decode   │
//! │                                                                  │      │
//! │                                              bad JSON → Request ◄┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, info_span, warn, Instrument};
use url::Url;
use uuid::Uuid;

use wings_core::{
    Customer, CustomerPayload, ImageUpload, Product, ProductPayload, RecordId, Sale, SaleRequest,
    StockTransaction,
};

use crate::api::InventoryApi;
use crate::endpoint::{CustomerEndpoint, ProductEndpoint, SaleEndpoint, StockEndpoint};
use crate::error::{ClientError, ClientResult, Operation};

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const USER_AGENT: &str = concat!("wings-inventory/", env!("CARGO_PKG_VERSION"));

/// Client for the inventory REST service.
///
/// ## Usage
/// ```rust,ignore
/// let api = HttpInventory::new(config.api_url()?)?;
///
/// let products = api.products().list().await?;
/// api.stock().apply(&id, &transaction).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpInventory {
    client: Client,
    base: Url,
}

impl HttpInventory {
    /// Builds a client for the service rooted at `base`.
    ///
    /// No request timeout is set; a request waits as long as the service does.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    // =========================================================================
    // Endpoints
    // =========================================================================

    pub fn products(&self) -> ProductEndpoint<'_> {
        ProductEndpoint::new(self)
    }

    pub fn stock(&self) -> StockEndpoint<'_> {
        StockEndpoint::new(self)
    }

    pub fn sales(&self) -> SaleEndpoint<'_> {
        SaleEndpoint::new(self)
    }

    pub fn customers(&self) -> CustomerEndpoint<'_> {
        CustomerEndpoint::new(self)
    }

    // =========================================================================
    // Shared Plumbing
    // =========================================================================

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Base URL with `segments` appended, each percent-encoded.
    pub(crate) fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a request and decodes a JSON body.
    pub(crate) async fn send_json<T>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let (status, body) = self.execute(operation, request).await?;
        decode(operation, status, &body)
    }

    /// Sends a request whose body is a confirmation to discard.
    pub(crate) async fn send_confirm(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> ClientResult<()> {
        let (_, body) = self.execute(operation, request).await?;
        if !body.is_empty() && serde_json::from_slice::<serde_json::Value>(&body).is_err() {
            debug!(%operation, "Confirmation body was not JSON, ignoring");
        }
        Ok(())
    }

    async fn execute(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> ClientResult<(StatusCode, Vec<u8>)> {
        let request_id = Uuid::new_v4();
        let span = info_span!("inventory_request", %request_id, %operation);

        async move {
            let started = Instant::now();
            debug!("Sending request");

            let response = request
                .header(REQUEST_ID_HEADER, request_id.to_string())
                .send()
                .await
                .map_err(|e| map_transport_error(operation, e))?;

            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|e| map_transport_error(operation, e))?;

            if !status.is_success() {
                return Err(map_status_error(operation, status, &body));
            }

            let elapsed_ms = started.elapsed().as_millis() as u64;
            if operation.is_mutation() {
                info!(status = status.as_u16(), elapsed_ms, "Request completed");
            } else {
                debug!(
                    status = status.as_u16(),
                    elapsed_ms,
                    bytes = body.len(),
                    "Request completed"
                );
            }
            Ok((status, body.to_vec()))
        }
        .instrument(span)
        .await
    }
}

fn decode<T>(operation: Operation, status: StatusCode, body: &[u8]) -> ClientResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|error| {
        warn!(%operation, %error, body = %body_preview(body), "Response body did not decode");
        ClientError::request(operation, Some(status.as_u16()))
    })
}

pub(crate) fn map_transport_error(operation: Operation, error: reqwest::Error) -> ClientError {
    warn!(%operation, %error, "Inventory service unreachable");
    ClientError::connectivity(operation, error.to_string())
}

fn map_status_error(operation: Operation, status: StatusCode, body: &[u8]) -> ClientError {
    warn!(
        %operation,
        status = status.as_u16(),
        body = %body_preview(body),
        "Inventory service rejected request"
    );
    ClientError::request(operation, Some(status.as_u16()))
}

/// Response bodies are logged up to this many characters.
const BODY_PREVIEW_CHARS: usize = 120;

/// A failed response body on one line, cut for logging.
fn body_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let one_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match one_line.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &one_line[..cut]),
        None => one_line,
    }
}

// =============================================================================
// InventoryApi
// =============================================================================

#[async_trait]
impl InventoryApi for HttpInventory {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.products().list().await
    }

    async fn create_product(
        &self,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> ClientResult<Product> {
        self.products().create(payload, image).await
    }

    async fn update_product(
        &self,
        id: &RecordId,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> ClientResult<Product> {
        self.products().update(id, payload, image).await
    }

    async fn delete_product(&self, id: &RecordId) -> ClientResult<()> {
        self.products().delete(id).await
    }

    async fn apply_stock_transaction(
        &self,
        product_id: &RecordId,
        transaction: &StockTransaction,
    ) -> ClientResult<Product> {
        self.stock().apply(product_id, transaction).await
    }

    async fn list_sales(&self) -> ClientResult<Vec<Sale>> {
        self.sales().list().await
    }

    async fn record_sale(&self, sale: &SaleRequest) -> ClientResult<Sale> {
        self.sales().record(sale).await
    }

    async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        self.customers().list().await
    }

    async fn create_customer(&self, payload: &CustomerPayload) -> ClientResult<Customer> {
        self.customers().create(payload).await
    }

    async fn update_customer(
        &self,
        id: &RecordId,
        payload: &CustomerPayload,
    ) -> ClientResult<Customer> {
        self.customers().update(id, payload).await
    }

    async fn delete_customer(&self, id: &RecordId) -> ClientResult<()> {
        self.customers().delete(id).await
    }
}
