//! # Customer Endpoint

use tracing::debug;

use wings_core::{Customer, CustomerPayload, RecordId};

use crate::error::{ClientResult, Operation};
use crate::http::HttpInventory;

/// Customer records.
#[derive(Debug, Clone, Copy)]
pub struct CustomerEndpoint<'a> {
    http: &'a HttpInventory,
}

impl<'a> CustomerEndpoint<'a> {
    pub(crate) fn new(http: &'a HttpInventory) -> Self {
        CustomerEndpoint { http }
    }

    /// `GET /customers`.
    pub async fn list(&self) -> ClientResult<Vec<Customer>> {
        let request = self.http.client().get(self.http.url(&["customers"]));
        let customers: Vec<Customer> = self
            .http
            .send_json(Operation::ListCustomers, request)
            .await?;
        debug!(count = customers.len(), "Fetched customers");
        Ok(customers)
    }

    /// `POST /customers` with `{name, contact}`.
    pub async fn create(&self, payload: &CustomerPayload) -> ClientResult<Customer> {
        let request = self
            .http
            .client()
            .post(self.http.url(&["customers"]))
            .json(payload);
        self.http.send_json(Operation::CreateCustomer, request).await
    }

    /// `PUT /customers/{id}` with `{name, contact}`.
    pub async fn update(&self, id: &RecordId, payload: &CustomerPayload) -> ClientResult<Customer> {
        let request = self
            .http
            .client()
            .put(self.http.url(&["customers", &*id.as_key()]))
            .json(payload);
        self.http.send_json(Operation::UpdateCustomer, request).await
    }

    /// `DELETE /customers/{id}`.
    pub async fn delete(&self, id: &RecordId) -> ClientResult<()> {
        let request = self
            .http
            .client()
            .delete(self.http.url(&["customers", &*id.as_key()]));
        self.http.send_confirm(Operation::DeleteCustomer, request).await
    }
}
