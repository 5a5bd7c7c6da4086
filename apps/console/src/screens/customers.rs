//! # Customers Screen
//!
//! Customer list with create, edit and delete. Customers are never joined
//! with sales or products.

use tracing::debug;

use wings_core::{CoreError, CoreResult, Customer, CustomerDraft, EditMode, RecordId};

use super::Api;
use crate::error::{FAILED_DELETE_CUSTOMER, FAILED_LOAD_CUSTOMERS, FAILED_SAVE_CUSTOMER};

pub struct CustomersScreen {
    api: Api,
    customers: Vec<Customer>,
    draft: CustomerDraft,
    mode: EditMode,
    error: Option<String>,
}

impl CustomersScreen {
    pub fn new(api: Api) -> Self {
        CustomersScreen {
            api,
            customers: Vec::new(),
            draft: CustomerDraft::default(),
            mode: EditMode::Creating,
            error: None,
        }
    }

    pub async fn load(&mut self) {
        match self.api.list_customers().await {
            Ok(customers) => self.customers = customers,
            Err(_) => self.error = Some(FAILED_LOAD_CUSTOMERS.to_string()),
        }
    }

    pub fn select_for_edit(&mut self, customer: &Customer) {
        self.mode = EditMode::Editing(customer.id.clone());
        self.draft = CustomerDraft::from_customer(customer);
    }

    pub fn select_by_id(&mut self, id: &RecordId) -> CoreResult<()> {
        let customer = self
            .customers
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotInSnapshot {
                entity: "Customer",
                id: id.to_string(),
            })?;
        self.select_for_edit(&customer);
        Ok(())
    }

    pub fn draft_mut(&mut self) -> &mut CustomerDraft {
        &mut self.draft
    }

    pub async fn submit(&mut self) -> bool {
        let payload = self.draft.to_payload();
        let result = match &self.mode {
            EditMode::Creating => self.api.create_customer(&payload).await,
            EditMode::Editing(id) => self.api.update_customer(id, &payload).await,
        };

        match result {
            Ok(saved) => {
                debug!(id = %saved.id, "Customer saved");
                self.mode = EditMode::Creating;
                self.draft = CustomerDraft::default();
                self.load().await;
                true
            }
            Err(_) => {
                self.error = Some(FAILED_SAVE_CUSTOMER.to_string());
                false
            }
        }
    }

    pub async fn delete(&mut self, id: &RecordId) -> bool {
        match self.api.delete_customer(id).await {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(_) => {
                self.error = Some(FAILED_DELETE_CUSTOMER.to_string());
                false
            }
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn draft(&self) -> &CustomerDraft {
        &self.draft
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
