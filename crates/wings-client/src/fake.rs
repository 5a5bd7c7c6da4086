//! # In-Memory Inventory
//!
//! An in-process stand-in for the inventory service with the same
//! service-side rules: id assignment, stock arithmetic on sales and stock
//! transactions, and rejection of unusable input. Used by screen tests and
//! for trying the console without a backend.
//!
//! ## Fault Injection
//! ```text
//! fake.fail(Operation::ListSales, Fault::Unreachable).await;
//!   list_sales() ──► Err(Connectivity)      (every call until cleared)
//!
//! fake.fail(Operation::RecordSale, Fault::Status(500)).await;
//!   record_sale() ──► Err(Request { status: 500 })
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use wings_core::{
    Customer, CustomerPayload, ImageUpload, Product, ProductPayload, RecordId, Sale, SaleRequest,
    StockDirection, StockTransaction,
};

use crate::api::InventoryApi;
use crate::error::{ClientError, ClientResult, Operation};

/// Injected failure for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Behaves like a refused connection.
    Unreachable,
    /// Answers with this HTTP status.
    Status(u16),
}

#[derive(Debug, Default)]
struct FakeState {
    products: Vec<Product>,
    /// Newest first, the order the service returns them in.
    sales: Vec<Sale>,
    customers: Vec<Customer>,
    next_id: i64,
    faults: HashMap<Operation, Fault>,
    calls: Vec<Operation>,
}

impl FakeState {
    fn assign_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::Number(self.next_id)
    }

    /// Records the call and returns the injected fault, if any.
    fn enter(&mut self, operation: Operation) -> ClientResult<()> {
        self.calls.push(operation);
        match self.faults.get(&operation) {
            None => Ok(()),
            Some(Fault::Unreachable) => Err(ClientError::connectivity(
                operation,
                "error sending request: connection refused",
            )),
            Some(Fault::Status(status)) => Err(ClientError::request(operation, Some(*status))),
        }
    }

    fn product_mut(&mut self, operation: Operation, id: &RecordId) -> ClientResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| ClientError::request(operation, Some(404)))
    }

    fn bump_next_id(&mut self, id: &RecordId) {
        if let RecordId::Number(n) = id {
            self.next_id = self.next_id.max(*n);
        }
    }
}

/// In-memory [`InventoryApi`].
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    state: Mutex<FakeState>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the catalog.
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        let state = self.state.get_mut();
        for product in &products {
            state.bump_next_id(&product.id);
        }
        state.products = products;
        self
    }

    /// Seeds the sales history, newest first.
    pub fn with_sales(mut self, sales: Vec<Sale>) -> Self {
        let state = self.state.get_mut();
        for sale in &sales {
            state.bump_next_id(&sale.id);
        }
        state.sales = sales;
        self
    }

    pub fn with_customers(mut self, customers: Vec<Customer>) -> Self {
        let state = self.state.get_mut();
        for customer in &customers {
            state.bump_next_id(&customer.id);
        }
        state.customers = customers;
        self
    }

    /// Makes every later call to `operation` fail until cleared.
    pub async fn fail(&self, operation: Operation, fault: Fault) {
        self.state.lock().await.faults.insert(operation, fault);
    }

    pub async fn clear_faults(&self) {
        self.state.lock().await.faults.clear();
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub async fn products(&self) -> Vec<Product> {
        self.state.lock().await.products.clone()
    }

    pub async fn sales(&self) -> Vec<Sale> {
        self.state.lock().await.sales.clone()
    }

    pub async fn customers(&self) -> Vec<Customer> {
        self.state.lock().await.customers.clone()
    }

    /// Every operation called so far, in order.
    pub async fn calls(&self) -> Vec<Operation> {
        self.state.lock().await.calls.clone()
    }
}

fn uploaded_path(image: &ImageUpload) -> String {
    format!("/uploads/{}", image.file_name)
}

/// Checks the fields the service requires on a product.
fn require_product_fields(
    operation: Operation,
    payload: &ProductPayload,
) -> ClientResult<(wings_core::Money, i64)> {
    match (payload.price, payload.quantity) {
        (Some(price), Some(quantity))
            if !payload.name.trim().is_empty() && !price.is_negative() && quantity >= 0 =>
        {
            Ok((price, quantity))
        }
        _ => Err(ClientError::request(operation, Some(400))),
    }
}

fn require_positive(operation: Operation, quantity: Option<i64>) -> ClientResult<i64> {
    match quantity {
        Some(q) if q > 0 => Ok(q),
        _ => Err(ClientError::request(operation, Some(400))),
    }
}

#[async_trait]
impl InventoryApi for InMemoryInventory {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        let mut state = self.state.lock().await;
        state.enter(Operation::ListProducts)?;
        Ok(state.products.clone())
    }

    async fn create_product(
        &self,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> ClientResult<Product> {
        let operation = Operation::CreateProduct;
        let mut state = self.state.lock().await;
        state.enter(operation)?;
        let (price, quantity) = require_product_fields(operation, payload)?;

        let image_path = match image {
            Some(image) => Some(uploaded_path(image)),
            None if !payload.image_url.is_empty() => Some(payload.image_url.clone()),
            None => None,
        };
        let product = Product {
            id: state.assign_id(),
            name: payload.name.clone(),
            description: payload.description.clone(),
            category: payload.category.clone(),
            price: Some(price),
            quantity,
            image_path,
        };
        state.products.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: &RecordId,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> ClientResult<Product> {
        let operation = Operation::UpdateProduct;
        let mut state = self.state.lock().await;
        state.enter(operation)?;
        let (price, quantity) = require_product_fields(operation, payload)?;

        let product = state.product_mut(operation, id)?;
        product.name = payload.name.clone();
        product.description = payload.description.clone();
        product.category = payload.category.clone();
        product.price = Some(price);
        product.quantity = quantity;
        match image {
            Some(image) => product.image_path = Some(uploaded_path(image)),
            None if !payload.image_url.is_empty() => {
                product.image_path = Some(payload.image_url.clone())
            }
            None => {}
        }
        Ok(product.clone())
    }

    async fn delete_product(&self, id: &RecordId) -> ClientResult<()> {
        let operation = Operation::DeleteProduct;
        let mut state = self.state.lock().await;
        state.enter(operation)?;
        let before = state.products.len();
        state.products.retain(|p| &p.id != id);
        if state.products.len() == before {
            return Err(ClientError::request(operation, Some(404)));
        }
        Ok(())
    }

    async fn apply_stock_transaction(
        &self,
        product_id: &RecordId,
        transaction: &StockTransaction,
    ) -> ClientResult<Product> {
        let operation = Operation::ApplyStock;
        let mut state = self.state.lock().await;
        state.enter(operation)?;
        let quantity = require_positive(operation, transaction.quantity)?;

        let product = state.product_mut(operation, product_id)?;
        match transaction.direction {
            StockDirection::Add => product.quantity += quantity,
            StockDirection::Deduct if product.quantity >= quantity => {
                product.quantity -= quantity
            }
            StockDirection::Deduct => return Err(ClientError::request(operation, Some(400))),
        }
        Ok(product.clone())
    }

    async fn list_sales(&self) -> ClientResult<Vec<Sale>> {
        let mut state = self.state.lock().await;
        state.enter(Operation::ListSales)?;
        Ok(state.sales.clone())
    }

    async fn record_sale(&self, sale: &SaleRequest) -> ClientResult<Sale> {
        let operation = Operation::RecordSale;
        let mut state = self.state.lock().await;
        state.enter(operation)?;
        let quantity = require_positive(operation, sale.quantity)?;

        let product = state.product_mut(operation, &sale.product_id)?;
        if product.quantity < quantity {
            return Err(ClientError::request(operation, Some(400)));
        }
        product.quantity -= quantity;
        let product_id = product.id.clone();

        let recorded = Sale {
            id: state.assign_id(),
            product_id,
            quantity,
            timestamp: None,
        };
        state.sales.insert(0, recorded.clone());
        Ok(recorded)
    }

    async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        let mut state = self.state.lock().await;
        state.enter(Operation::ListCustomers)?;
        Ok(state.customers.clone())
    }

    async fn create_customer(&self, payload: &CustomerPayload) -> ClientResult<Customer> {
        let operation = Operation::CreateCustomer;
        let mut state = self.state.lock().await;
        state.enter(operation)?;
        if payload.name.trim().is_empty() {
            return Err(ClientError::request(operation, Some(400)));
        }

        let customer = Customer {
            id: state.assign_id(),
            name: payload.name.clone(),
            contact: payload.contact.clone(),
        };
        state.customers.push(customer.clone());
        Ok(customer)
    }

    async fn update_customer(
        &self,
        id: &RecordId,
        payload: &CustomerPayload,
    ) -> ClientResult<Customer> {
        let operation = Operation::UpdateCustomer;
        let mut state = self.state.lock().await;
        state.enter(operation)?;
        if payload.name.trim().is_empty() {
            return Err(ClientError::request(operation, Some(400)));
        }

        let customer = state
            .customers
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| ClientError::request(operation, Some(404)))?;
        customer.name = payload.name.clone();
        customer.contact = payload.contact.clone();
        Ok(customer.clone())
    }

    async fn delete_customer(&self, id: &RecordId) -> ClientResult<()> {
        let operation = Operation::DeleteCustomer;
        let mut state = self.state.lock().await;
        state.enter(operation)?;
        let before = state.customers.len();
        state.customers.retain(|c| &c.id != id);
        if state.customers.len() == before {
            return Err(ClientError::request(operation, Some(404)));
        }
        Ok(())
    }
}
