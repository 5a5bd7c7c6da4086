//! # Form Drafts
//!
//! The text a user has typed into a screen's form, before it is submitted.
//!
//! Drafts hold raw strings, like the inputs they stand in for. Converting a
//! draft into a request payload reads numbers with [`crate::input`] and
//! leaves everything else to the service.

use serde::{Deserialize, Serialize};

use crate::image::editable_image_url;
use crate::input::{parse_decimal_prefix, parse_int_prefix};
use crate::money::Money;
use crate::types::{
    Customer, CustomerPayload, Product, ProductPayload, RecordId, SaleRequest, StockDirection,
    StockTransaction,
};

// =============================================================================
// Product
// =============================================================================

/// Product form contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub image_url: String,
}

impl ProductDraft {
    /// Prefills the form from an existing product for editing.
    ///
    /// Uploaded images are not echoed back into the URL field; an update
    /// without a new image leaves the stored upload alone.
    pub fn from_product(product: &Product) -> Self {
        ProductDraft {
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product
                .price
                .map(|p| p.to_major().to_string())
                .unwrap_or_default(),
            quantity: product.quantity.to_string(),
            image_url: editable_image_url(product.image_path.as_deref()),
        }
    }

    /// Builds the request payload.
    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: parse_decimal_prefix(&self.price).and_then(|p| Money::try_from_major(p).ok()),
            quantity: parse_int_prefix(&self.quantity),
            image_url: self.image_url.clone(),
        }
    }
}

// =============================================================================
// Stock
// =============================================================================

/// Stock adjustment form contents. Direction defaults to `Add`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDraft {
    pub product_id: String,
    pub quantity: String,
    pub direction: StockDirection,
}

impl StockDraft {
    /// Returns the target product and the transaction body.
    pub fn to_transaction(&self) -> (RecordId, StockTransaction) {
        (
            parse_product_id(&self.product_id),
            StockTransaction {
                quantity: parse_int_prefix(&self.quantity),
                direction: self.direction,
            },
        )
    }
}

// =============================================================================
// Sale
// =============================================================================

/// Sale form contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDraft {
    pub product_id: String,
    pub quantity: String,
}

impl SaleDraft {
    /// Builds the request body.
    ///
    /// When the selected id matches a product in `products`, that product's
    /// own id value is sent so the service sees the form it issued.
    pub fn to_request(&self, products: &[Product]) -> SaleRequest {
        let selected = parse_product_id(&self.product_id);
        let product_id = products
            .iter()
            .find(|p| p.id == selected)
            .map(|p| p.id.clone())
            .unwrap_or(selected);
        SaleRequest {
            product_id,
            quantity: parse_int_prefix(&self.quantity),
        }
    }
}

/// Reads the product selection as typed. An empty selection is sent as an
/// empty id and left for the service to reject.
fn parse_product_id(text: &str) -> RecordId {
    text.parse::<RecordId>()
        .unwrap_or_else(|_| RecordId::Text(String::new()))
}

// =============================================================================
// Customer
// =============================================================================

/// Customer form contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub contact: String,
}

impl CustomerDraft {
    /// Prefills the form from an existing customer for editing.
    pub fn from_customer(customer: &Customer) -> Self {
        CustomerDraft {
            name: customer.name.clone(),
            contact: customer.contact.clone(),
        }
    }

    pub fn to_payload(&self) -> CustomerPayload {
        CustomerPayload {
            name: self.name.clone(),
            contact: self.contact.clone(),
        }
    }
}
