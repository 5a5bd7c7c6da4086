//! # Domain Types
//!
//! Records owned by the inventory service and the request shapes the client
//! sends back to it.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  product_id     │   │  id             │       │
//! │  │  name, category │   │  quantity       │   │  name           │       │
//! │  │  price (Money)  │   │  timestamp      │   │  contact        │       │
//! │  │  quantity       │   └─────────────────┘   └─────────────────┘       │
//! │  │  image_path     │                                                    │
//! │  └─────────────────┘   ┌──────────────────────────────────┐            │
//! │                        │ StockTransaction (request only)  │            │
//! │                        │ quantity + Add | Deduct          │            │
//! │                        └──────────────────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! Every record here is a transient copy. Screens replace their collections
//! wholesale on each fetch; nothing is merged or cached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::{self, Money};
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Record Identifier
// =============================================================================

/// Identifier assigned by the inventory service.
///
/// The service has handed out both JSON numbers and strings over time, and
/// form selections come back as text. Equality and hashing go through the
/// canonical text form, so `RecordId::Number(1) == RecordId::Text("1")`.
///
/// The original JSON form is kept so ids are echoed back exactly as received.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Canonical text used for comparison and URL paths.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            RecordId::Number(n) => Cow::Owned(n.to_string()),
            RecordId::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        self.as_key() == other.as_key()
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_key().hash(state);
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_key())
    }
}

impl FromStr for RecordId {
    type Err = ValidationError;

    /// Parses user input. Integer text becomes `Number`, anything else `Text`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "id".to_string(),
            });
        }
        Ok(match s.parse::<i64>() {
            Ok(n) => RecordId::Number(n),
            Err(_) => RecordId::Text(s.to_string()),
        })
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog item and its current stock level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: String,

    /// Unit price. `None` when the service sent nothing usable.
    #[serde(default, with = "money::serde_major")]
    pub price: Option<Money>,

    /// Units on hand. The service keeps this non-negative.
    #[serde(default, deserialize_with = "lenient_count")]
    pub quantity: i64,

    /// Absolute URL or a path relative to the service's asset host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl Product {
    /// Checks whether stock is below the fixed low-stock threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale. Stock was decremented by the service when it was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: RecordId,

    /// May reference a product that no longer exists.
    pub product_id: RecordId,

    #[serde(default, deserialize_with = "lenient_count")]
    pub quantity: i64,

    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Accepts RFC 3339 text; anything else (missing, null, odd formats) is `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    })
}

/// Accepts integers, finite decimals (truncated) and numeric text; anything
/// else (null, words, objects) counts as zero.
fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    fn truncate(value: f64) -> Option<i64> {
        // `as` saturates, NaN and infinities are filtered first.
        value.is_finite().then(|| value.trunc() as i64)
    }

    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let count = match raw {
        Some(serde_json::Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Some(serde_json::Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    };
    Ok(count.unwrap_or(0))
}

// =============================================================================
// Customer
// =============================================================================

/// A customer record. Never joined with sales or products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: RecordId,

    #[serde(default)]
    pub name: String,

    /// Email or phone, free text.
    #[serde(default)]
    pub contact: String,
}

// =============================================================================
// Stock Transaction
// =============================================================================

/// Direction of a stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockDirection {
    #[default]
    Add,
    Deduct,
}

impl fmt::Display for StockDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockDirection::Add => write!(f, "add"),
            StockDirection::Deduct => write!(f, "deduct"),
        }
    }
}

impl FromStr for StockDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(StockDirection::Add),
            "deduct" => Ok(StockDirection::Deduct),
            _ => Err(ValidationError::NotAllowed {
                field: "type".to_string(),
                allowed: vec!["add".to_string(), "deduct".to_string()],
            }),
        }
    }
}

/// Body of `POST /stock/{id}`. The service does the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockTransaction {
    /// `None` is sent as `null` and left for the service to reject.
    pub quantity: Option<i64>,

    #[serde(rename = "type")]
    pub direction: StockDirection,
}

// =============================================================================
// Request Payloads
// =============================================================================

/// Product fields sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(with = "money::serde_major")]
    pub price: Option<Money>,
    pub quantity: Option<i64>,
    /// Externally hosted image; empty when none or when uploading a file.
    pub image_url: String,
}

/// An image file attached to a product create/update.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Body of `POST /sales`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRequest {
    pub product_id: RecordId,
    pub quantity: Option<i64>,
}

/// Body of customer create/update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerPayload {
    pub name: String,
    pub contact: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_compares_by_text() {
        assert_eq!(RecordId::Number(1), RecordId::Text("1".to_string()));
        assert_ne!(RecordId::Number(1), RecordId::Number(2));
        assert_eq!(RecordId::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_record_id_parsing() {
        assert!(matches!("42".parse::<RecordId>(), Ok(RecordId::Number(42))));
        assert!(matches!(" 64f0c2 ".parse::<RecordId>(), Ok(RecordId::Text(ref s)) if s == "64f0c2"));
        assert!("   ".parse::<RecordId>().is_err());
    }

    #[test]
    fn test_record_id_keeps_json_form() {
        let id: RecordId = serde_json::from_str("7").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let id: RecordId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
    }

    #[test]
    fn test_product_decodes_service_shape() {
        let json = r#"{
            "id": 1,
            "name": "Tea",
            "description": "Rooibos",
            "category": "Drinks",
            "price": 12.5,
            "quantity": 5,
            "imagePath": "/uploads/tea.png"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, RecordId::Number(1));
        assert_eq!(product.price, Some(Money::from_cents(1250)));
        assert_eq!(product.image_path.as_deref(), Some("/uploads/tea.png"));
        assert!(product.is_low_stock());
    }

    #[test]
    fn test_low_stock_boundary() {
        let mut product: Product =
            serde_json::from_str(r#"{"id": 1, "name": "Coffee", "quantity": 10}"#).unwrap();
        assert!(!product.is_low_stock());
        product.quantity = 9;
        assert!(product.is_low_stock());
    }

    #[test]
    fn test_quantity_decoding_is_lenient() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                {"id": 1, "name": "Tea", "price": "7.25", "quantity": "5"},
                {"id": 2, "name": "Coffee", "quantity": 12.0},
                {"id": 3, "name": "Scone", "quantity": " 9.7 "},
                {"id": 4, "name": "Muffin", "quantity": null},
                {"id": 5, "name": "Cake", "quantity": "lots"}
            ]"#,
        )
        .unwrap();

        let quantities: Vec<i64> = products.iter().map(|p| p.quantity).collect();
        assert_eq!(quantities, vec![5, 12, 9, 0, 0]);
        assert!(products[0].is_low_stock());
        assert!(!products[1].is_low_stock());
        assert_eq!(products[0].price, Some(Money::from_cents(725)));

        let sale: Sale =
            serde_json::from_str(r#"{"id": 1, "productId": 2, "quantity": "3"}"#).unwrap();
        assert_eq!(sale.quantity, 3);
    }

    #[test]
    fn test_sale_timestamp_is_lenient() {
        let sale: Sale = serde_json::from_str(
            r#"{"id": 1, "productId": 2, "quantity": 3, "timestamp": "2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(sale.timestamp.is_some());

        let sale: Sale =
            serde_json::from_str(r#"{"id": 1, "productId": 2, "quantity": 3, "timestamp": "yesterday"}"#)
                .unwrap();
        assert!(sale.timestamp.is_none());

        let sale: Sale = serde_json::from_str(r#"{"id": 1, "productId": 2, "quantity": 3}"#).unwrap();
        assert!(sale.timestamp.is_none());
    }

    #[test]
    fn test_stock_direction() {
        assert_eq!(StockDirection::default(), StockDirection::Add);
        assert_eq!("Deduct".parse::<StockDirection>().unwrap(), StockDirection::Deduct);
        assert!("remove".parse::<StockDirection>().is_err());
    }

    #[test]
    fn test_stock_transaction_wire_shape() {
        let tx = StockTransaction {
            quantity: Some(4),
            direction: StockDirection::Deduct,
        };
        assert_eq!(
            serde_json::to_string(&tx).unwrap(),
            r#"{"quantity":4,"type":"deduct"}"#
        );

        let tx = StockTransaction {
            quantity: None,
            direction: StockDirection::Add,
        };
        assert_eq!(
            serde_json::to_string(&tx).unwrap(),
            r#"{"quantity":null,"type":"add"}"#
        );
    }

    #[test]
    fn test_sale_request_wire_shape() {
        let req = SaleRequest {
            product_id: RecordId::Number(3),
            quantity: Some(2),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"productId":3,"quantity":2}"#
        );
    }
}
