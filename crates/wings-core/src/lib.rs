//! # wings-core: Pure Domain Logic for Wings Cafe Inventory
//!
//! Records, money, form drafts and the derived views every screen shows.
//! Nothing in this crate touches the network, the file system or a clock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Wings Cafe Inventory Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │   Dashboard ─ Products ─ Stock ─ Sales ─ Customers ─ Reporting  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ InventoryApi                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 wings-client (HTTP transport)                   │   │
//! │  │          reqwest, config, ClientError, in-memory fake           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ wings-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   draft   │  │  metrics  │  │   │
//! │  │   │  Product  │  │   Money   │  │  forms →  │  │ dashboard │  │   │
//! │  │   │   Sale    │  │  M12.50   │  │  payloads │  │ low stock │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records and request payloads
//! - [`money`] - Integer money and currency formatting
//! - [`error`] - Domain error types
//! - [`input`] - Reading numbers out of form text
//! - [`draft`] - Form drafts and their conversion to payloads
//! - [`metrics`] - Dashboard metrics, low-stock alerts, sales summary
//! - [`image`] - Product image source classification
//! - [`editor`] - Create/edit form mode
//!
//! ## Example Usage
//!
//! ```rust
//! use wings_core::metrics::{dashboard_metrics, low_stock_products};
//! use wings_core::Product;
//!
//! let products: Vec<Product> = serde_json::from_str(
//!     r#"[{"id": 1, "name": "Tea", "quantity": 5}, {"id": 2, "name": "Coffee", "quantity": 20}]"#,
//! ).unwrap();
//!
//! assert_eq!(low_stock_products(&products).len(), 1);
//! assert_eq!(dashboard_metrics(&products, &[], &[]).total_products, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod draft;
pub mod editor;
pub mod error;
pub mod image;
pub mod input;
pub mod metrics;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use draft::{CustomerDraft, ProductDraft, SaleDraft, StockDraft};
pub use editor::EditMode;
pub use error::{CoreError, CoreResult, ValidationError};
pub use image::ImageSource;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Products with fewer units than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Number of sales shown in the dashboard's recent-sales list.
pub const RECENT_SALES_WINDOW: usize = 5;

/// Shown in place of a product name when a sale references a missing product.
pub const UNKNOWN_PRODUCT: &str = "Unknown";
