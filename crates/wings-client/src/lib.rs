//! # wings-client: Inventory Service Transport
//!
//! Typed requests against the Wings Cafe inventory REST service.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          wings-client                                   │
//! │                                                                         │
//! │   ┌──────────────┐    ┌─────────────────────────────────────────────┐  │
//! │   │ InventoryApi │◄───│ HttpInventory                               │  │
//! │   │   (trait)    │    │  ├── products()   /products                 │  │
//! │   │              │    │  ├── stock()      /stock/{id}               │  │
//! │   │              │    │  ├── sales()      /sales                    │  │
//! │   │              │    │  └── customers()  /customers                │  │
//! │   │              │    └─────────────────────────────────────────────┘  │
//! │   │              │    ┌─────────────────────────────────────────────┐  │
//! │   │              │◄───│ InMemoryInventory (tests, offline demo)     │  │
//! │   └──────────────┘    └─────────────────────────────────────────────┘  │
//! │                                                                         │
//! │   ClientConfig ── defaults → TOML → env → CLI                          │
//! │   ClientError  ── Connectivity | Request                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wings_client::{ClientConfig, HttpInventory, InventoryApi};
//!
//! let config = ClientConfig::load(None)?;
//! let api = HttpInventory::new(config.api_url()?)?;
//! let products = api.list_products().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod fake;
pub mod http;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{fetch_dashboard, DashboardFetch, InventoryApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ConfigError, ConfigResult, Operation};
pub use fake::{Fault, InMemoryInventory};
pub use http::HttpInventory;
