//! # Console Errors and Screen Messages
//!
//! Two concerns live here:
//!
//! 1. [`ConsoleError`], what `run` returns when the console itself cannot do
//!    its job (bad config, unreadable image file, unknown record id).
//! 2. The screen message policy: how a [`ClientError`] becomes the single
//!    line a screen shows in its error slot.
//!
//! ## Screen Message Policy
//! ```text
//! ┌──────────────────────────┬──────────────────────────────────────────────┐
//! │ Screen                   │ Message                                      │
//! ├──────────────────────────┼──────────────────────────────────────────────┤
//! │ Dashboard, Products,     │ connectivity → CONNECTION_FAILED             │
//! │ Stock                    │ request      → "Error: <operation message>"  │
//! ├──────────────────────────┼──────────────────────────────────────────────┤
//! │ Sales, Customers,        │ one fixed message per action                 │
//! │ Reporting                │ ("Failed to load sales", ...)                │
//! └──────────────────────────┴──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

use wings_client::{ClientError, ConfigError};
use wings_core::CoreError;

/// Shown when the service could not be reached at all.
pub const CONNECTION_FAILED: &str =
    "Failed to connect to the server. Please ensure the backend is running.";

pub const FAILED_LOAD_PRODUCTS: &str = "Failed to load products";
pub const FAILED_LOAD_SALES: &str = "Failed to load sales";
pub const FAILED_RECORD_SALE: &str = "Failed to record sale";
pub const FAILED_LOAD_CUSTOMERS: &str = "Failed to load customers";
pub const FAILED_SAVE_CUSTOMER: &str = "Failed to save customer";
pub const FAILED_DELETE_CUSTOMER: &str = "Failed to delete customer";

/// Message for screens that tell connectivity and request failures apart.
pub fn connection_aware_message(error: &ClientError) -> String {
    match error {
        ClientError::Connectivity { .. } => CONNECTION_FAILED.to_string(),
        ClientError::Request { message, .. } => format!("Error: {}", message),
    }
}

// =============================================================================
// Console Error
// =============================================================================

/// Failures that stop a console command.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to read image {path}: {source}")]
    Image {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A screen ended with its error slot set. The screen has already been
    /// printed; this only carries the exit status.
    #[error("{0}")]
    Screen(String),
}

/// Convenience type alias for console results.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
