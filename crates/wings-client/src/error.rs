//! # Client Error Types
//!
//! Error types for requests to the inventory service and for loading the
//! client configuration.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌───────────────────────────┐   ┌───────────────────────────────────┐ │
//! │  │      Connectivity         │   │            Request                │ │
//! │  │                           │   │                                   │ │
//! │  │  No response at all:      │   │  A response, but not usable:      │ │
//! │  │  DNS, refused, TLS,       │   │  non-2xx status, or a body that   │ │
//! │  │  body read cut short      │   │  does not decode                  │ │
//! │  └───────────────────────────┘   └───────────────────────────────────┘ │
//! │                                                                         │
//! │  ┌───────────────────────────┐                                          │
//! │  │       ConfigError         │   file read / TOML parse / bad URL      │
//! │  └───────────────────────────┘                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Error bodies from the service are never parsed. A request failure carries
//! the operation's own failure text, e.g. `"Failed to fetch products"`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for inventory requests.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Operations
// =============================================================================

/// Every request the client can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListProducts,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
    ApplyStock,
    ListSales,
    RecordSale,
    ListCustomers,
    CreateCustomer,
    UpdateCustomer,
    DeleteCustomer,
}

impl Operation {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ListProducts => "list products",
            Operation::CreateProduct => "create product",
            Operation::UpdateProduct => "update product",
            Operation::DeleteProduct => "delete product",
            Operation::ApplyStock => "apply stock transaction",
            Operation::ListSales => "list sales",
            Operation::RecordSale => "record sale",
            Operation::ListCustomers => "list customers",
            Operation::CreateCustomer => "create customer",
            Operation::UpdateCustomer => "update customer",
            Operation::DeleteCustomer => "delete customer",
        }
    }

    /// Message carried by a request failure.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::ListProducts => "Failed to fetch products",
            Operation::CreateProduct => "Failed to add product",
            Operation::UpdateProduct => "Failed to update product",
            Operation::DeleteProduct => "Failed to delete product",
            Operation::ApplyStock => "Failed to record stock transaction",
            Operation::ListSales => "Failed to fetch sales",
            Operation::RecordSale => "Failed to record sale",
            Operation::ListCustomers => "Failed to fetch customers",
            Operation::CreateCustomer => "Failed to add customer",
            Operation::UpdateCustomer => "Failed to update customer",
            Operation::DeleteCustomer => "Failed to delete customer",
        }
    }

    /// Returns true for requests that change service state.
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Operation::ListProducts | Operation::ListSales | Operation::ListCustomers
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Client Error
// =============================================================================

/// A failed request to the inventory service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got a response.
    #[error("Could not reach the inventory service ({operation}): {detail}")]
    Connectivity { operation: Operation, detail: String },

    /// The service answered, but not with something usable.
    #[error("{message}")]
    Request {
        operation: Operation,
        /// `None` when the request could not be built or the body did not decode
        /// after a success status.
        status: Option<u16>,
        message: String,
    },
}

impl ClientError {
    pub fn connectivity(operation: Operation, detail: impl Into<String>) -> Self {
        ClientError::Connectivity {
            operation,
            detail: detail.into(),
        }
    }

    /// A request failure with the operation's standard message.
    pub fn request(operation: Operation, status: Option<u16>) -> Self {
        ClientError::Request {
            operation,
            status,
            message: operation.failure_message().to_string(),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            ClientError::Connectivity { operation, .. } => *operation,
            ClientError::Request { operation, .. } => *operation,
        }
    }

    /// HTTP status, when the service answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Connectivity { .. } => None,
            ClientError::Request { status, .. } => *status,
        }
    }

    /// Returns true if the service could not be reached.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ClientError::Connectivity { .. })
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Problems loading or validating [`crate::ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_uses_operation_message() {
        let err = ClientError::request(Operation::ListProducts, Some(500));
        assert_eq!(err.to_string(), "Failed to fetch products");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_connectivity());
    }

    #[test]
    fn test_connectivity_error() {
        let err = ClientError::connectivity(Operation::RecordSale, "connection refused");
        assert!(err.is_connectivity());
        assert_eq!(err.operation(), Operation::RecordSale);
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_mutations() {
        assert!(!Operation::ListSales.is_mutation());
        assert!(Operation::ApplyStock.is_mutation());
        assert!(Operation::DeleteCustomer.is_mutation());
    }
}
