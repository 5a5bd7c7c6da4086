//! # Error Types
//!
//! Domain-specific error types for wings-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  wings-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Unusable input (ids, stock direction, amounts) │
//! │                                                                         │
//! │  wings-client errors (separate crate)                                  │
//! │  └── ClientError      - Connectivity / request failures                │
//! │                                                                         │
//! │  Console (in app)                                                      │
//! │  └── one display string per screen                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service is the authority on business rules. These errors only cover
//! input the client cannot even represent (an empty id, an unknown stock
//! direction, a non-finite amount).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record referenced by id is not in the current snapshot.
    #[error("{entity} not found: {id}")]
    NotInSnapshot { entity: &'static str, id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input that cannot be turned into a domain value.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Amount is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Amount does not fit in whole cents.
    #[error("{field} is out of range")]
    OutOfRange { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
