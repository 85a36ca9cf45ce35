//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Checkout preconditions                         │
//! │  └── ValidationError  - Form/input validation failures                 │
//! │                                                                         │
//! │  storefront-store errors                                               │
//! │  └── StoreError       - Local store failures                           │
//! │                                                                         │
//! │  storefront-catalog errors                                             │
//! │  └── CatalogError     - Product feed failures                          │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What the shell prints (serialized)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart state machine itself has no error type: operations on unknown
//! ids are no-ops and out-of-range quantities are clamped.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Checkout was requested on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout of selected items was requested but nothing is selected.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart: [A (unselected), B (unselected)]
    ///      │
    ///      ▼
    /// checkout --selected
    ///      │
    ///      ▼
    /// NothingSelected → "Select at least one item to check out"
    /// ```
    #[error("No items are selected for checkout")]
    NothingSelected,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before anything touches the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed email, non-numeric price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two fields that must agree do not (password confirmation).
    #[error("{field} does not match {other}")]
    Mismatch { field: String, other: String },
}

impl ValidationError {
    pub(crate) fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid_format(field: &str, reason: &str) -> Self {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");
        assert_eq!(
            CoreError::NothingSelected.to_string(),
            "No items are selected for checkout"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("email");
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::TooShort {
            field: "password".to_string(),
            min: 6,
        };
        assert_eq!(err.to_string(), "password must be at least 6 characters");

        let err = ValidationError::Mismatch {
            field: "confirm password".to_string(),
            other: "password".to_string(),
        };
        assert_eq!(err.to_string(), "confirm password does not match password");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("title").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
