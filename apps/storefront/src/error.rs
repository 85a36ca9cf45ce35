//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Shell line: "product 999"                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  Catalog error? ── CatalogError::NotFound(999) ──┐               │  │
//! │  │  Store error?   ── StoreError::Duplicate ────────┤               │  │
//! │  │  Auth error?    ── AuthError::NotAuthenticated ──┼─► ApiError ──►│  │
//! │  │  Validation?    ── ValidationError::Required ────┘               │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Printed as:                                                            │
//! │  { "code": "NOT_FOUND", "message": "Product not found: 999" }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_catalog::{CatalogError, CatalogErrorKind};
use storefront_core::{CoreError, ValidationError};
use storefront_store::StoreError;

use crate::state::{AuthError, ConfigError};

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "UNAUTHORIZED",
///   "message": "Sign in to continue"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// The command needs a signed-in user, or credentials were wrong
    Unauthorized,

    /// Uniqueness violated (email already registered)
    Conflict,

    /// Checkout preconditions not met
    CheckoutError,

    /// Remote catalog unreachable or refusing
    CatalogUnavailable,

    /// Remote catalog answered with something unreadable
    CatalogMalformed,

    /// Local storage failed
    StorageError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCart => ApiError::new(ErrorCode::CheckoutError, "Your cart is empty"),
            CoreError::NothingSelected => ApiError::new(
                ErrorCode::CheckoutError,
                "Select at least one item to check out",
            ),
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// Converts storage errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, id),
            StoreError::Duplicate { field, value } => ApiError::new(
                ErrorCode::Conflict,
                format!("{} '{}' already exists", field, value),
            ),
            StoreError::Io(e) => {
                tracing::error!("Storage I/O failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Local storage is unavailable")
            }
            StoreError::Serialization(e) => {
                tracing::error!("Stored data is malformed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Local storage is corrupted")
            }
            StoreError::Poisoned => {
                ApiError::new(ErrorCode::StorageError, "Local storage is unavailable")
            }
        }
    }
}

/// Converts catalog errors by outcome class.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err.kind() {
            CatalogErrorKind::NotFound => match err {
                CatalogError::NotFound(id) => ApiError::not_found("Product", id),
                _ => ApiError::new(ErrorCode::NotFound, "Product not found"),
            },
            CatalogErrorKind::Unavailable => {
                tracing::warn!("Catalog unavailable: {}", err);
                ApiError::new(
                    ErrorCode::CatalogUnavailable,
                    "Products could not be loaded, try again later",
                )
            }
            CatalogErrorKind::Malformed => {
                tracing::error!("Catalog response malformed: {}", err);
                ApiError::new(ErrorCode::CatalogMalformed, "Products could not be read")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(e) => e.into(),
            AuthError::EmailTaken(email) => ApiError::new(
                ErrorCode::Conflict,
                format!("An account for {} already exists", email),
            ),
            AuthError::InvalidCredentials => {
                ApiError::new(ErrorCode::Unauthorized, "Email or password is incorrect")
            }
            AuthError::NotAuthenticated => {
                ApiError::new(ErrorCode::Unauthorized, "Sign in to continue")
            }
            AuthError::PasswordHash => ApiError::internal("Password could not be processed"),
            AuthError::Store(e) => e.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for commands.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Startup Errors
// =============================================================================

/// Failures while opening a session. These end the process.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot open local storage: {0}")]
    Store(#[from] StoreError),

    #[error("cannot set up the product catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("cannot restore the saved session: {0}")]
    Auth(#[from] AuthError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_code_and_message() {
        let json = serde_json::to_value(ApiError::not_found("Product", 9)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "NOT_FOUND", "message": "Product not found: 9" })
        );
    }

    #[test]
    fn test_catalog_errors_map_by_kind() {
        assert_eq!(
            ApiError::from(CatalogError::Status { status: 503 }).code,
            ErrorCode::CatalogUnavailable
        );
        assert_eq!(
            ApiError::from(CatalogError::Status { status: 404 }).code,
            ErrorCode::NotFound
        );
        assert_eq!(
            ApiError::from(CatalogError::Decode("x".into())).code,
            ErrorCode::CatalogMalformed
        );
    }

    #[test]
    fn test_store_and_core_errors() {
        assert_eq!(
            ApiError::from(StoreError::duplicate("email", "a@b.co")).code,
            ErrorCode::Conflict
        );
        assert_eq!(
            ApiError::from(CoreError::NothingSelected).code,
            ErrorCode::CheckoutError
        );
    }
}
