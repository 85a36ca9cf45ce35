//! Error types for catalog lookups.
//!
//! Callers branch on [`CatalogError::kind`] before rendering anything; the
//! variants themselves keep the detail for logs.

use serde::Serialize;
use storefront_core::ProductId;
use storefront_store::StoreError;
use thiserror::Error;

/// Errors that can occur when fetching products.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The feed answered with a non-success status.
    #[error("Catalog returned HTTP {status}")]
    Status { status: u16 },

    /// No product with this id, locally or remotely.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The feed answered but the body is not what we expect.
    #[error("Catalog response is malformed: {0}")]
    Decode(String),

    /// The local product store failed during a local-first lookup.
    #[error("Local products unavailable: {0}")]
    Store(#[from] StoreError),
}

/// The outcome class of a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogErrorKind {
    /// Show "product not found".
    NotFound,
    /// Show "try again later".
    Unavailable,
    /// Show a generic error; the feed changed shape.
    Malformed,
}

impl CatalogError {
    pub fn kind(&self) -> CatalogErrorKind {
        match self {
            CatalogError::NotFound(_) => CatalogErrorKind::NotFound,
            CatalogError::Status { status: 404 } => CatalogErrorKind::NotFound,
            CatalogError::Transport(_) | CatalogError::Status { .. } | CatalogError::Store(_) => {
                CatalogErrorKind::Unavailable
            }
            CatalogError::Decode(_) => CatalogErrorKind::Malformed,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
