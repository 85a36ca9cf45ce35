//! The async seam between the app and wherever products come from.

use async_trait::async_trait;
use storefront_core::{Product, ProductId};

use crate::error::CatalogResult;

/// A read-only product feed.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_products(&self) -> CatalogResult<Vec<Product>>;

    /// Fails with `CatalogError::NotFound` for unknown ids.
    async fn get_product(&self, id: ProductId) -> CatalogResult<Product>;
}
