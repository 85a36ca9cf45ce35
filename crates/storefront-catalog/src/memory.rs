//! A catalog held in memory.
//!
//! Backs offline mode (products loaded from a saved feed dump) and the test
//! suites of this crate and the app.

use std::path::Path;

use async_trait::async_trait;
use storefront_core::{Product, ProductId};
use tracing::info;

use crate::error::{CatalogError, CatalogResult};
use crate::http::decode_product_list;
use crate::source::CatalogSource;

#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
    available: bool,
}

impl StaticCatalog {
    pub fn with_products(products: Vec<Product>) -> Self {
        StaticCatalog {
            products,
            available: true,
        }
    }

    /// A catalog whose every call fails as if the feed were down (HTTP 503).
    pub fn unavailable() -> Self {
        StaticCatalog {
            products: Vec::new(),
            available: false,
        }
    }

    /// Loads a file in the same format as `GET /products`.
    pub fn from_file(path: &Path) -> CatalogResult<Self> {
        let body = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Decode(format!("cannot read {}: {e}", path.display()))
        })?;
        let products = decode_product_list(&body)?;
        info!(path = %path.display(), count = products.len(), "Loaded offline catalog");
        Ok(StaticCatalog::with_products(products))
    }

    fn check_available(&self) -> CatalogResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(CatalogError::Status { status: 503 })
        }
    }
}

/// An empty, reachable catalog.
impl Default for StaticCatalog {
    fn default() -> Self {
        StaticCatalog::with_products(Vec::new())
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        self.check_available()?;
        Ok(self.products.clone())
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
        self.check_available()?;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogErrorKind;

    #[test]
    fn test_from_file_reads_feed_dump() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(
            &path,
            r#"[{"id": 3, "title": "Jacket", "price": 55.99, "category": "men's clothing"}]"#,
        )
        .unwrap();

        let catalog = StaticCatalog::from_file(&path).unwrap();
        assert_eq!(catalog.products.len(), 1);
        assert_eq!(catalog.products[0].price.cents(), 5599);
    }

    #[test]
    fn test_from_missing_file_is_malformed() {
        let err = StaticCatalog::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.kind(), CatalogErrorKind::Malformed);
    }

    #[tokio::test]
    async fn test_unavailable_fails_every_call() {
        let catalog = StaticCatalog::unavailable();
        assert_eq!(
            catalog.list_products().await.unwrap_err().kind(),
            CatalogErrorKind::Unavailable
        );
        assert_eq!(
            catalog.get_product(1).await.unwrap_err().kind(),
            CatalogErrorKind::Unavailable
        );
    }
}
