//! # Product Lookup
//!
//! Combines dashboard products with the remote feed.
//!
//! ```text
//! find(id)
//!   │
//!   ├── local ProductRepository has id? ──► yes ──► Ok(local)
//!   │
//!   └── no ──► CatalogSource::get_product(id)
//!                 ├── Ok(product)
//!                 └── Err(e) ──► caller matches e.kind()
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use storefront_core::{Product, ProductId};
use storefront_store::ProductRepository;
use tracing::debug;

use crate::error::CatalogResult;
use crate::source::CatalogSource;

#[derive(Clone)]
pub struct ProductLookup {
    local: ProductRepository,
    remote: Arc<dyn CatalogSource>,
}

impl ProductLookup {
    pub fn new(local: ProductRepository, remote: Arc<dyn CatalogSource>) -> Self {
        ProductLookup { local, remote }
    }

    /// Local products shadow remote ones with the same id.
    pub async fn find(&self, id: ProductId) -> CatalogResult<Product> {
        if let Some(product) = self.local.get(id)? {
            debug!(id, "Found product locally");
            return Ok(product);
        }
        self.remote.get_product(id).await
    }

    /// Local products (newest first) followed by the remote feed.
    pub async fn list(&self) -> CatalogResult<Vec<Product>> {
        let mut products = self.local.list()?;
        let local_ids: HashSet<ProductId> = products.iter().map(|p| p.id).collect();

        let remote = self.remote.list_products().await?;
        products.extend(remote.into_iter().filter(|r| !local_ids.contains(&r.id)));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::StaticCatalog;
    use crate::CatalogErrorKind;
    use storefront_core::{Money, ProductDraft};
    use storefront_store::Storage;

    fn draft(title: &str) -> ProductDraft {
        ProductDraft {
            title: title.to_string(),
            price: Money::from_cents(500),
            description: "d".to_string(),
            category: "electronics".to_string(),
            image: "i".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_prefers_local() {
        let storage = Storage::in_memory();
        let local = storage.products().insert(draft("Local")).unwrap();
        let remote = StaticCatalog::with_products(vec![Product::from_draft(local.id, draft("Remote"))]);

        let lookup = ProductLookup::new(storage.products(), Arc::new(remote));
        assert_eq!(lookup.find(local.id).await.unwrap().title, "Local");
    }

    #[tokio::test]
    async fn test_find_falls_back_to_remote() {
        let storage = Storage::in_memory();
        let remote = StaticCatalog::with_products(vec![Product::from_draft(7, draft("Remote"))]);
        let lookup = ProductLookup::new(storage.products(), Arc::new(remote));

        assert_eq!(lookup.find(7).await.unwrap().title, "Remote");
        assert_eq!(
            lookup.find(8).await.unwrap_err().kind(),
            CatalogErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_list_puts_local_first() {
        let storage = Storage::in_memory();
        storage.products().insert(draft("Local")).unwrap();
        let remote = StaticCatalog::with_products(vec![
            Product::from_draft(1, draft("R1")),
            Product::from_draft(2, draft("R2")),
        ]);
        let lookup = ProductLookup::new(storage.products(), Arc::new(remote));

        let titles: Vec<_> = lookup.list().await.unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Local", "R1", "R2"]);
    }

    #[tokio::test]
    async fn test_list_fails_when_feed_is_down() {
        let lookup = ProductLookup::new(
            Storage::in_memory().products(),
            Arc::new(StaticCatalog::unavailable()),
        );
        assert_eq!(
            lookup.list().await.unwrap_err().kind(),
            CatalogErrorKind::Unavailable
        );
    }
}
