//! # Product Repository
//!
//! Products created through the dashboard. They live next to the remote
//! catalog and are listed newest first.
//!
//! ## Id Assignment
//! ```text
//! insert(draft)
//!     │
//!     ▼
//! id = now (epoch millis)
//!     │
//!     ├── id already taken? ── yes ──► id + 1, check again
//!     │
//!     ▼
//! [new, ...existing]  (prepended)
//! ```
//! Millisecond ids stay far above the small integer ids used by the remote
//! feed, so local and remote products never collide in the cart.

use std::sync::Arc;

use chrono::Utc;
use storefront_core::{Product, ProductDraft, ProductId};
use tracing::debug;

use super::{load_json, save_json};
use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;

const PRODUCTS_KEY: &str = "crudProducts";
const ENTITY: &str = "Product";

#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        ProductRepository { store }
    }

    /// All local products, newest first.
    pub fn list(&self) -> StoreResult<Vec<Product>> {
        load_json(self.store.as_ref(), PRODUCTS_KEY)
    }

    pub fn get(&self, id: ProductId) -> StoreResult<Option<Product>> {
        Ok(self.list()?.into_iter().find(|p| p.id == id))
    }

    pub fn insert(&self, draft: ProductDraft) -> StoreResult<Product> {
        let mut products = self.list()?;

        let mut id = Utc::now().timestamp_millis();
        while products.iter().any(|p| p.id == id) {
            id += 1;
        }

        let product = Product::from_draft(id, draft);
        debug!(id = product.id, title = %product.title, "Inserting product");

        products.insert(0, product.clone());
        self.save(&products)?;
        Ok(product)
    }

    /// Replaces every field except the id. Position in the list is kept.
    pub fn update(&self, id: ProductId, draft: ProductDraft) -> StoreResult<Product> {
        let mut products = self.list()?;

        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))?;
        *slot = Product::from_draft(id, draft);
        let updated = slot.clone();

        debug!(id, "Updating product");
        self.save(&products)?;
        Ok(updated)
    }

    pub fn delete(&self, id: ProductId) -> StoreResult<()> {
        let mut products = self.list()?;
        let before = products.len();
        products.retain(|p| p.id != id);

        if products.len() == before {
            return Err(StoreError::not_found(ENTITY, id));
        }

        debug!(id, "Deleting product");
        self.save(&products)
    }

    fn save(&self, products: &[Product]) -> StoreResult<()> {
        save_json(self.store.as_ref(), PRODUCTS_KEY, products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use storefront_core::Money;

    fn repo() -> ProductRepository {
        ProductRepository::new(Arc::new(MemoryStore::new()))
    }

    fn draft(title: &str) -> ProductDraft {
        ProductDraft {
            title: title.to_string(),
            price: Money::from_cents(1999),
            description: "desc".to_string(),
            category: "electronics".to_string(),
            image: "https://img".to_string(),
        }
    }

    #[test]
    fn test_insert_is_newest_first_with_unique_ids() {
        let repo = repo();
        let first = repo.insert(draft("First")).unwrap();
        let second = repo.insert(draft("Second")).unwrap();
        let third = repo.insert(draft("Third")).unwrap();

        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);

        let titles: Vec<_> = repo.list().unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
    }

    #[test]
    fn test_stored_under_crud_products_key() {
        let store = Arc::new(MemoryStore::new());
        let repo = ProductRepository::new(store.clone());
        let lamp = repo.insert(draft("Lamp")).unwrap();

        let raw = store.get("crudProducts").unwrap().unwrap();
        let stored: Vec<Product> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, vec![lamp]);
        assert_eq!(store.get("products").unwrap(), None);
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let repo = repo();
        let a = repo.insert(draft("A")).unwrap();
        repo.insert(draft("B")).unwrap();

        let updated = repo.update(a.id, draft("A2")).unwrap();
        assert_eq!(updated.id, a.id);

        let list = repo.list().unwrap();
        assert_eq!(list[1].title, "A2");
        assert_eq!(repo.get(a.id).unwrap().unwrap().title, "A2");
    }

    #[test]
    fn test_missing_ids_are_not_found() {
        let repo = repo();
        assert!(repo.get(1).unwrap().is_none());
        assert!(matches!(
            repo.update(1, draft("x")),
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(repo.delete(1), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_delete() {
        let repo = repo();
        let a = repo.insert(draft("A")).unwrap();
        repo.delete(a.id).unwrap();
        assert!(repo.list().unwrap().is_empty());
    }
}
