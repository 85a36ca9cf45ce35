//! # Storage Handle
//!
//! The single entry point the app holds on to. It wraps an injected
//! [`KeyValueStore`] and hands out repositories over it.
//!
//! ```text
//! App startup
//!     │
//!     ├── FileStore::open_in(data_dir) ──┐
//!     │                                  ▼
//!     └── tests: MemoryStore ──────► Storage::new(Arc<dyn KeyValueStore>)
//!                                        │
//!              ┌─────────────────────────┼───────────────────────┐
//!              ▼                         ▼                       ▼
//!        users()                   products()              preferences()
//! ```

use std::path::Path;
use std::sync::Arc;

use crate::error::StoreResult;
use crate::kv::{FileStore, KeyValueStore, MemoryStore};
use crate::repository::preference::PreferenceRepository;
use crate::repository::product::ProductRepository;
use crate::repository::user::UserRepository;

/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct Storage {
    store: Arc<dyn KeyValueStore>,
}

impl Storage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Storage { store }
    }

    /// Storage backed by `storage.json` inside `dir`.
    pub fn open_dir(dir: &Path) -> StoreResult<Self> {
        Ok(Storage::new(Arc::new(FileStore::open_in(dir)?)))
    }

    /// Volatile storage for tests.
    pub fn in_memory() -> Self {
        Storage::new(Arc::new(MemoryStore::new()))
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(Arc::clone(&self.store))
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(Arc::clone(&self.store))
    }

    pub fn preferences(&self) -> PreferenceRepository {
        PreferenceRepository::new(Arc::clone(&self.store))
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}
