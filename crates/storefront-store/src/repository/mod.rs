//! # Repository Module
//!
//! Typed access to the records kept in the key/value store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command                                                                │
//! │       │  storage.products().insert(draft)                              │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list / get                                                        │
//! │  ├── insert / update / delete                                          │
//! │       │  JSON array under key "crudProducts"                           │
//! │       ▼                                                                 │
//! │  KeyValueStore                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each repository owns one or more keys. Collections are stored as a JSON
//! array under a single key and rewritten as a whole.
//!
//! ## Available Repositories
//!
//! - [`UserRepository`](user::UserRepository) - Local accounts
//! - [`ProductRepository`](product::ProductRepository) - Dashboard products
//! - [`PreferenceRepository`](preference::PreferenceRepository) - Theme and session

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreResult;
use crate::kv::KeyValueStore;

pub mod preference;
pub mod product;
pub mod user;

/// Reads a JSON-encoded value; an absent key yields `T::default()`.
pub(crate) fn load_json<T>(store: &dyn KeyValueStore, key: &str) -> StoreResult<T>
where
    T: DeserializeOwned + Default,
{
    match store.get(key)? {
        Some(text) => Ok(serde_json::from_str(&text)?),
        None => Ok(T::default()),
    }
}

pub(crate) fn save_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
{
    store.set(key, &serde_json::to_string(value)?)
}
