//! # storefront-store: Local Storage for the Storefront
//!
//! Everything the storefront remembers between runs: local accounts,
//! dashboard products, the theme and the signed-in email.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command (register / create_product / toggle_theme)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐    ┌────────────┐  │   │
//! │  │   │   Storage     │    │  Repositories    │    │ KeyValue-  │  │   │
//! │  │   │ (storage.rs)  │───►│ user / product / │───►│ Store      │  │   │
//! │  │   │               │    │ preference       │    │ (kv.rs)    │  │   │
//! │  │   └───────────────┘    └──────────────────┘    └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data dir>/storage.json                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use storefront_store::Storage;
//! use storefront_core::Theme;
//!
//! let storage = Storage::in_memory();
//! storage.preferences().set_theme(Theme::Dark).unwrap();
//! assert_eq!(storage.preferences().theme().unwrap(), Theme::Dark);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod repository;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use storage::Storage;

pub use repository::preference::PreferenceRepository;
pub use repository::product::ProductRepository;
pub use repository::user::{StoredUser, UserRepository};
