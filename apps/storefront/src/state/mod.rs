//! # State Module
//!
//! Session state for the storefront shell.
//!
//! Each concern gets its own state type and every command takes only the
//! pieces it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │ SessionCart  │  │  AuthState   │  │   Storage    │  │ AppConfig  │  │
//! │  │              │  │              │  │              │  │            │  │
//! │  │  Mutex<Arc<  │  │  users +     │  │  KeyValue    │  │  toml +    │  │
//! │  │   CartState  │  │  session     │  │  Store       │  │  env       │  │
//! │  │  >>          │  │  email       │  │  (shared)    │  │            │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionCart: one lock around an Arc swap                            │
//! │  • AuthState: Mutex around the signed-in user                          │
//! │  • Storage: the backend serializes its own writes                      │
//! │  • AppConfig: read-only after startup                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod cart;
mod config;

pub use auth::{AuthError, AuthResult, AuthState};
pub use cart::{Dispatched, SessionCart};
pub use config::{
    AppConfig, CatalogConfig, ConfigError, ConfigResult, LoggingConfig, StorageConfig,
    DEFAULT_LOG_FILTER,
};
