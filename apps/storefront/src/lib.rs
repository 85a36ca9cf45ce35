//! # Storefront Library
//!
//! The session application: state, commands and the shell around them.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs          ◄─── You are here (session setup, logging)
//! ├── cli.rs          ◄─── clap command set, one-shot + interactive shell
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Session cart (pure transitions behind a lock)
//! │   ├── auth.rs     ◄─── Local accounts and sign-in
//! │   └── config.rs   ◄─── AppConfig (toml + env)
//! ├── commands/
//! │   ├── cart.rs, catalog.rs, dashboard.rs
//! │   └── auth.rs, checkout.rs, preferences.rs
//! └── error.rs        ◄─── ApiError for commands, StartupError for main
//! ```
//!
//! ## State Management (Multiple State Types)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session                                                                │
//! │  ├── cart:    SessionCart      (cart commands, checkout)               │
//! │  ├── auth:    AuthState        (auth, dashboard, checkout)             │
//! │  ├── storage: Storage          (dashboard, preferences)                │
//! │  └── lookup:  ProductLookup    (catalog, add_to_cart)                  │
//! │                                                                         │
//! │  Session only groups the pieces; each command receives just the        │
//! │  fields it uses.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use storefront_catalog::{
    CatalogResult, CatalogSource, HttpCatalog, ProductLookup, StaticCatalog,
};
use storefront_store::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::StartupError;
use state::{AppConfig, AuthState, CatalogConfig, SessionCart};

/// Everything one running storefront owns.
pub struct Session {
    pub cart: SessionCart,
    pub auth: AuthState,
    pub storage: Storage,
    pub lookup: ProductLookup,
}

impl Session {
    /// A signed-out session with an empty cart.
    pub fn new(storage: Storage, catalog: Arc<dyn CatalogSource>) -> Self {
        Session {
            cart: SessionCart::new(),
            auth: AuthState::new(storage.users(), storage.preferences()),
            lookup: ProductLookup::new(storage.products(), catalog),
            storage,
        }
    }

    /// Opens storage and the catalog described by `config`, then restores
    /// the previous sign-in if there was one.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  1. Data dir ──► <data_dir>/storage.json (created if missing)          │
    /// │  2. Catalog  ──► offline_file set? StaticCatalog : HttpCatalog         │
    /// │  3. Session  ──► empty cart, AuthState::restore()                      │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn open(config: &AppConfig) -> Result<Self, StartupError> {
        let data_dir = config.data_dir()?;
        let storage = Storage::open_dir(&data_dir)?;
        info!(?data_dir, "Storage opened");

        let session = Session::new(storage, catalog_source(&config.catalog)?);
        session.auth.restore()?;
        Ok(session)
    }
}

/// Picks the product source: a saved feed file when configured, otherwise
/// the HTTP feed.
pub fn catalog_source(config: &CatalogConfig) -> CatalogResult<Arc<dyn CatalogSource>> {
    match &config.offline_file {
        Some(path) => {
            info!(path = %path.display(), "Using offline catalog");
            Ok(Arc::new(StaticCatalog::from_file(path)?))
        }
        None => {
            let catalog = HttpCatalog::new(&config.settings)?;
            info!(base_url = catalog.base_url(), "Using remote catalog");
            Ok(Arc::new(catalog))
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so command output on stdout stays valid JSON.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_catalog=trace` - Trace one crate only
/// - Default: `default_filter` (from config, `info,storefront=debug`)
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
