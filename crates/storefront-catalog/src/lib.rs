//! Remote product catalog for the storefront.
//!
//! The catalog is read-only: products come from a public HTTP feed
//! ([`HttpCatalog`]) or, offline and in tests, from memory
//! ([`StaticCatalog`]). Both sit behind [`CatalogSource`].
//! [`ProductLookup`] merges them with products created on the dashboard.
//!
//! Every failure is returned as a [`CatalogError`]; callers decide what to
//! show from [`CatalogError::kind`].

pub mod error;
pub mod http;
pub mod lookup;
pub mod memory;
pub mod source;

pub use error::{CatalogError, CatalogErrorKind, CatalogResult};
pub use http::{CatalogSettings, HttpCatalog, WireProduct};
pub use lookup::ProductLookup;
pub use memory::StaticCatalog;
pub use source::CatalogSource;
