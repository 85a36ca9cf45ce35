//! HTTP client for the public product feed.
//!
//! # Endpoints
//!
//! - `GET {base_url}/products` - every product
//! - `GET {base_url}/products/{id}` - one product
//!
//! The public feed answers an unknown id with `200 OK` and an empty body
//! rather than a 404, so an empty body is treated as not found.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use storefront_core::{Money, Product, ProductId};
use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::source::CatalogSource;

/// Public feed used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Request timeout used when nothing is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Settings
// =============================================================================

/// Where the feed lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// Wire Format
// =============================================================================

/// A product as the feed publishes it. Prices are JSON decimals.
#[derive(Debug, Clone, Deserialize)]
pub struct WireProduct {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
}

impl TryFrom<WireProduct> for Product {
    type Error = CatalogError;

    fn try_from(wire: WireProduct) -> Result<Self, Self::Error> {
        let price = Money::from_wire_decimal(wire.price).ok_or_else(|| {
            CatalogError::Decode(format!("product {} has an invalid price", wire.id))
        })?;

        Ok(Product {
            id: wire.id,
            title: wire.title,
            price,
            description: wire.description,
            category: wire.category,
            image: wire.image,
        })
    }
}

/// Decodes the body of `GET /products`.
pub fn decode_product_list(body: &str) -> CatalogResult<Vec<Product>> {
    let wire: Vec<WireProduct> = serde_json::from_str(body)?;
    wire.into_iter().map(Product::try_from).collect()
}

/// Decodes the body of `GET /products/{id}`; blank or `null` means not found.
pub fn decode_product(id: ProductId, body: &str) -> CatalogResult<Product> {
    let body = body.trim();
    if body.is_empty() || body == "null" {
        return Err(CatalogError::NotFound(id));
    }
    let wire: WireProduct = serde_json::from_str(body)?;
    Product::try_from(wire)
}

// =============================================================================
// Client
// =============================================================================

/// Product feed client. Cheap to clone.
#[derive(Clone)]
pub struct HttpCatalog {
    inner: Arc<HttpCatalogInner>,
}

struct HttpCatalogInner {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Builds a client for the configured feed.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(settings: &CatalogSettings) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(HttpCatalog {
            inner: Arc::new(HttpCatalogInner {
                client,
                base_url: settings.base_url.trim_end_matches('/').to_string(),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// GET `path` and return the body of a successful response.
    async fn get_text(&self, path: &str) -> CatalogResult<String> {
        let url = self.url(path);
        debug!(%url, "Fetching from catalog");

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Catalog request rejected");
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let body = self.get_text("/products").await?;
        let products = decode_product_list(&body)?;
        debug!(count = products.len(), "Fetched catalog");
        Ok(products)
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
        match self.get_text(&format!("/products/{id}")).await {
            Ok(body) => decode_product(id, &body),
            Err(CatalogError::Status { status: 404 }) => Err(CatalogError::NotFound(id)),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogErrorKind;

    const LIST_BODY: &str = r#"[
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 22.3,
            "description": "Slim-fitting style",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/71-3HjGNDUL.jpg"
        }
    ]"#;

    #[test]
    fn test_decode_list_converts_prices_to_cents() {
        let products = decode_product_list(LIST_BODY).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price.cents(), 10995);
        assert_eq!(products[1].price.cents(), 2230);
        assert_eq!(products[1].category, "men's clothing");
    }

    #[test]
    fn test_decode_single_empty_body_is_not_found() {
        for body in ["", "   ", "null"] {
            let err = decode_product(42, body).unwrap_err();
            assert_eq!(err.kind(), CatalogErrorKind::NotFound);
        }
    }

    #[test]
    fn test_decode_single_malformed() {
        let err = decode_product(1, r#"{"id": 1}"#).unwrap_err();
        assert_eq!(err.kind(), CatalogErrorKind::Malformed);
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let catalog = HttpCatalog::new(&CatalogSettings {
            base_url: "https://example.test/".to_string(),
            timeout_secs: 1,
        })
        .unwrap();
        assert_eq!(catalog.base_url(), "https://example.test");
        assert_eq!(catalog.url("/products"), "https://example.test/products");
    }

    #[test]
    fn test_settings_default() {
        let settings = CatalogSettings::default();
        assert_eq!(settings.base_url, "https://fakestoreapi.com");
        assert_eq!(settings.timeout_secs, 10);
    }
}
