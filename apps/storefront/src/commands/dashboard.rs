//! # Dashboard Commands
//!
//! Managing locally created products. Every command here requires a
//! signed-in user.
//!
//! ```text
//! dashboard add --title Mug --price 7.50 --category kitchen ...
//!   │
//!   ├── auth.require_user() ──── signed out ──► UNAUTHORIZED
//!   ├── validate_product_draft ─ bad input ───► VALIDATION_ERROR
//!   └── products.insert(draft) ─────────────► Product { id: <epoch ms>, .. }
//! ```

use serde::{Deserialize, Serialize};
use storefront_core::validation::validate_product_draft;
use storefront_core::{Product, ProductDraft, ProductId};
use storefront_store::ProductRepository;
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::state::AuthState;

/// Raw form input for creating or editing a product.
///
/// Price is kept as text until validation so "7.5" and "7.50" both parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub category: String,
    pub description: String,
    pub image: String,
}

impl ProductForm {
    fn validate(&self) -> ApiResult<ProductDraft> {
        Ok(validate_product_draft(
            &self.title,
            &self.price,
            &self.category,
            &self.description,
            &self.image,
        )?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deleted {
    pub id: ProductId,
}

/// Lists dashboard products, newest first.
pub fn list_local_products(
    auth: &AuthState,
    products: &ProductRepository,
) -> ApiResult<Vec<Product>> {
    auth.require_user()?;
    debug!("list_local_products command");
    Ok(products.list()?)
}

pub fn create_product(
    auth: &AuthState,
    products: &ProductRepository,
    form: &ProductForm,
) -> ApiResult<Product> {
    let user = auth.require_user()?;
    let draft = form.validate()?;

    let product = products.insert(draft)?;
    info!(id = product.id, by = %user.email, "Product created");
    Ok(product)
}

/// Replaces every field of an existing dashboard product.
pub fn update_product(
    auth: &AuthState,
    products: &ProductRepository,
    product_id: ProductId,
    form: &ProductForm,
) -> ApiResult<Product> {
    let user = auth.require_user()?;
    let draft = form.validate()?;

    let product = products.update(product_id, draft)?;
    info!(id = product.id, by = %user.email, "Product updated");
    Ok(product)
}

pub fn delete_product(
    auth: &AuthState,
    products: &ProductRepository,
    product_id: ProductId,
) -> ApiResult<Deleted> {
    let user = auth.require_user()?;

    products.delete(product_id)?;
    info!(id = product_id, by = %user.email, "Product deleted");
    Ok(Deleted { id: product_id })
}
