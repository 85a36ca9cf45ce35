//! # Catalog Commands
//!
//! Browsing the product list: the remote feed plus products created in
//! the dashboard, filtered by title search and category.

use storefront_catalog::ProductLookup;
use storefront_core::catalog::{CatalogQuery, CategoryFilter, KNOWN_CATEGORIES};
use storefront_core::validation::validate_search_query;
use storefront_core::{Product, ProductId};
use tracing::debug;

use crate::error::ApiResult;

/// Lists products matching a search term and category.
///
/// ## Arguments
/// * `search` - Case-insensitive substring of the title (empty matches all)
/// * `category` - Category name, or `all` / empty for every category
///
/// ## Returns
/// Matching products, dashboard products first
pub async fn list_products(
    lookup: &ProductLookup,
    search: &str,
    category: &str,
) -> ApiResult<Vec<Product>> {
    let search = validate_search_query(search)?;
    let category: CategoryFilter = category.parse()?;
    debug!(search = %search, category = %category, "list_products command");

    let query = CatalogQuery::new(search, category);
    let products = lookup.list().await?;
    Ok(query.apply(&products).into_iter().cloned().collect())
}

/// Category names offered by the product filter.
pub fn list_categories() -> Vec<&'static str> {
    KNOWN_CATEGORIES.to_vec()
}

/// Gets one product by id.
pub async fn get_product(lookup: &ProductLookup, product_id: ProductId) -> ApiResult<Product> {
    debug!(product_id, "get_product command");
    Ok(lookup.find(product_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::sync::Arc;
    use storefront_catalog::StaticCatalog;
    use storefront_core::Money;
    use storefront_store::Storage;

    fn product(id: i64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: Money::from_cents(1000),
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
        }
    }

    fn lookup(catalog: StaticCatalog) -> ProductLookup {
        ProductLookup::new(Storage::in_memory().products(), Arc::new(catalog))
    }

    #[tokio::test]
    async fn test_filters_by_search_and_category() {
        let lookup = lookup(StaticCatalog::with_products(vec![
            product(1, "Gold Ring", "jewelery"),
            product(2, "Cotton Jacket", "men's clothing"),
            product(3, "Rain Jacket", "women's clothing"),
        ]));

        let all = list_products(&lookup, "", "all").await.unwrap();
        assert_eq!(all.len(), 3);

        let jackets = list_products(&lookup, "JACKET", "").await.unwrap();
        assert_eq!(jackets.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);

        let womens = list_products(&lookup, "jacket", "women's clothing").await.unwrap();
        assert_eq!(womens.len(), 1);
        assert_eq!(womens[0].id, 3);
    }

    #[test]
    fn test_known_categories() {
        let categories = list_categories();
        assert_eq!(categories.len(), 4);
        assert!(categories.contains(&"jewelery"));
    }

    #[tokio::test]
    async fn test_overlong_search_is_rejected() {
        let lookup = lookup(StaticCatalog::default());
        let err = list_products(&lookup, &"x".repeat(101), "").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_feed_outage() {
        let lookup = lookup(StaticCatalog::unavailable());
        let err = list_products(&lookup, "", "").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogUnavailable);

        let err = get_product(&lookup, 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
    }
}
