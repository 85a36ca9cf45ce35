//! # Catalog Filtering
//!
//! Search and category filtering over product lists. The product list page
//! shows remote and locally created products through the same filter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::Product;

/// Categories published by the remote catalog feed.
pub const KNOWN_CATEGORIES: [&str; 4] = [
    "electronics",
    "jewelery",
    "men's clothing",
    "women's clothing",
];

// =============================================================================
// Category Filter
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
#[serde(rename_all = "lowercase", tag = "kind", content = "name")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name.eq_ignore_ascii_case(category.trim()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    /// Empty text and `"all"` mean no filter; anything else names a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Named(s.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}

// =============================================================================
// Query
// =============================================================================

/// A search term plus a category filter.
///
/// A product matches when its title contains the search term
/// (case-insensitive) and the category filter accepts its category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
pub struct CatalogQuery {
    pub search: String,
    pub category: CategoryFilter,
}

impl CatalogQuery {
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        CatalogQuery {
            search: search.into(),
            category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        let title_ok = needle.is_empty() || product.title.to_lowercase().contains(&needle);
        title_ok && self.category.accepts(&product.category)
    }

    /// Keeps matching products in their original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
