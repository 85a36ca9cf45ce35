//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ ItemDescriptor  │   │  CartLineItem   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  (cart module)  │       │
//! │  │  id (i64)       │──►│  id             │──►│  + quantity     │       │
//! │  │  title, price   │   │  title, price   │   │  + selected     │       │
//! │  │  category, ...  │   │  image          │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  ProductDraft   │   │  User / Theme   │                             │
//! │  │  (no id yet)    │   │  session state  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

/// Product identity. Unique key within the cart and the local catalog.
pub type ProductId = i64;

// =============================================================================
// Item Descriptor
// =============================================================================

/// What the catalog layer hands to the cart's "add item" operation.
///
/// Carries no quantity or selection state: those are owned by the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
pub struct ItemDescriptor {
    pub id: ProductId,
    pub title: String,
    pub price: Money,
    /// Opaque image reference (usually a URL).
    pub image: String,
}

impl ItemDescriptor {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        ItemDescriptor {
            id,
            title: title.into(),
            price,
            image: image.into(),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product, either from the remote feed or the local dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Money,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl Product {
    /// Builds a product from a dashboard draft and an assigned id.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Product {
            id,
            title: draft.title,
            price: draft.price,
            description: draft.description,
            category: draft.category,
            image: draft.image,
        }
    }

    /// The subset of this product that goes into the cart.
    pub fn descriptor(&self) -> ItemDescriptor {
        ItemDescriptor::new(self.id, self.title.clone(), self.price, self.image.clone())
    }
}

/// A product without an id, as produced by the dashboard form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
pub struct ProductDraft {
    pub title: String,
    pub price: Money,
    pub description: String,
    pub category: String,
    pub image: String,
}

// =============================================================================
// User
// =============================================================================

/// The signed-in identity for the session. Only the email is public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
pub struct User {
    pub email: String,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        User {
            email: email.into(),
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ValidationError::invalid_format(
                "theme",
                "must be 'light' or 'dark'",
            )),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_copies_cart_fields() {
        let product = Product {
            id: 7,
            title: "Backpack".to_string(),
            price: Money::from_cents(10995),
            description: "Fits a laptop".to_string(),
            category: "men's clothing".to_string(),
            image: "https://img/7.jpg".to_string(),
        };

        let descriptor = product.descriptor();
        assert_eq!(descriptor.id, 7);
        assert_eq!(descriptor.title, "Backpack");
        assert_eq!(descriptor.price.cents(), 10995);
        assert_eq!(descriptor.image, "https://img/7.jpg");
    }

    #[test]
    fn test_theme_toggle_and_parse() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
