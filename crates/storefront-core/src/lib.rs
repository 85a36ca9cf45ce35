//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It contains the cart state
//! machine and everything derived from it as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Session Shell (apps/storefront)              │   │
//! │  │    products ──► add ──► cart ──► checkout ──► confirm          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartAction                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │  totals   │  │ checkout  │  │ validation│  │   │
//! │  │   │ CartState │  │CartTotals │  │ Summary   │  │   rules   │  │   │
//! │  │   │ apply()   │  │ (derived) │  │ Confirm   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The cart state machine (`CartState`, `CartAction`, `apply`)
//! - [`totals`] - Unit counts and monetary sums derived from a cart
//! - [`checkout`] - Simulated checkout summaries and confirmations
//! - [`catalog`] - Search and category filtering over products
//! - [`types`] - Domain types (Product, ItemDescriptor, User, Theme)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Form and input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_core::cart::{apply, CartAction, CartState};
//! use storefront_core::{ItemDescriptor, Money};
//!
//! let empty = Arc::new(CartState::initial());
//! let item = ItemDescriptor::new(1, "A", Money::from_cents(1000), "x");
//!
//! let once = apply(&empty, &CartAction::AddItem(item.clone()));
//! let twice = apply(&once, &CartAction::AddItem(item));
//! assert_eq!(twice.total(), 2);
//! assert_eq!(twice.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartLineItem, CartState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use totals::CartTotals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum length of a local account password.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum length of a catalog search query.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 100;

/// Largest quantity a single cart line can hold.
///
/// Requested quantities above it are lowered to it, and adding to a line
/// already at the cap leaves it there.
pub const MAX_LINE_QUANTITY: i64 = 9_999;
