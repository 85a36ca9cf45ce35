//! # Cart Totals
//!
//! Derived figures computed on demand from a [`CartState`].
//!
//! The cart keeps exactly one stored counter, the unit count. Everything that
//! involves money is computed here and never written back into the state:
//!
//! ```text
//! CartState { items, total }          CartTotals
//!             │      │                ├── line_count        = items.len()
//!             │      └──────────────► ├── unit_count        = total
//!             └─────────────────────► ├── subtotal          = Σ price × qty
//!                                     ├── selected_units    = Σ qty (selected)
//!                                     └── selected_subtotal = Σ price × qty (selected)
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::cart::{CartLineItem, CartState};
use crate::money::Money;

/// Counts and sums over a cart snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
pub struct CartTotals {
    /// Distinct lines in the cart.
    pub line_count: usize,
    /// Units across all lines. Always equal to `CartState::total()`.
    pub unit_count: i64,
    /// Price × quantity over all lines.
    pub subtotal: Money,
    /// Units across selected lines only.
    pub selected_units: i64,
    /// Price × quantity over selected lines only.
    pub selected_subtotal: Money,
}

impl CartTotals {
    pub fn from_cart(cart: &CartState) -> Self {
        let selected: Vec<&CartLineItem> = cart.selected_items().collect();

        CartTotals {
            line_count: cart.len(),
            unit_count: cart.total(),
            subtotal: cart.items().iter().map(CartLineItem::line_total).sum(),
            selected_units: selected.iter().map(|item| item.quantity).sum(),
            selected_subtotal: selected.iter().map(|item| item.line_total()).sum(),
        }
    }
}

impl From<&CartState> for CartTotals {
    fn from(cart: &CartState) -> Self {
        CartTotals::from_cart(cart)
    }
}
