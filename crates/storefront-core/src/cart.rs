//! # Cart State Machine
//!
//! The shopping cart as a pure transition function over immutable states.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Transitions                               │
//! │                                                                         │
//! │  CartAction                  Effect on items            Effect on total │
//! │  ──────────                  ───────────────            ─────────────── │
//! │  AddItem(desc)       ──────► qty+1 or push(qty 1) ───►  +(new-old)     │
//! │  DeleteItem(id)      ──────► remove line          ───►  -qty           │
//! │  IncreaseQuantity(id)──────► qty+1, up to the cap ───►  +(new-old)     │
//! │  DecreaseQuantity(id)──────► qty-1 / remove at 1  ───►  -1             │
//! │  SetQuantity{id,n}   ──────► qty = clamp(n,1,cap) ───►  +(new-old)     │
//! │  ToggleSelection(id) ──────► selected = !selected ───►  unchanged      │
//! │  SelectAll/Deselect  ──────► selected = true/false───►  unchanged      │
//! │  DeleteSelectedItems ──────► drop selected lines  ───►  -Σ removed qty │
//! │  ClearCart           ──────► initial state        ───►  0              │
//! │                                                                         │
//! │  Unknown id ──► no-op: `apply` hands back the SAME Arc                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id; lines keep insertion order
//! - `1 <= quantity <= MAX_LINE_QUANTITY` on every line (a line that would
//!   hit 0 is removed; the cap is the "cap" in the table above)
//! - `total` equals the sum of all line quantities (a unit count, never money)
//!
//! Monetary sums are not stored here; see [`crate::totals`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{ItemDescriptor, ProductId};
use crate::MAX_LINE_QUANTITY;

// =============================================================================
// Line Item
// =============================================================================

/// One distinct product held in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
pub struct CartLineItem {
    pub id: ProductId,
    pub title: String,
    /// Unit price captured when the item was first added.
    pub price: Money,
    pub image: String,
    /// Between 1 and [`MAX_LINE_QUANTITY`].
    pub quantity: i64,
    /// Scopes checkout and bulk deletion. New lines start selected.
    pub selected: bool,
}

impl CartLineItem {
    fn from_descriptor(descriptor: &ItemDescriptor) -> Self {
        CartLineItem {
            id: descriptor.id,
            title: descriptor.title.clone(),
            price: descriptor.price,
            image: descriptor.image.clone(),
            quantity: 1,
            selected: true,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Actions
// =============================================================================

/// A discrete cart operation.
///
/// Serialized in the `{ "type": ..., "payload": ... }` shape the browser
/// frontend dispatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    AddItem(ItemDescriptor),
    DeleteItem(ProductId),
    IncreaseQuantity(ProductId),
    DecreaseQuantity(ProductId),
    SetQuantity { id: ProductId, quantity: i64 },
    ToggleSelection(ProductId),
    SelectAll,
    DeselectAll,
    DeleteSelectedItems,
    ClearCart,
}

impl CartAction {
    /// Short name used in log lines.
    pub const fn name(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::DeleteItem(_) => "delete_item",
            CartAction::IncreaseQuantity(_) => "increase_quantity",
            CartAction::DecreaseQuantity(_) => "decrease_quantity",
            CartAction::SetQuantity { .. } => "set_quantity",
            CartAction::ToggleSelection(_) => "toggle_selection",
            CartAction::SelectAll => "select_all",
            CartAction::DeselectAll => "deselect_all",
            CartAction::DeleteSelectedItems => "delete_selected_items",
            CartAction::ClearCart => "clear_cart",
        }
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The cart aggregate.
///
/// Fields are private: a `CartState` only comes into existence as the
/// initial state or as the output of [`CartState::reduce`], so the
/// invariants above hold for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
pub struct CartState {
    items: Vec<CartLineItem>,
    /// Unit count across all lines.
    total: i64,
}

impl CartState {
    /// The empty cart every session starts with.
    pub const fn initial() -> Self {
        CartState {
            items: Vec::new(),
            total: 0,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The running unit count (what the cart badge shows).
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn selected_items(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.iter().filter(|item| item.selected)
    }

    /// True when the cart is non-empty and every line is selected.
    pub fn all_selected(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.selected)
    }

    /// Recomputes the unit count from the lines.
    ///
    /// Always equal to [`CartState::total`]; tests use it to check the
    /// running counter.
    pub fn sum_quantities(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Computes the state that follows `action`.
    ///
    /// Returns `None` when the action does not apply (unknown id), in which
    /// case the current state stands. `self` is never modified.
    pub fn reduce(&self, action: &CartAction) -> Option<CartState> {
        match action {
            CartAction::AddItem(descriptor) => match self.get(descriptor.id) {
                Some(_) => self.with_quantity(descriptor.id, bump),
                None => {
                    let mut items = self.items.clone();
                    items.push(CartLineItem::from_descriptor(descriptor));
                    Some(CartState {
                        items,
                        total: self.total + 1,
                    })
                }
            },

            CartAction::DeleteItem(id) => {
                let removed = self.get(*id)?.quantity;
                Some(CartState {
                    items: self.items_without(|item| item.id == *id),
                    total: self.total - removed,
                })
            }

            CartAction::IncreaseQuantity(id) => self.with_quantity(*id, bump),

            CartAction::DecreaseQuantity(id) => {
                let current = self.get(*id)?.quantity;
                let items = if current > 1 {
                    self.update_item(*id, |item| item.quantity -= 1)?
                } else {
                    self.items_without(|item| item.id == *id)
                };
                Some(CartState {
                    items,
                    total: self.total - 1,
                })
            }

            CartAction::SetQuantity { id, quantity } => {
                let requested = *quantity;
                self.with_quantity(*id, |_| requested)
            }

            CartAction::ToggleSelection(id) => {
                let items = self.update_item(*id, |item| item.selected = !item.selected)?;
                Some(CartState {
                    items,
                    total: self.total,
                })
            }

            CartAction::SelectAll => Some(self.with_selection(true)),

            CartAction::DeselectAll => Some(self.with_selection(false)),

            CartAction::DeleteSelectedItems => {
                let removed: i64 = self.selected_items().map(|item| item.quantity).sum();
                Some(CartState {
                    items: self.items_without(|item| item.selected),
                    total: self.total - removed,
                })
            }

            CartAction::ClearCart => Some(CartState::initial()),
        }
    }

    /// Replaces a line's quantity with `next(old)` clamped to
    /// `1..=MAX_LINE_QUANTITY`, moving the total by the difference.
    fn with_quantity(&self, id: ProductId, next: impl FnOnce(i64) -> i64) -> Option<CartState> {
        let old = self.get(id)?.quantity;
        let new = next(old).clamp(1, MAX_LINE_QUANTITY);
        let items = self.update_item(id, |item| item.quantity = new)?;
        Some(CartState {
            items,
            total: self.total - old + new,
        })
    }

    fn update_item(
        &self,
        id: ProductId,
        update: impl FnOnce(&mut CartLineItem),
    ) -> Option<Vec<CartLineItem>> {
        if !self.contains(id) {
            return None;
        }
        let mut items = self.items.clone();
        items.iter_mut().find(|item| item.id == id).map(update)?;
        Some(items)
    }

    fn items_without(&self, remove: impl Fn(&CartLineItem) -> bool) -> Vec<CartLineItem> {
        self.items
            .iter()
            .filter(|item| !remove(item))
            .cloned()
            .collect()
    }

    fn with_selection(&self, selected: bool) -> CartState {
        CartState {
            items: self
                .items
                .iter()
                .map(|item| CartLineItem {
                    selected,
                    ..item.clone()
                })
                .collect(),
            total: self.total,
        }
    }
}

fn bump(quantity: i64) -> i64 {
    quantity.saturating_add(1)
}

// =============================================================================
// Transition Function
// =============================================================================

/// Applies `action` to a shared cart state.
///
/// ## Change Detection
/// ```text
/// let next = apply(&state, &action);
/// if Arc::ptr_eq(&state, &next) {
///     // no-op: unknown id, nothing to re-render
/// }
/// ```
/// Every effective transition returns a freshly allocated state; the input
/// is never touched.
pub fn apply(state: &Arc<CartState>, action: &CartAction) -> Arc<CartState> {
    match state.reduce(action) {
        Some(next) => Arc::new(next),
        None => Arc::clone(state),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
