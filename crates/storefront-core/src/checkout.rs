//! # Checkout
//!
//! Simulated checkout: summarize what would be bought, then confirm it.
//! There is no payment step.
//!
//! ## Flow
//! ```text
//! CartState ──► CheckoutSummary::from_cart(scope) ──► confirm(now)
//!                    │                                    │
//!                    ├─ EmptyCart                         ▼
//!                    └─ NothingSelected          OrderConfirmation
//!                                                        │
//!                                                        ▼ follow_up()
//!                                  ClearCart (All) / DeleteSelectedItems (Selected)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{CartAction, CartLineItem, CartState};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::ProductId;

/// Which lines a checkout covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum CheckoutScope {
    #[default]
    All,
    Selected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
pub struct CheckoutLine {
    pub id: ProductId,
    pub title: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

impl From<&CartLineItem> for CheckoutLine {
    fn from(item: &CartLineItem) -> Self {
        CheckoutLine {
            id: item.id,
            title: item.title.clone(),
            unit_price: item.price,
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

/// What a checkout would cover, frozen from a cart snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
pub struct CheckoutSummary {
    pub scope: CheckoutScope,
    pub lines: Vec<CheckoutLine>,
    pub units: i64,
    pub total: Money,
}

impl CheckoutSummary {
    pub fn from_cart(cart: &CartState, scope: CheckoutScope) -> CoreResult<Self> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let lines: Vec<CheckoutLine> = match scope {
            CheckoutScope::All => cart.items().iter().map(CheckoutLine::from).collect(),
            CheckoutScope::Selected => cart.selected_items().map(CheckoutLine::from).collect(),
        };

        if lines.is_empty() {
            return Err(CoreError::NothingSelected);
        }

        Ok(CheckoutSummary {
            scope,
            units: lines.iter().map(|l| l.quantity).sum(),
            total: lines.iter().map(|l| l.line_total).sum(),
            lines,
        })
    }

    /// Turns the summary into a placed order.
    pub fn confirm(self, now: DateTime<Utc>) -> OrderConfirmation {
        OrderConfirmation {
            order_id: Uuid::new_v4(),
            placed_at: now,
            summary: self,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[cfg_attr(feature = "ts-export", ts(export))]
pub struct OrderConfirmation {
    #[ts(type = "string")]
    pub order_id: Uuid,
    #[ts(type = "string")]
    pub placed_at: DateTime<Utc>,
    pub summary: CheckoutSummary,
}

impl OrderConfirmation {
    /// The cart action to dispatch once the order is placed.
    pub fn follow_up(&self) -> CartAction {
        match self.summary.scope {
            CheckoutScope::All => CartAction::ClearCart,
            CheckoutScope::Selected => CartAction::DeleteSelectedItems,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cart::apply;
    use crate::types::ItemDescriptor;

    fn filled_cart() -> Arc<CartState> {
        let a = ItemDescriptor::new(1, "A", Money::from_cents(1000), "a");
        let b = ItemDescriptor::new(2, "B", Money::from_cents(250), "b");
        let state = Arc::new(CartState::initial());
        let state = apply(&state, &CartAction::AddItem(a.clone()));
        let state = apply(&state, &CartAction::AddItem(a));
        apply(&state, &CartAction::AddItem(b))
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let err = CheckoutSummary::from_cart(&CartState::initial(), CheckoutScope::All);
        assert_eq!(err, Err(CoreError::EmptyCart));
    }

    #[test]
    fn test_nothing_selected_is_rejected() {
        let state = apply(&filled_cart(), &CartAction::DeselectAll);
        let err = CheckoutSummary::from_cart(&state, CheckoutScope::Selected);
        assert_eq!(err, Err(CoreError::NothingSelected));

        // scope All ignores selection
        assert!(CheckoutSummary::from_cart(&state, CheckoutScope::All).is_ok());
    }

    #[test]
    fn test_summary_all_lines() {
        let summary = CheckoutSummary::from_cart(&filled_cart(), CheckoutScope::All).unwrap();
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.units, 3);
        assert_eq!(summary.total.cents(), 2250);
        assert_eq!(summary.lines[0].line_total.cents(), 2000);
    }

    #[test]
    fn test_selected_scope_and_follow_up() {
        let state = apply(&filled_cart(), &CartAction::ToggleSelection(1));
        let summary = CheckoutSummary::from_cart(&state, CheckoutScope::Selected).unwrap();
        assert_eq!(summary.units, 1);
        assert_eq!(summary.total.cents(), 250);

        let confirmation = summary.confirm(Utc::now());
        assert_eq!(confirmation.follow_up(), CartAction::DeleteSelectedItems);

        let after = apply(&state, &confirmation.follow_up());
        assert_eq!(after.total(), 2);
        assert!(after.contains(1));
        assert!(!after.contains(2));
    }

    #[test]
    fn test_confirm_all_clears_cart() {
        let summary = CheckoutSummary::from_cart(&filled_cart(), CheckoutScope::All).unwrap();
        let first = summary.clone().confirm(Utc::now());
        let second = summary.confirm(Utc::now());

        assert_ne!(first.order_id, second.order_id);
        assert_eq!(first.follow_up(), CartAction::ClearCart);
    }
}
