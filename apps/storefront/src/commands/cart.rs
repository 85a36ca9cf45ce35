//! # Cart Commands
//!
//! Shell commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │ Preview  │     │ Placed   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │                   add_to_cart                  confirm_checkout         │
//! │                   increase / decrease          (checkout.rs)            │
//! │                   toggle / select_all                    │              │
//! │                        │                                 ▼              │
//! │                   clear_cart ─────────────────► (back to empty, or      │
//! │                                                  unselected lines left) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands naming an id that is not in the cart succeed with
//! `changed: false`.

use serde::Serialize;
use storefront_catalog::ProductLookup;
use storefront_core::{CartAction, CartLineItem, CartState, CartTotals, ProductId};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::{Dispatched, SessionCart};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    /// Units in the cart.
    pub total: i64,
    pub totals: CartTotals,
    /// False when the command left the cart as it was.
    pub changed: bool,
}

impl CartResponse {
    fn snapshot(cart: &CartState) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            total: cart.total(),
            totals: CartTotals::from(cart),
            changed: false,
        }
    }
}

impl From<Dispatched> for CartResponse {
    fn from(out: Dispatched) -> Self {
        CartResponse {
            changed: out.changed,
            ..CartResponse::snapshot(&out.state)
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and calculated totals
pub fn get_cart(cart: &SessionCart) -> CartResponse {
    debug!("get_cart command");
    CartResponse::snapshot(&cart.snapshot())
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity goes up by one
/// - Otherwise: added as a new, selected line with quantity 1
/// - Price is frozen at the time of adding
///
/// ## Workflow
/// ```text
/// add 3
///   │
///   ▼
/// ProductLookup::find(3) ── dashboard product? ── catalog feed?
///   │
///   ▼
/// dispatch(AddItem(product.descriptor()))
/// ```
pub async fn add_to_cart(
    lookup: &ProductLookup,
    cart: &SessionCart,
    product_id: ProductId,
) -> ApiResult<CartResponse> {
    debug!(product_id, "add_to_cart command");

    let product = lookup.find(product_id).await?;
    Ok(cart.dispatch(&CartAction::AddItem(product.descriptor())).into())
}

/// Removes a line from the cart regardless of its quantity.
pub fn remove_from_cart(cart: &SessionCart, product_id: ProductId) -> CartResponse {
    debug!(product_id, "remove_from_cart command");
    cart.dispatch(&CartAction::DeleteItem(product_id)).into()
}

pub fn increase_quantity(cart: &SessionCart, product_id: ProductId) -> CartResponse {
    debug!(product_id, "increase_quantity command");
    cart.dispatch(&CartAction::IncreaseQuantity(product_id)).into()
}

/// Lowers the quantity by one; a line at quantity 1 is removed.
pub fn decrease_quantity(cart: &SessionCart, product_id: ProductId) -> CartResponse {
    debug!(product_id, "decrease_quantity command");
    cart.dispatch(&CartAction::DecreaseQuantity(product_id)).into()
}

/// Sets a line's quantity, clamped to `1..=MAX_LINE_QUANTITY`.
pub fn set_quantity(cart: &SessionCart, product_id: ProductId, quantity: i64) -> CartResponse {
    debug!(product_id, quantity, "set_quantity command");
    cart.dispatch(&CartAction::SetQuantity {
        id: product_id,
        quantity,
    })
    .into()
}

pub fn toggle_selection(cart: &SessionCart, product_id: ProductId) -> CartResponse {
    debug!(product_id, "toggle_selection command");
    cart.dispatch(&CartAction::ToggleSelection(product_id)).into()
}

pub fn select_all(cart: &SessionCart) -> CartResponse {
    debug!("select_all command");
    cart.dispatch(&CartAction::SelectAll).into()
}

pub fn deselect_all(cart: &SessionCart) -> CartResponse {
    debug!("deselect_all command");
    cart.dispatch(&CartAction::DeselectAll).into()
}

/// Removes every selected line.
pub fn delete_selected(cart: &SessionCart) -> CartResponse {
    debug!("delete_selected command");
    cart.dispatch(&CartAction::DeleteSelectedItems).into()
}

/// Clears all items from the cart.
///
/// ## Returns
/// Empty cart
pub fn clear_cart(cart: &SessionCart) -> CartResponse {
    debug!("clear_cart command");
    cart.dispatch(&CartAction::ClearCart).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storefront_catalog::StaticCatalog;
    use storefront_core::{Money, Product};
    use storefront_store::Storage;

    fn lookup() -> ProductLookup {
        let products = vec![Product {
            id: 1,
            title: "Backpack".to_string(),
            price: Money::from_cents(10995),
            description: "Fits a laptop".to_string(),
            category: "men's clothing".to_string(),
            image: "https://img/1.jpg".to_string(),
        }];
        ProductLookup::new(
            Storage::in_memory().products(),
            Arc::new(StaticCatalog::with_products(products)),
        )
    }

    #[tokio::test]
    async fn test_add_then_adjust() {
        let cart = SessionCart::new();
        let lookup = lookup();

        add_to_cart(&lookup, &cart, 1).await.unwrap();
        let res = add_to_cart(&lookup, &cart, 1).await.unwrap();
        assert_eq!(res.total, 2);
        assert_eq!(res.totals.subtotal, Money::from_cents(21990));

        let res = set_quantity(&cart, 1, 5);
        assert_eq!(res.items[0].quantity, 5);
        assert_eq!(res.total, 5);

        let res = decrease_quantity(&cart, 1);
        assert!(res.changed);
        assert_eq!(res.total, 4);
    }

    #[tokio::test]
    async fn test_extreme_quantities_are_capped() {
        let cart = SessionCart::new();
        add_to_cart(&lookup(), &cart, 1).await.unwrap();

        let res = set_quantity(&cart, 1, i64::MAX);
        assert_eq!(res.total, storefront_core::MAX_LINE_QUANTITY);

        let res = increase_quantity(&cart, 1);
        assert_eq!(res.items[0].quantity, storefront_core::MAX_LINE_QUANTITY);
        assert_eq!(
            res.totals.subtotal,
            Money::from_cents(10995) * storefront_core::MAX_LINE_QUANTITY
        );
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_not_found() {
        let cart = SessionCart::new();
        let err = add_to_cart(&lookup(), &cart, 99).await.unwrap_err();

        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
        assert!(get_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_unknown_id_reports_unchanged() {
        let cart = SessionCart::new();
        let res = increase_quantity(&cart, 7);
        assert!(!res.changed);
        assert_eq!(res.total, 0);
    }

    #[tokio::test]
    async fn test_selection_commands() {
        let cart = SessionCart::new();
        let res = add_to_cart(&lookup(), &cart, 1).await.unwrap();
        assert!(res.items[0].selected);

        let res = toggle_selection(&cart, 1);
        assert!(!res.items[0].selected);
        assert_eq!(res.totals.selected_units, 0);

        let res = delete_selected(&cart);
        assert_eq!(res.total, 1);

        let res = select_all(&cart);
        assert!(res.items[0].selected);
        let res = deselect_all(&cart);
        assert!(!res.items[0].selected);

        select_all(&cart);
        let res = delete_selected(&cart);
        assert!(res.items.is_empty());
        assert_eq!(res.total, 0);
    }

    #[test]
    fn test_response_shape() {
        let json = serde_json::to_value(get_cart(&SessionCart::new())).unwrap();
        assert_eq!(json["items"], serde_json::json!([]));
        assert_eq!(json["total"], 0);
        assert_eq!(json["changed"], false);
        assert!(json["totals"].is_object());
    }
}
