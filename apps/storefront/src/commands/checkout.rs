//! # Checkout Commands
//!
//! Simulated checkout. Nothing is charged; confirming an order clears the
//! lines it covered from the cart.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  preview_checkout(scope)                                                │
//! │    require_user ──► snapshot ──► CheckoutSummary::from_cart(scope)      │
//! │                                        │                                │
//! │                          empty cart / nothing selected ──► error        │
//! │                                                                         │
//! │  confirm_checkout(scope)                                                │
//! │    preview ──► summary.confirm(now) ──► OrderConfirmation               │
//! │                                              │                          │
//! │                     scope = all      ──► dispatch(ClearCart)            │
//! │                     scope = selected ──► dispatch(DeleteSelectedItems)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::Serialize;
use storefront_core::checkout::{CheckoutScope, CheckoutSummary, OrderConfirmation};
use tracing::{debug, info};

use crate::commands::cart::CartResponse;
use crate::error::ApiResult;
use crate::state::{AuthState, SessionCart};

/// A placed order together with the cart that remains.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order: OrderConfirmation,
    pub cart: CartResponse,
}

/// Shows what a checkout of `scope` would cover without changing the cart.
pub fn preview_checkout(
    auth: &AuthState,
    cart: &SessionCart,
    scope: CheckoutScope,
) -> ApiResult<CheckoutSummary> {
    auth.require_user()?;
    debug!(?scope, "preview_checkout command");

    Ok(CheckoutSummary::from_cart(&cart.snapshot(), scope)?)
}

/// Places the order and removes the purchased lines from the cart.
pub fn confirm_checkout(
    auth: &AuthState,
    cart: &SessionCart,
    scope: CheckoutScope,
) -> ApiResult<CheckoutResponse> {
    let user = auth.require_user()?;
    let summary = CheckoutSummary::from_cart(&cart.snapshot(), scope)?;

    let order = summary.confirm(Utc::now());
    let remaining = cart.dispatch(&order.follow_up());

    info!(
        order_id = %order.order_id,
        email = %user.email,
        units = order.summary.units,
        total = %order.summary.total,
        "Order placed"
    );

    Ok(CheckoutResponse {
        order,
        cart: remaining.into(),
    })
}
