//! # Session Cart
//!
//! Holds the current cart for the session and runs every action through the
//! pure transition function in `storefront_core::cart`.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Dispatch                                        │
//! │                                                                         │
//! │  Command               CartAction              Stored state             │
//! │  ───────               ──────────              ────────────             │
//! │                                                                         │
//! │  add_to_cart ────────► AddItem(desc) ─────┐                             │
//! │  increase_quantity ──► IncreaseQuantity ──┤    lock                     │
//! │  toggle_selection ───► ToggleSelection ───┼──► next = apply(cur, a)     │
//! │  clear_cart ─────────► ClearCart ─────────┘    cur = next               │
//! │                                                unlock                   │
//! │                                                                         │
//! │  changed = !Arc::ptr_eq(cur, next)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lock only guards the swap of one `Arc`; readers get a snapshot they
//! can hold as long as they like.

use std::sync::{Arc, Mutex};

use storefront_core::cart::{apply, CartAction, CartState};
use tracing::debug;

/// The outcome of one dispatched action.
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub state: Arc<CartState>,
    /// False when the action did not apply (unknown id).
    pub changed: bool,
}

/// Session-owned cart.
#[derive(Debug)]
pub struct SessionCart {
    current: Mutex<Arc<CartState>>,
}

impl SessionCart {
    /// Creates an empty session cart.
    pub fn new() -> Self {
        SessionCart {
            current: Mutex::new(Arc::new(CartState::initial())),
        }
    }

    /// The current state. Never blocks on anything but the swap lock.
    pub fn snapshot(&self) -> Arc<CartState> {
        let current = self.current.lock().unwrap_or_else(|p| p.into_inner());
        Arc::clone(&current)
    }

    /// Applies `action` and stores the result.
    pub fn dispatch(&self, action: &CartAction) -> Dispatched {
        let mut current = self.current.lock().unwrap_or_else(|p| p.into_inner());

        let next = apply(&current, action);
        let changed = !Arc::ptr_eq(&current, &next);

        debug!(
            action = action.name(),
            changed,
            lines = next.len(),
            total = next.total(),
            "Cart dispatch"
        );

        *current = Arc::clone(&next);
        Dispatched {
            state: next,
            changed,
        }
    }
}

impl Default for SessionCart {
    fn default() -> Self {
        Self::new()
    }
}
