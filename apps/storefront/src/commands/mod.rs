//! # Commands Module
//!
//! Every operation the shell can run.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (exports)
//! ├── cart.rs         ◄─── Cart manipulation
//! ├── catalog.rs      ◄─── Product browsing and search
//! ├── dashboard.rs    ◄─── Local product CRUD (signed in)
//! ├── auth.rs         ◄─── Register, login, logout
//! ├── checkout.rs     ◄─── Simulated checkout (signed in)
//! └── preferences.rs  ◄─── Theme
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Shell line                                                             │
//! │  ──────────                                                             │
//! │  > add 3                                                                │
//! │         │                                                               │
//! │         │ (clap parses into cli::Command::Add { id: 3 })                │
//! │         ▼                                                               │
//! │  Rust command                                                           │
//! │  ────────────                                                           │
//! │  async fn add_to_cart(                                                  │
//! │      lookup: &ProductLookup,  ◄── only the state it needs              │
//! │      cart: &SessionCart,                                                │
//! │      product_id: ProductId,                                             │
//! │  ) -> ApiResult<CartResponse>                                           │
//! │         │                                                               │
//! │         │ (serde_json::to_string_pretty)                                │
//! │         ▼                                                               │
//! │  { "items": [...], "total": 1, "totals": {...}, "changed": true }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod dashboard;
pub mod preferences;
