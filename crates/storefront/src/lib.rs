//! Endenture Storefront library.
//!
//! A static product catalog, a cart persisted in a key-value store, and
//! renderers for the product grid, product detail, and cart pages. UI
//! layers drive it through [`state::Storefront`]: render a view, dispatch
//! the [`state::Command`] attached to whatever the shopper clicked, follow
//! the returned navigation.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use endenture_storefront::catalog::Catalog;
//! use endenture_storefront::config::StorefrontConfig;
//! use endenture_storefront::state::Storefront;
//! use endenture_storefront::storage::MemoryStore;
//!
//! let mut store = Storefront::new(
//!     &StorefrontConfig::default(),
//!     Arc::new(Catalog::sample()),
//!     MemoryStore::new(),
//! );
//!
//! let detail = store.detail(Some("jacket"), None);
//! let add = detail.product().unwrap().add_command("2");
//! let effect = store.dispatch(add).unwrap();
//!
//! assert_eq!(effect.badge.count, 2);
//! assert_eq!(store.cart_view().subtotal, "$998.00");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod navigation;
pub mod state;
pub mod storage;
pub mod views;
