//! Endenture Core - Shared domain types.
//!
//! This crate provides the value types used by every Endenture component:
//! - `storefront` - Catalog, cart store, and view renderers
//! - `cli` - Command-line front end over the storefront
//!
//! # Architecture
//!
//! The core crate contains only types and their validation rules - no I/O,
//! no storage access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, ratings,
//!   quantities, and sort modes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
