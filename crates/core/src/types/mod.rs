//! Core types for the Endenture storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod quantity;
pub mod rating;
pub mod sort;

pub use id::*;
pub use price::{Price, PriceError};
pub use quantity::Quantity;
pub use rating::{Rating, RatingError, StarBreakdown};
pub use sort::{SortMode, SortModeError};
