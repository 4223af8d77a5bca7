//! View renderers.
//!
//! Each renderer is a pure function from catalog and cart state to a
//! display model. Nothing here touches storage; user actions are expressed
//! as [`Command`](crate::state::Command) values the UI layer dispatches.

pub mod cart;
pub mod detail;
pub mod grid;

pub use cart::{CartItemView, CartView, render_cart};
pub use detail::{DetailView, ProductDetailView, ThumbnailView, render_detail};
pub use grid::{GridView, ProductCardView, RatingView, render_grid, sort_products};
