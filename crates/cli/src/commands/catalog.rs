//! Product grid and detail pages.

use std::io::Write;

use endenture_core::{ProductId, SortMode};
use endenture_storefront::navigation::{Location, NavigationError};
use endenture_storefront::state::{Command, Storefront};
use endenture_storefront::storage::KeyValueStore;
use endenture_storefront::views::DetailView;

use super::CommandResult;
use crate::output;

/// Print the grid, switching the ordering first if one was given.
pub fn products<S: KeyValueStore>(
    store: &mut Storefront<S>,
    sort: Option<SortMode>,
    out: &mut impl Write,
) -> CommandResult {
    if let Some(mode) = sort {
        store.dispatch(Command::SetSortMode(mode))?;
    }
    output::grid(out, &store.grid())?;
    Ok(())
}

/// Query state of a detail page.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DetailRequest {
    pub id: Option<String>,
    pub image: Option<String>,
}

impl DetailRequest {
    /// Recover the request from a detail page href.
    pub fn from_href(href: &str) -> Result<Self, NavigationError> {
        match Location::parse(href)? {
            Location::ProductDetail { id, image } => Ok(Self {
                id: id.map(ProductId::into_inner),
                image,
            }),
            other => Err(NavigationError::UnknownPage(other.href())),
        }
    }
}

/// Print a detail page, optionally clicking a thumbnail first.
pub fn product<S: KeyValueStore>(
    store: &Storefront<S>,
    request: &DetailRequest,
    select: Option<&str>,
    out: &mut impl Write,
) -> CommandResult {
    let mut view = store.detail(request.id.as_deref(), request.image.as_deref());

    if let (Some(src), DetailView::Found(product)) = (select, &mut view) {
        if !product.select_thumbnail(src) {
            tracing::warn!(src, "Not a thumbnail of this product");
        }
    }

    output::detail(out, &view)?;
    Ok(())
}
