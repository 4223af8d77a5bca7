//! Integration tests for the Endenture storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p endenture-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Cart operations and totals end to end
//! - `persistence` - File-backed cart across sessions
//! - `catalog_views` - Grid ordering, detail fallback, and navigation

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;
use std::sync::Arc;

use endenture_core::{ProductId, Quantity};
use endenture_storefront::catalog::Catalog;
use endenture_storefront::config::StorefrontConfig;
use endenture_storefront::state::{Command, Storefront};
use endenture_storefront::storage::FileStore;
use tempfile::TempDir;

/// A storefront session over a private data directory.
///
/// Sessions opened with [`TestShop::reopen`] share the directory, which is
/// how a second page load sees the same persisted cart.
pub struct TestShop {
    dir: TempDir,
    config: StorefrontConfig,
    catalog: Arc<Catalog>,
}

impl TestShop {
    /// Fresh shop with the built-in catalog and an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create data directory");
        let config = StorefrontConfig {
            data_dir: dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        Self {
            dir,
            config,
            catalog: Arc::new(Catalog::sample()),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Open a new session, as on a page load.
    #[must_use]
    pub fn open(&self) -> Storefront<FileStore> {
        Storefront::new(
            &self.config,
            Arc::clone(&self.catalog),
            FileStore::new(self.dir.path()),
        )
    }

    /// Write a raw value under the cart key, bypassing the cart store.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[allow(clippy::expect_used)]
    pub fn write_raw_cart(&self, contents: &str) {
        let path = FileStore::new(self.dir.path()).path_for(&self.config.cart_key);
        std::fs::write(path, contents).expect("Failed to write cart file");
    }

    /// Raw persisted cart value, if any.
    #[must_use]
    pub fn read_raw_cart(&self) -> Option<String> {
        let path = FileStore::new(self.dir.path()).path_for(&self.config.cart_key);
        std::fs::read_to_string(path).ok()
    }
}

impl Default for TestShop {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid-style add command.
///
/// # Panics
///
/// Panics if `qty` is zero.
#[must_use]
#[allow(clippy::expect_used)]
pub fn add(id: &str, qty: u32) -> Command {
    Command::Add {
        id: ProductId::new(id),
        quantity: Quantity::new(qty).expect("quantity must be positive"),
    }
}
