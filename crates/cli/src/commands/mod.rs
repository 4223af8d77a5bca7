//! CLI command implementations.

pub mod cart;
pub mod catalog;

use std::path::PathBuf;
use std::sync::Arc;

use endenture_storefront::config::StorefrontConfig;
use endenture_storefront::error::Result;
use endenture_storefront::state::Storefront;
use endenture_storefront::storage::FileStore;

/// Outcome of a subcommand.
pub type CommandResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Open a shopper session over the configured data directory.
///
/// `data_dir` overrides `ENDENTURE_DATA_DIR`.
pub fn open(data_dir: Option<PathBuf>) -> Result<Storefront<FileStore>> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    open_with(&config)
}

/// Open a session from explicit configuration.
pub fn open_with(config: &StorefrontConfig) -> Result<Storefront<FileStore>> {
    let catalog = Arc::new(config.load_catalog()?);
    let storage = FileStore::new(config.data_dir.clone());

    let mut store = Storefront::new(config, catalog, storage);
    store
        .cart_mut()
        .on_change(|badge| tracing::debug!(count = badge.count, "Cart badge updated"));

    tracing::debug!(data_dir = %config.data_dir.display(), "Session opened");
    Ok(store)
}

#[cfg(test)]
pub(crate) mod testing {
    use tempfile::TempDir;

    use super::*;

    /// Session over a fresh temporary data directory.
    #[allow(clippy::unwrap_used)]
    pub fn session() -> (TempDir, Storefront<FileStore>) {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            data_dir: dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        let store = open_with(&config).unwrap();
        (dir, store)
    }

    #[allow(clippy::unwrap_used)]
    pub fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }
}
