//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `ENDENTURE_DATA_DIR` - Directory holding persisted shopper state (default: `.endenture`)
//! - `ENDENTURE_CART_KEY` - Storage key for the cart (default: `endenture.cart.v1`)
//! - `ENDENTURE_CATALOG_PATH` - JSON catalog to load instead of the built-in one
//! - `ENDENTURE_DEFAULT_PRODUCT` - Product shown when the detail page has no valid id (default: `jacket`)
//! - `ENDENTURE_DEFAULT_SORT` - Initial grid ordering (default: `name_asc`)

use std::path::PathBuf;

use endenture_core::{ProductId, SortMode};
use thiserror::Error;

use crate::cart::DEFAULT_CART_KEY;
use crate::catalog::{Catalog, CatalogError};

const DEFAULT_DATA_DIR: &str = ".endenture";
const DEFAULT_PRODUCT: &str = "jacket";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory for the file-backed key-value store
    pub data_dir: PathBuf,
    /// Key the cart is persisted under
    pub cart_key: String,
    /// Optional catalog file; `None` uses the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Detail page fallback product
    pub default_product: ProductId,
    /// Grid ordering before the shopper picks one
    pub default_sort: SortMode,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cart_key: DEFAULT_CART_KEY.to_owned(),
            catalog_path: None,
            default_product: ProductId::new(DEFAULT_PRODUCT),
            default_sort: SortMode::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let cart_key = get("ENDENTURE_CART_KEY").unwrap_or(defaults.cart_key);
        let default_sort = match get("ENDENTURE_DEFAULT_SORT") {
            Some(token) => token.parse::<SortMode>().map_err(|e| {
                ConfigError::InvalidEnvVar("ENDENTURE_DEFAULT_SORT".to_string(), e.to_string())
            })?,
            None => defaults.default_sort,
        };

        Ok(Self {
            data_dir: get("ENDENTURE_DATA_DIR").map_or(defaults.data_dir, PathBuf::from),
            cart_key,
            catalog_path: get("ENDENTURE_CATALOG_PATH").map(PathBuf::from),
            default_product: get("ENDENTURE_DEFAULT_PRODUCT")
                .map_or(defaults.default_product, ProductId::from),
            default_sort,
        })
    }

    /// Load the configured catalog, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the configured catalog file is unreadable
    /// or invalid.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => {
                let catalog = Catalog::from_path(path)?;
                tracing::info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
                Ok(catalog)
            }
            None => Ok(Catalog::sample()),
        }
    }
}
