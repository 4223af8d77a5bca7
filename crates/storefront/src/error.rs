//! Unified error handling.
//!
//! Provides a unified `AppError` type for everything the storefront can fail
//! at. Most shopper-facing failure modes never reach it: unknown products and
//! unreadable carts degrade to no-ops and empty carts inside the cart store.
//! What remains is setup (configuration, catalog loading) and storage writes.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::navigation::NavigationError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Persisting the cart failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A navigation target could not be understood.
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(NavigationError::UnknownPage("about.html".to_string()));
        assert_eq!(
            err.to_string(),
            "Navigation error: unknown page: about.html"
        );

        let err = AppError::from(ConfigError::InvalidEnvVar(
            "ENDENTURE_DEFAULT_SORT".to_string(),
            "nope".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid environment variable ENDENTURE_DEFAULT_SORT: nope"
        );
    }
}
