//! Product listing sort modes.

use serde::{Deserialize, Serialize};

/// Error returned when a sort token is not one of the four known modes.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid sort mode: {0} (expected name_asc, price_asc, price_desc, or rating_desc)")]
pub struct SortModeError(pub String);

/// Ordering applied to the product grid.
///
/// The string tokens match the values of the listing page's sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Alphabetical by product name.
    #[default]
    NameAsc,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Best rated first; unrated products sort as zero.
    RatingDesc,
}

impl SortMode {
    /// All modes in selector order.
    pub const ALL: [Self; 4] = [
        Self::NameAsc,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::RatingDesc,
    ];

    /// The selector token for this mode.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::NameAsc => "name_asc",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::RatingDesc => "rating_desc",
        }
    }

    /// Resolve a selector token, treating missing or unknown tokens as the
    /// default name ordering.
    #[must_use]
    pub fn from_token_or_default(token: Option<&str>) -> Self {
        token.and_then(|t| t.parse().ok()).unwrap_or_default()
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl std::str::FromStr for SortMode {
    type Err = SortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name_asc" => Ok(Self::NameAsc),
            "price_asc" => Ok(Self::PriceAsc),
            "price_desc" => Ok(Self::PriceDesc),
            "rating_desc" => Ok(Self::RatingDesc),
            _ => Err(SortModeError(s.to_owned())),
        }
    }
}
