//! Product review rating on a 0-5 scale.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The value is outside `0..=5`.
    #[error("rating must be between 0 and {max} (got {value})")]
    OutOfRange {
        /// Rejected value.
        value: Decimal,
        /// Maximum allowed rating.
        max: Decimal,
    },
}

/// A product rating between zero and five stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rating(Decimal);

/// How a rating is drawn as five star icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

impl Rating {
    /// Number of stars on the scale.
    pub const MAX_STARS: u8 = 5;

    /// Create a rating.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if `value` is negative or above 5.
    pub fn new(value: Decimal) -> Result<Self, RatingError> {
        let max = Decimal::from(Self::MAX_STARS);
        if value < Decimal::ZERO || value > max {
            return Err(RatingError::OutOfRange { value, max });
        }
        Ok(Self(value))
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Split the rating into full, half, and empty stars.
    ///
    /// A fractional part of one half or more draws a half star.
    #[must_use]
    pub fn stars(&self) -> StarBreakdown {
        let whole = self.0.trunc();
        let full = whole
            .to_u8()
            .unwrap_or(Self::MAX_STARS)
            .min(Self::MAX_STARS);
        let half = u8::from(self.0 - whole >= Decimal::new(5, 1));
        StarBreakdown {
            full,
            half,
            empty: Self::MAX_STARS - full - half,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
