//! Line item quantity.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Deserializer, Serialize};

/// A positive item count.
///
/// Quantities are never zero. Values coming from user input or from the
/// persisted cart are clamped up to one rather than rejected.
///
/// ## Examples
///
/// ```
/// use endenture_core::Quantity;
///
/// assert_eq!(Quantity::clamped(0).get(), 1);
/// assert_eq!(Quantity::clamped(-3).get(), 1);
/// assert_eq!(Quantity::parse_lenient("3 pairs").get(), 3);
/// assert_eq!(Quantity::parse_lenient("lots").get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, returning `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Clamp an arbitrary integer into `1..=u32::MAX`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let bounded = u32::try_from(value.max(1)).unwrap_or(u32::MAX);
        Self::new(bounded).unwrap_or(Self::ONE)
    }

    /// Parse freeform quantity text.
    ///
    /// Reads an optional sign followed by the leading run of digits, ignoring
    /// surrounding whitespace and anything after the digits. Input with no
    /// leading integer yields one; the result is then clamped.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        let trimmed = input.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, trimmed.get(1..).unwrap_or_default()),
            Some(b'+') => (false, trimmed.get(1..).unwrap_or_default()),
            _ => (false, trimmed),
        };

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let digits = rest.get(..digits_end).unwrap_or_default();
        if digits.is_empty() {
            return Self::ONE;
        }

        // Anything too long for i64 is far beyond u32 anyway.
        let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
        Self::clamped(if negative { -magnitude } else { magnitude })
    }

    /// The count as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Add two quantities, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0.get()))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

impl<'de> Deserialize<'de> for Quantity {
    /// Accepts any JSON integer and clamps it, so a stored `qty` of `0` or
    /// `-2` loads as `1` instead of invalidating the whole cart.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(Self::clamped(raw))
    }
}
