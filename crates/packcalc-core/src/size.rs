//! # Pack Size
//!
//! Validated newtype for one shippable pack capacity. Callers hand in signed
//! integers (the wire carries them that way); only strictly positive values
//! become a [`PackSize`].

use serde::{Deserialize, Serialize};

use crate::error::PackError;

/// The catalog a fresh process starts with.
pub const DEFAULT_PACK_SIZES: [i64; 5] = [250, 500, 1000, 2000, 5000];

/// A positive pack capacity, in items.
///
/// Serializes as a bare integer. Deserialization goes through
/// [`PackSize::new`], so a zero or negative value is rejected at the boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u64")]
pub struct PackSize(u64);

impl PackSize {
    /// Validate a caller-supplied size.
    pub fn new(value: i64) -> Result<Self, PackError> {
        if value <= 0 {
            return Err(PackError::InvalidSize(value));
        }
        Ok(Self(value as u64))
    }

    /// The capacity in items.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for PackSize {
    type Error = PackError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PackSize> for u64 {
    fn from(size: PackSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for PackSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive() {
        assert_eq!(PackSize::new(1).unwrap().get(), 1);
        assert_eq!(PackSize::new(i64::MAX).unwrap().get(), i64::MAX as u64);
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(PackSize::new(0), Err(PackError::InvalidSize(0)));
        assert_eq!(PackSize::new(-1), Err(PackError::InvalidSize(-1)));
    }

    #[test]
    fn orders_numerically() {
        let small = PackSize::new(250).unwrap();
        let large = PackSize::new(5000).unwrap();
        assert!(small < large);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let size = PackSize::new(250).unwrap();
        assert_eq!(serde_json::to_string(&size).unwrap(), "250");
    }

    #[test]
    fn deserialization_validates() {
        let ok: PackSize = serde_json::from_str("42").unwrap();
        assert_eq!(ok.get(), 42);
        assert!(serde_json::from_str::<PackSize>("0").is_err());
        assert!(serde_json::from_str::<PackSize>("-7").is_err());
    }

    #[test]
    fn default_sizes_are_valid_and_ascending() {
        let sizes: Vec<PackSize> = DEFAULT_PACK_SIZES
            .iter()
            .map(|&s| PackSize::new(s).unwrap())
            .collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    }
}
