//! # Packer
//!
//! Allocates an item quantity onto a catalog snapshot.
//!
//! ## Algorithm
//!
//! Greedy-from-largest with a single-pack fallback:
//!
//! 1. Walk the sizes from largest down to the second-smallest, taking as many
//!    whole packs of each as fit in the remaining quantity.
//! 2. If anything remains, add one pack of the smallest size that holds the
//!    whole remainder.
//!
//! After step 1 the remainder is below the second-smallest size, so step 2
//! always finds a size when the catalog has two or more entries. A
//! single-size catalog skips step 1 entirely and covers the order with as many
//! packs of that size as it takes.
//!
//! The result is a heuristic, not a guaranteed minimum pack count: sizes
//! `{1, 3, 4}` with 6 items give `4 + 3`, shipping 7 items where `3 + 3`
//! ships exactly 6.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::PackError;
use crate::size::PackSize;

/// How many packs of each size to dispatch.
///
/// Every entry has a count of at least one. Serializes as a JSON object keyed
/// by size, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackPlan(BTreeMap<PackSize, u64>);

impl PackPlan {
    fn push(&mut self, size: PackSize, count: u64) {
        if count > 0 {
            *self.0.entry(size).or_insert(0) += count;
        }
    }

    /// Number of packs of `size` in the plan, zero if absent.
    pub fn get(&self, size: PackSize) -> u64 {
        self.0.get(&size).copied().unwrap_or(0)
    }

    /// `(size, count)` pairs in ascending size order.
    pub fn iter(&self) -> impl Iterator<Item = (PackSize, u64)> + '_ {
        self.0.iter().map(|(&size, &count)| (size, count))
    }

    /// Number of distinct sizes used.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the plan holds no packs at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of packs.
    pub fn total_packs(&self) -> u64 {
        self.0.values().sum()
    }

    /// Total items shipped, including overshoot.
    pub fn total_items(&self) -> u64 {
        self.0
            .iter()
            .map(|(size, count)| size.get().saturating_mul(*count))
            .fold(0u64, u64::saturating_add)
    }
}

/// Compute the packs needed to ship `items` from the ascending `sizes`.
///
/// `sizes` must be strictly ascending, as returned by
/// [`SizeCatalog::list`](crate::SizeCatalog::list).
pub fn compute(items: i64, sizes: &[PackSize]) -> Result<PackPlan, PackError> {
    if items <= 0 {
        return Err(PackError::InvalidQuantity(items));
    }
    let Some((&smallest, larger)) = sizes.split_first() else {
        return Err(PackError::EmptyCatalog);
    };

    let mut plan = PackPlan::default();
    let mut remaining = items as u64;

    for &size in larger.iter().rev() {
        let count = remaining / size.get();
        plan.push(size, count);
        remaining -= count * size.get();
    }

    if remaining > 0 {
        match sizes.iter().find(|s| s.get() >= remaining) {
            Some(&size) => plan.push(size, 1),
            None => plan.push(smallest, remaining.div_ceil(smallest.get())),
        }
    }

    Ok(plan)
}
