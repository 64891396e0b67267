//! # Size Catalog
//!
//! The shared set of pack sizes the packer may draw from.
//!
//! ## Invariants
//!
//! - Strictly ascending, so every lookup is a binary search.
//! - Every element is a valid [`PackSize`] (positive).
//! - A failed mutation leaves the catalog exactly as it was.
//!
//! ## Concurrency
//!
//! One `SizeCatalog` is shared by every request handler. Clones share the same
//! underlying sequence. Each mutation runs its duplicate/presence check and its
//! commit under a single `parking_lot::RwLock` write guard, so concurrent
//! add/delete/replace calls cannot interleave, and readers only ever observe a
//! complete sequence. The lock is never held across an `.await`.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::PackError;
use crate::size::{PackSize, DEFAULT_PACK_SIZES};

/// Thread-safe, cloneable, ascending set of pack sizes.
#[derive(Debug)]
pub struct SizeCatalog {
    sizes: Arc<RwLock<Vec<PackSize>>>,
}

impl Clone for SizeCatalog {
    fn clone(&self) -> Self {
        Self {
            sizes: Arc::clone(&self.sizes),
        }
    }
}

impl SizeCatalog {
    /// Build a catalog from an initial set of sizes.
    ///
    /// Applies the same validation as [`SizeCatalog::replace_all`]: the set
    /// must be non-empty, positive, and free of repeats. Input order does not
    /// matter.
    pub fn new(initial: &[i64]) -> Result<Self, PackError> {
        let sizes = validate_replacement(initial)?;
        Ok(Self {
            sizes: Arc::new(RwLock::new(sizes)),
        })
    }

    /// Current sizes, ascending.
    pub fn list(&self) -> Vec<PackSize> {
        self.sizes.read().clone()
    }

    /// Whether `size` is in the catalog.
    pub fn exists(&self, size: PackSize) -> bool {
        self.sizes.read().binary_search(&size).is_ok()
    }

    /// Number of sizes in the catalog.
    pub fn len(&self) -> usize {
        self.sizes.read().len()
    }

    /// Whether every size has been deleted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert one size at its sorted position and return the updated sequence.
    pub fn add(&self, size: i64) -> Result<Vec<PackSize>, PackError> {
        let size = PackSize::new(size)?;
        let mut sizes = self.sizes.write();
        match sizes.binary_search(&size) {
            Ok(_) => Err(PackError::DuplicateSize(size.get())),
            Err(pos) => {
                sizes.insert(pos, size);
                Ok(sizes.clone())
            }
        }
    }

    /// Swap the whole catalog for `incoming`, sorted ascending.
    ///
    /// Every element is checked before anything is committed. The first
    /// failing position decides the error: a non-positive value yields
    /// [`PackError::InvalidSize`], a value seen earlier in the input yields
    /// [`PackError::DuplicateSize`]. This is a wholesale replace, not a merge.
    pub fn replace_all(&self, incoming: &[i64]) -> Result<Vec<PackSize>, PackError> {
        let validated = validate_replacement(incoming)?;
        let mut sizes = self.sizes.write();
        *sizes = validated;
        Ok(sizes.clone())
    }

    /// Remove one size and return the updated sequence.
    pub fn delete(&self, size: i64) -> Result<Vec<PackSize>, PackError> {
        let size = PackSize::new(size)?;
        let mut sizes = self.sizes.write();
        match sizes.binary_search(&size) {
            Ok(pos) => {
                sizes.remove(pos);
                Ok(sizes.clone())
            }
            Err(_) => Err(PackError::NotFound(size.get())),
        }
    }
}

impl Default for SizeCatalog {
    fn default() -> Self {
        let sizes = DEFAULT_PACK_SIZES
            .iter()
            .filter_map(|&s| PackSize::new(s).ok())
            .collect();
        Self {
            sizes: Arc::new(RwLock::new(sizes)),
        }
    }
}

/// Validate a full replacement set in input order and return it sorted.
fn validate_replacement(incoming: &[i64]) -> Result<Vec<PackSize>, PackError> {
    if incoming.is_empty() {
        return Err(PackError::EmptyInput);
    }

    let mut seen = HashSet::with_capacity(incoming.len());
    let mut sizes = Vec::with_capacity(incoming.len());
    for &raw in incoming {
        let size = PackSize::new(raw)?;
        if !seen.insert(size) {
            return Err(PackError::DuplicateSize(size.get()));
        }
        sizes.push(size);
    }

    sizes.sort_unstable();
    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(sizes: &[PackSize]) -> Vec<u64> {
        sizes.iter().map(|s| s.get()).collect()
    }

    fn catalog(initial: &[i64]) -> SizeCatalog {
        SizeCatalog::new(initial).unwrap()
    }

    // -- Construction ---------------------------------------------------------

    #[test]
    fn default_uses_standard_sizes() {
        let cat = SizeCatalog::default();
        assert_eq!(values(&cat.list()), vec![250, 500, 1000, 2000, 5000]);
    }

    #[test]
    fn new_sorts_unsorted_input() {
        let cat = catalog(&[1, 2, 10, 7]);
        assert_eq!(values(&cat.list()), vec![1, 2, 7, 10]);
    }

    #[test]
    fn new_rejects_invalid_seed() {
        assert_eq!(SizeCatalog::new(&[]).unwrap_err(), PackError::EmptyInput);
        assert_eq!(
            SizeCatalog::new(&[5, 0]).unwrap_err(),
            PackError::InvalidSize(0)
        );
        assert_eq!(
            SizeCatalog::new(&[5, 5]).unwrap_err(),
            PackError::DuplicateSize(5)
        );
    }

    #[test]
    fn clones_share_state() {
        let cat = SizeCatalog::default();
        let other = cat.clone();
        other.add(10_000).unwrap();
        assert!(cat.exists(PackSize::new(10_000).unwrap()));
    }

    // -- List / Exists --------------------------------------------------------

    #[test]
    fn list_is_idempotent() {
        let cat = SizeCatalog::default();
        assert_eq!(cat.list(), cat.list());
    }

    #[test]
    fn exists_checks_membership() {
        let cat = SizeCatalog::default();
        assert!(cat.exists(PackSize::new(1000).unwrap()));
        assert!(!cat.exists(PackSize::new(1001).unwrap()));
    }

    // -- Add ------------------------------------------------------------------

    #[test]
    fn add_at_end() {
        let cat = SizeCatalog::default();
        let sizes = cat.add(10_000).unwrap();
        assert_eq!(values(&sizes), vec![250, 500, 1000, 2000, 5000, 10_000]);
    }

    #[test]
    fn add_in_middle() {
        let cat = SizeCatalog::default();
        let sizes = cat.add(1500).unwrap();
        assert_eq!(values(&sizes), vec![250, 500, 1000, 1500, 2000, 5000]);
    }

    #[test]
    fn add_at_front() {
        let cat = SizeCatalog::default();
        let sizes = cat.add(1).unwrap();
        assert_eq!(values(&sizes), vec![1, 250, 500, 1000, 2000, 5000]);
    }

    #[test]
    fn add_returns_what_list_sees() {
        let cat = SizeCatalog::default();
        let returned = cat.add(750).unwrap();
        assert_eq!(returned, cat.list());
    }

    #[test]
    fn add_zero_or_negative_fails() {
        let cat = SizeCatalog::default();
        assert_eq!(cat.add(0).unwrap_err(), PackError::InvalidSize(0));
        assert_eq!(cat.add(-1).unwrap_err(), PackError::InvalidSize(-1));
        assert_eq!(cat.len(), 5);
    }

    #[test]
    fn add_existing_fails() {
        let cat = SizeCatalog::default();
        assert_eq!(cat.add(500).unwrap_err(), PackError::DuplicateSize(500));
        assert_eq!(cat.len(), 5);
    }

    // -- ReplaceAll -----------------------------------------------------------

    #[test]
    fn replace_all_sorts_ascending_input() {
        let cat = SizeCatalog::default();
        let sizes = cat.replace_all(&[1, 10, 100, 200]).unwrap();
        assert_eq!(values(&sizes), vec![1, 10, 100, 200]);
    }

    #[test]
    fn replace_all_sorts_descending_input() {
        let cat = SizeCatalog::default();
        let sizes = cat.replace_all(&[200, 100, 10, 1]).unwrap();
        assert_eq!(values(&sizes), vec![1, 10, 100, 200]);
    }

    #[test]
    fn replace_all_sorts_unordered_input() {
        let cat = SizeCatalog::default();
        let sizes = cat.replace_all(&[3, 1, 2]).unwrap();
        assert_eq!(values(&sizes), vec![1, 2, 3]);
        assert_eq!(values(&cat.list()), vec![1, 2, 3]);
    }

    #[test]
    fn replace_all_discards_previous_sizes() {
        let cat = SizeCatalog::default();
        cat.replace_all(&[7]).unwrap();
        assert!(!cat.exists(PackSize::new(250).unwrap()));
        assert_eq!(cat.len(), 1);
    }

    #[test]
    fn replace_all_empty_fails() {
        let cat = SizeCatalog::default();
        assert_eq!(cat.replace_all(&[]).unwrap_err(), PackError::EmptyInput);
        assert_eq!(cat.len(), 5);
    }

    #[test]
    fn replace_all_non_positive_fails_without_change() {
        let cat = SizeCatalog::default();
        let before = cat.list();
        assert_eq!(
            cat.replace_all(&[1, 3, 0]).unwrap_err(),
            PackError::InvalidSize(0)
        );
        assert_eq!(
            cat.replace_all(&[1, 3, -1]).unwrap_err(),
            PackError::InvalidSize(-1)
        );
        assert_eq!(cat.list(), before);
    }

    #[test]
    fn replace_all_duplicate_fails_without_change() {
        let cat = SizeCatalog::default();
        let before = cat.list();
        assert_eq!(
            cat.replace_all(&[1, 1, 2]).unwrap_err(),
            PackError::DuplicateSize(1)
        );
        assert_eq!(cat.list(), before);
    }

    #[test]
    fn replace_all_first_failure_by_position_wins() {
        let cat = SizeCatalog::default();
        assert_eq!(
            cat.replace_all(&[4, 4, -2]).unwrap_err(),
            PackError::DuplicateSize(4)
        );
        assert_eq!(
            cat.replace_all(&[4, -2, 4]).unwrap_err(),
            PackError::InvalidSize(-2)
        );
    }

    // -- Delete ---------------------------------------------------------------

    #[test]
    fn delete_existing() {
        let cat = catalog(&[1, 2, 3, 10]);
        let sizes = cat.delete(3).unwrap();
        assert_eq!(values(&sizes), vec![1, 2, 10]);
    }

    #[test]
    fn delete_missing_fails() {
        let cat = catalog(&[1, 2, 3, 10]);
        assert_eq!(cat.delete(7).unwrap_err(), PackError::NotFound(7));
        assert_eq!(cat.len(), 4);
    }

    #[test]
    fn delete_non_positive_fails() {
        let cat = catalog(&[1, 2, 3, 10]);
        assert_eq!(cat.delete(-1).unwrap_err(), PackError::InvalidSize(-1));
        assert_eq!(cat.delete(0).unwrap_err(), PackError::InvalidSize(0));
    }

    #[test]
    fn delete_last_size_leaves_empty_catalog() {
        let cat = catalog(&[42]);
        assert!(cat.delete(42).unwrap().is_empty());
        assert!(cat.is_empty());
    }
}
