//! # Error Types
//!
//! Validation failures raised by the catalog and the packer. Every variant is
//! a deterministic input error detected synchronously at the point of
//! violation; none are retried or recovered internally.

use thiserror::Error;

/// Errors returned by [`SizeCatalog`](crate::SizeCatalog) operations and
/// [`packer::compute`](crate::packer::compute).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// A pack size was zero or negative.
    #[error("size must be more than 0, got {0}")]
    InvalidSize(i64),

    /// A pack size is already in the catalog, or repeats within a replacement set.
    #[error("size {0} already exists or incoming sizes contain duplicates")]
    DuplicateSize(u64),

    /// A replacement set contained no sizes.
    #[error("sizes must contain at least one element")]
    EmptyInput,

    /// The size to delete is not in the catalog.
    #[error("size {0} does not exist")]
    NotFound(u64),

    /// The item quantity to pack was zero or negative.
    #[error("items must be more than 0, got {0}")]
    InvalidQuantity(i64),

    /// A plan was requested against a catalog with no sizes left in it.
    #[error("no pack sizes are configured")]
    EmptyCatalog,
}
