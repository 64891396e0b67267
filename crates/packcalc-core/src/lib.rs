//! # packcalc-core — Pack-Size Catalog and Packer
//!
//! The decision logic of packcalc: which pack sizes may be shipped, and how
//! many packs of each size cover an order.
//!
//! ## Components
//!
//! - [`SizeCatalog`] — the shared, ascending, duplicate-free set of pack
//!   sizes. All mutations are validated and applied under a single write lock.
//! - [`packer::compute`] — greedy-from-largest allocation of an item quantity
//!   onto a catalog snapshot, producing a [`PackPlan`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `packcalc-*` crates (this is the leaf of the DAG).
//! - No I/O, no logging. Errors are classified and returned, never formatted
//!   for presentation.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod catalog;
pub mod error;
pub mod packer;
pub mod size;

pub use catalog::SizeCatalog;
pub use error::PackError;
pub use packer::PackPlan;
pub use size::{PackSize, DEFAULT_PACK_SIZES};
