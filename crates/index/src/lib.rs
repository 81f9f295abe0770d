//! presscode-index: SKU lookup and reverse description search.
//!
//! The external loader supplies `(SKU, description)` rows; this crate
//! builds an immutable [`LookupIndex`] over them and serves exact lookups
//! (with codec fallback for SKUs absent from the table), order-preserving
//! batch lookups, and case-insensitive reverse search. [`CatalogHandle`]
//! wraps the whole thing in an atomically swappable unloaded/loaded
//! lifecycle for concurrent readers.

mod error;
mod handle;
mod index;

pub use error::IndexError;
pub use handle::CatalogHandle;
pub use index::{LookupEntry, LookupIndex, Resolution, ResolutionSource};
