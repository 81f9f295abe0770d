//! The unloaded/loaded catalog lifecycle: an atomically swappable handle
//! over the current [`LookupIndex`].
//!
//! `build` runs off to the side and the finished index is published with
//! a single atomic swap, so readers observe either the previous table or
//! the new one, never a half-built state. Indexes already handed out keep
//! working after a swap; they are independent values.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::error::IndexError;
use crate::index::{LookupEntry, LookupIndex, Resolution};

/// Shared, swappable handle over the current index, if any.
///
/// Starts unloaded: every query fails with [`IndexError::IndexNotReady`]
/// until [`load`](CatalogHandle::load) or
/// [`install`](CatalogHandle::install) publishes a table.
#[derive(Debug, Default)]
pub struct CatalogHandle {
    current: ArcSwapOption<LookupIndex>,
}

impl CatalogHandle {
    /// A fresh, unloaded handle.
    pub fn new() -> Self {
        CatalogHandle {
            current: ArcSwapOption::empty(),
        }
    }

    /// Build an index from loader rows and swap it in. On error the
    /// previously loaded index (if any) stays in place.
    pub fn load<I>(&self, entries: I) -> Result<(), IndexError>
    where
        I: IntoIterator<Item = LookupEntry>,
    {
        let index = LookupIndex::build(entries)?;
        self.install(index);
        Ok(())
    }

    /// Swap in an index built elsewhere.
    pub fn install(&self, index: LookupIndex) {
        self.current.store(Some(Arc::new(index)));
    }

    /// Whether a table has been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.current.load().is_some()
    }

    /// The currently loaded index, for callers that want to pin one
    /// snapshot across several queries.
    pub fn snapshot(&self) -> Result<Arc<LookupIndex>, IndexError> {
        self.current.load_full().ok_or(IndexError::IndexNotReady)
    }

    pub fn resolve(&self, sku: &str) -> Result<Resolution, IndexError> {
        Ok(self.snapshot()?.resolve(sku))
    }

    pub fn batch_resolve<I, S>(&self, skus: I) -> Result<Vec<(String, Resolution)>, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.snapshot()?.batch_resolve(skus))
    }

    pub fn search(&self, term: &str) -> Result<Vec<String>, IndexError> {
        let index = self.snapshot()?;
        Ok(index
            .search(term)
            .into_iter()
            .map(str::to_owned)
            .collect())
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sku: &str, description: &str) -> LookupEntry {
        LookupEntry {
            sku: sku.to_owned(),
            description: description.to_owned(),
        }
    }

    #[test]
    fn unloaded_handle_rejects_queries() {
        let handle = CatalogHandle::new();
        assert!(!handle.is_loaded());
        assert_eq!(handle.resolve("A").unwrap_err(), IndexError::IndexNotReady);
        assert_eq!(handle.search("x").unwrap_err(), IndexError::IndexNotReady);
        assert_eq!(
            handle.batch_resolve(["A"]).unwrap_err(),
            IndexError::IndexNotReady
        );
    }

    #[test]
    fn load_then_query() {
        let handle = CatalogHandle::new();
        handle.load([entry("A", "x")]).unwrap();
        assert!(handle.is_loaded());
        assert_eq!(handle.resolve("A").unwrap().description(), Some("x"));
    }

    #[test]
    fn failed_load_keeps_previous_table() {
        let handle = CatalogHandle::new();
        handle.load([entry("A", "x")]).unwrap();
        assert_eq!(
            handle.load(Vec::new()).unwrap_err(),
            IndexError::EmptyDataset
        );
        assert_eq!(handle.resolve("A").unwrap().description(), Some("x"));
    }

    #[test]
    fn reload_replaces_wholesale() {
        let handle = CatalogHandle::new();
        handle.load([entry("A", "x")]).unwrap();
        let before = handle.snapshot().unwrap();

        handle.load([entry("B", "y")]).unwrap();
        // Old snapshot is an independent value and still serves.
        assert_eq!(before.resolve("A").description(), Some("x"));
        // The handle now serves only the new table.
        assert!(!handle.resolve("A").unwrap().is_found());
        assert_eq!(handle.resolve("B").unwrap().description(), Some("y"));
    }

    #[test]
    fn concurrent_readers_share_one_index() {
        let handle = Arc::new(CatalogHandle::new());
        handle.load([entry("A", "x"), entry("B", "y")]).unwrap();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let handle = Arc::clone(&handle);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        assert_eq!(handle.resolve("A").unwrap().description(), Some("x"));
                        assert_eq!(handle.search("y").unwrap(), vec!["y".to_owned()]);
                    }
                })
            })
            .collect();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
