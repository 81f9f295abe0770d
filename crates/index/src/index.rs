//! The immutable lookup index: exact-match SKU table plus an
//! insertion-ordered description list for reverse search.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use presscode_core::{decode, CodecError};

use crate::error::IndexError;

// ──────────────────────────────────────────────
// Loader rows
// ──────────────────────────────────────────────

/// One `(SKU, description)` row as supplied by the external loader.
/// No ordering or uniqueness guarantees: duplicates are resolved at
/// build time, last write wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub sku: String,
    pub description: String,
}

// ──────────────────────────────────────────────
// Resolution
// ──────────────────────────────────────────────

/// Where a resolved description came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Exact match in the authoritative table.
    Table,
    /// Absent from the table, decoded on the fly.
    Codec,
}

/// Outcome of resolving a single SKU. A miss is a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found {
        description: String,
        source: ResolutionSource,
    },
    /// Not in the table and not decodable. The codec error records why
    /// decoding failed; end users just see a miss, diagnostics can tell
    /// a malformed code from an unknown shape.
    NotFound(CodecError),
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }

    /// The resolved description, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Resolution::Found { description, .. } => Some(description),
            Resolution::NotFound(_) => None,
        }
    }
}

// ──────────────────────────────────────────────
// Index
// ──────────────────────────────────────────────

/// Immutable lookup index, built once per load of the master data set.
///
/// A reload is a fresh `build` producing a new, independent index; nothing
/// here mutates after construction, so any number of readers may query one
/// index concurrently without coordination.
#[derive(Debug, Clone)]
pub struct LookupIndex {
    table: HashMap<String, String>,
    /// Descriptions in first-appearance order of their SKU, each carrying
    /// the winning (last-written) value for that SKU.
    descriptions: Vec<String>,
}

impl LookupIndex {
    /// Build from loader rows, deduplicating by SKU (last entry wins).
    pub fn build<I>(entries: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = LookupEntry>,
    {
        // slot of each SKU in first-appearance order
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<(String, String)> = Vec::new();
        for entry in entries {
            match slots.get(&entry.sku) {
                Some(&slot) => rows[slot].1 = entry.description,
                None => {
                    slots.insert(entry.sku.clone(), rows.len());
                    rows.push((entry.sku, entry.description));
                }
            }
        }
        if rows.is_empty() {
            return Err(IndexError::EmptyDataset);
        }

        let table = rows.iter().cloned().collect();
        let descriptions = rows.into_iter().map(|(_, description)| description).collect();
        Ok(LookupIndex {
            table,
            descriptions,
        })
    }

    /// Number of distinct SKUs in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Resolve one SKU: the authoritative table first, on-the-fly decoding
    /// second. Never fails; a miss is a [`Resolution::NotFound`] value.
    pub fn resolve(&self, sku: &str) -> Resolution {
        let key = sku.trim();
        if let Some(description) = self.table.get(key) {
            return Resolution::Found {
                description: description.clone(),
                source: ResolutionSource::Table,
            };
        }
        match decode(key) {
            Ok(description) => Resolution::Found {
                description,
                source: ResolutionSource::Codec,
            },
            Err(err) => Resolution::NotFound(err),
        }
    }

    /// Resolve a batch of SKUs independently, preserving input order.
    /// Misses never short-circuit the rest of the batch.
    pub fn batch_resolve<I, S>(&self, skus: I) -> Vec<(String, Resolution)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        skus.into_iter()
            .map(|sku| {
                let sku = sku.as_ref();
                (sku.to_owned(), self.resolve(sku))
            })
            .collect()
    }

    /// Case-insensitive substring search over all descriptions, in the
    /// index's insertion order. An empty term matches nothing.
    pub fn search(&self, term: &str) -> Vec<&str> {
        if term.is_empty() {
            return Vec::new();
        }
        let needle = term.to_lowercase();
        self.descriptions
            .iter()
            .filter(|description| description.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
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
    fn build_rejects_empty_dataset() {
        assert_eq!(
            LookupIndex::build(Vec::new()).unwrap_err(),
            IndexError::EmptyDataset
        );
    }

    #[test]
    fn duplicate_sku_last_write_wins() {
        let index = LookupIndex::build([entry("A", "x"), entry("A", "y")]).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve("A").description(), Some("y"));
        // The description list carries the winning value too.
        assert_eq!(index.search("y"), vec!["y"]);
        assert!(index.search("x").is_empty());
    }

    #[test]
    fn resolve_prefers_table_over_codec() {
        // The table row deliberately disagrees with what the codec would
        // produce: the table is authoritative.
        let index =
            LookupIndex::build([entry("VPL-RND-0375", "3/8 Round punch, oversize")]).unwrap();
        match index.resolve("VPL-RND-0375") {
            Resolution::Found {
                description,
                source,
            } => {
                assert_eq!(description, "3/8 Round punch, oversize");
                assert_eq!(source, ResolutionSource::Table);
            }
            other => panic!("expected table hit, got {:?}", other),
        }
    }

    #[test]
    fn resolve_falls_back_to_codec() {
        let index = LookupIndex::build([entry("A", "x")]).unwrap();
        match index.resolve("313-OBL-0500-0750") {
            Resolution::Found {
                description,
                source,
            } => {
                assert_eq!(description, "1/2 x 3/4 Oblong die");
                assert_eq!(source, ResolutionSource::Codec);
            }
            other => panic!("expected codec fallback, got {:?}", other),
        }
    }

    #[test]
    fn resolve_miss_keeps_the_codec_diagnostic() {
        let index = LookupIndex::build([entry("A", "x")]).unwrap();
        match index.resolve("VPL-ZZZ-0375") {
            Resolution::NotFound(CodecError::UnknownShapeCode { code }) => {
                assert_eq!(code, "ZZZ");
            }
            other => panic!("expected unknown shape diagnostic, got {:?}", other),
        }
        match index.resolve("not a sku") {
            Resolution::NotFound(CodecError::UnknownShapeCode { .. })
            | Resolution::NotFound(CodecError::MalformedSku { .. }) => {}
            other => panic!("expected a miss, got {:?}", other),
        }
    }

    #[test]
    fn resolve_trims_input() {
        let index = LookupIndex::build([entry("A", "x")]).unwrap();
        assert_eq!(index.resolve("  A ").description(), Some("x"));
    }

    #[test]
    fn search_is_case_insensitive_and_ordered() {
        let index = LookupIndex::build([
            entry("1", "1/2 Round punch, no keyways"),
            entry("2", "3/4 Hex die"),
            entry("3", "1/2 x 3/4 Oblong die"),
        ])
        .unwrap();
        assert_eq!(
            index.search("1/2"),
            vec!["1/2 Round punch, no keyways", "1/2 x 3/4 Oblong die"]
        );
        assert_eq!(index.search("ROUND"), vec!["1/2 Round punch, no keyways"]);
        assert!(index.search("rectangle").is_empty());
    }

    #[test]
    fn empty_search_term_matches_nothing() {
        let index = LookupIndex::build([entry("A", "x")]).unwrap();
        assert!(index.search("").is_empty());
    }

    #[test]
    fn batch_preserves_order_and_never_short_circuits() {
        let index = LookupIndex::build([entry("A", "x")]).unwrap();
        let results = index.batch_resolve(["A", "VPL-???-0375", "313-RND-0375"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, "A");
        assert_eq!(results[0].1.description(), Some("x"));
        assert!(!results[1].1.is_found());
        assert_eq!(results[2].1.description(), Some("3/8 Round die"));
    }
}
