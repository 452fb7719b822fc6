use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::entry::{IndexEntry, Item};
use crate::parsing::{ParseError, parse_searchdata};

/// How a query string is matched against entry keys.
///
/// The policy belongs to the caller; the index itself has no opinion.
/// Queries are lowercased before matching, mirroring the lowercase
/// keys the generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Key equals the query.
    Exact,
    /// Key starts with the query.
    #[default]
    Prefix,
    /// Key contains the query anywhere.
    Substring,
}

impl MatchMode {
    pub fn matches(self, key: &str, query: &str) -> bool {
        match self {
            Self::Exact => key == query,
            Self::Prefix => key.starts_with(query),
            Self::Substring => key.contains(query),
        }
    }
}

/// Immutable lookup table over search-data entries.
///
/// Construction validates every record (fail-fast, no partial index);
/// after that the index is read-only, so it can be shared freely
/// across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolIndex {
    entries: Vec<IndexEntry>,
}

impl SymbolIndex {
    /// Build an index from raw entries, enforcing the record
    /// invariants: lowercase keys, at least one item per entry, no
    /// empty target URLs.
    pub fn from_entries(entries: Vec<IndexEntry>) -> Result<Self, ParseError> {
        for entry in &entries {
            validate(entry)?;
        }
        Ok(Self { entries })
    }

    /// Parse a search-data fragment and build a validated index from
    /// it in one step.
    pub fn load_searchdata(input: &str) -> Result<Self, ParseError> {
        Self::from_entries(parse_searchdata(input)?)
    }

    /// Number of entries. Duplicate keys count once per entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of items across all entries.
    pub fn item_count(&self) -> usize {
        self.entries.iter().map(|e| e.items.len()).sum()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Entries whose key matches the query under the given mode,
    /// in index order. Lazy and restartable.
    pub fn matching_entries<'a>(
        &'a self,
        query: &str,
        mode: MatchMode,
    ) -> impl Iterator<Item = &'a IndexEntry> + 'a {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(move |entry| mode.matches(&entry.key, &query))
    }

    /// Items of all matching entries, in index order. Entries sharing
    /// a key each contribute their items, so overloads spread across
    /// duplicate keys come back as one combined sequence. Unknown
    /// queries yield an empty iterator, never an error.
    pub fn lookup<'a>(
        &'a self,
        query: &str,
        mode: MatchMode,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        self.matching_entries(query, mode)
            .flat_map(|entry| entry.items.iter())
    }
}

fn validate(entry: &IndexEntry) -> Result<(), ParseError> {
    if entry.key.chars().any(char::is_uppercase) {
        return Err(ParseError::KeyNotLowercase {
            key: entry.key.clone(),
        });
    }
    if entry.items.is_empty() {
        return Err(ParseError::EmptyItems {
            key: entry.key.clone(),
        });
    }
    if entry.items.iter().any(|item| item.target_url.is_empty()) {
        return Err(ParseError::EmptyTargetUrl {
            key: entry.key.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SymbolIndex {
        SymbolIndex::from_entries(vec![
            IndexEntry::new(
                "image",
                vec![Item::new("Image", "../classcl_1_1Image.html", "cl")],
            ),
            IndexEntry::new(
                "image",
                vec![
                    Item::new(
                        "Image",
                        "../classcl_1_1Image.html#ad9a2",
                        "cl::Image::Image()",
                    ),
                    Item::new(
                        "Image",
                        "../classcl_1_1Image.html#a8228",
                        "cl::Image::Image(const Image &image)",
                    ),
                ],
            ),
            IndexEntry::new(
                "imageformat",
                vec![Item::new("ImageFormat", "../structcl_1_1ImageFormat.html", "cl")],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn len_counts_entries_not_keys() {
        let index = sample();
        assert_eq!(index.len(), 3);
        assert_eq!(index.item_count(), 4);
    }

    #[test]
    fn exact_lookup_merges_duplicate_keys() {
        let index = sample();
        let hits: Vec<_> = index.lookup("image", MatchMode::Exact).collect();
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|item| item.display_name == "Image"));
    }

    #[test]
    fn prefix_lookup_reaches_longer_keys() {
        let index = sample();
        assert_eq!(index.lookup("image", MatchMode::Prefix).count(), 4);
        assert_eq!(index.lookup("imagef", MatchMode::Prefix).count(), 1);
    }

    #[test]
    fn substring_lookup_matches_inside_keys() {
        let index = sample();
        assert_eq!(index.lookup("format", MatchMode::Substring).count(), 1);
        assert_eq!(index.lookup("format", MatchMode::Prefix).count(), 0);
    }

    #[test]
    fn queries_are_lowercased_before_matching() {
        let index = sample();
        assert_eq!(index.lookup("ImageFormat", MatchMode::Exact).count(), 1);
    }

    #[test]
    fn unknown_query_yields_empty_not_error() {
        let index = sample();
        assert_eq!(index.lookup("nonexistent-key", MatchMode::Substring).count(), 0);
    }

    #[test]
    fn lookup_is_restartable() {
        let index = sample();
        let first: Vec<_> = index.lookup("image", MatchMode::Prefix).collect();
        let second: Vec<_> = index.lookup("image", MatchMode::Prefix).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_entry_without_items() {
        let err = SymbolIndex::from_entries(vec![IndexEntry::new("empty", vec![])]).unwrap_err();
        assert_eq!(err, ParseError::EmptyItems { key: "empty".into() });
    }

    #[test]
    fn rejects_empty_target_url() {
        let err = SymbolIndex::from_entries(vec![IndexEntry::new(
            "bad",
            vec![Item::new("Bad", "", "")],
        )])
        .unwrap_err();
        assert_eq!(err, ParseError::EmptyTargetUrl { key: "bad".into() });
    }

    #[test]
    fn rejects_uppercase_keys() {
        let err = SymbolIndex::from_entries(vec![IndexEntry::new(
            "Image",
            vec![Item::new("Image", "page.html", "")],
        )])
        .unwrap_err();
        assert_eq!(err, ParseError::KeyNotLowercase { key: "Image".into() });
    }
}
