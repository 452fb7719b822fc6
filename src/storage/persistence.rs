//! Persistence of the native index form.
//!
//! The validated index is stored as pretty-printed JSON (`index.json`)
//! with its metadata beside it (`index.meta`). Writes go through a
//! temp file and a rename, so a crashed save never leaves a torn
//! index behind.

use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{IndexError, IndexResult};
use crate::index::{IndexEntry, SymbolIndex};
use crate::storage::IndexMetadata;

const INDEX_FILE: &str = "index.json";

/// Manages the on-disk copy of the index.
#[derive(Debug)]
pub struct IndexPersistence {
    base_path: PathBuf,
}

impl IndexPersistence {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Write the index and its metadata, returning the metadata that
    /// was stored.
    #[must_use = "Save errors should be handled to ensure data is persisted"]
    pub fn save(&self, index: &SymbolIndex, sources: Vec<String>) -> IndexResult<IndexMetadata> {
        fs::create_dir_all(&self.base_path).map_err(|e| IndexError::FileWrite {
            path: self.base_path.clone(),
            source: e,
        })?;

        let json = serde_json::to_string_pretty(index.entries()).map_err(IndexError::Serialize)?;
        let index_path = self.base_path.join(INDEX_FILE);

        let mut tmp =
            NamedTempFile::new_in(&self.base_path).map_err(|e| IndexError::FileWrite {
                path: self.base_path.clone(),
                source: e,
            })?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| IndexError::FileWrite {
                path: index_path.clone(),
                source: e,
            })?;
        tmp.persist(&index_path).map_err(|e| IndexError::FileWrite {
            path: index_path.clone(),
            source: e.error,
        })?;
        debug!("wrote {} entries to {}", index.len(), index_path.display());

        let mut metadata = IndexMetadata::load(&self.base_path).unwrap_or_default();
        metadata.update_counts(index);
        metadata.sources = sources;
        metadata.save(&self.base_path)?;
        info!(
            "saved index: {} entries, {} items",
            metadata.entry_count, metadata.item_count
        );
        Ok(metadata)
    }

    /// Load and re-validate the persisted index.
    #[must_use = "Load errors should be handled appropriately"]
    pub fn load(&self) -> IndexResult<SymbolIndex> {
        let index_path = self.base_path.join(INDEX_FILE);
        if !index_path.exists() {
            return Err(IndexError::IndexNotFound { path: index_path });
        }
        let json = fs::read_to_string(&index_path).map_err(|e| IndexError::FileRead {
            path: index_path.clone(),
            source: e,
        })?;
        let entries: Vec<IndexEntry> =
            serde_json::from_str(&json).map_err(|e| IndexError::Deserialize {
                path: index_path,
                source: e,
            })?;
        Ok(SymbolIndex::from_entries(entries)?)
    }

    pub fn load_metadata(&self) -> IndexResult<IndexMetadata> {
        IndexMetadata::load(&self.base_path)
    }

    /// Check if a persisted index exists.
    pub fn exists(&self) -> bool {
        self.base_path.join(INDEX_FILE).exists()
    }

    /// Delete the persisted index and its metadata.
    pub fn clear(&self) -> Result<(), std::io::Error> {
        for file in [INDEX_FILE, super::metadata::METADATA_FILE] {
            let path = self.base_path.join(file);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Item;
    use tempfile::TempDir;

    fn small_index() -> SymbolIndex {
        SymbolIndex::from_entries(vec![IndexEntry::new(
            "findmax",
            vec![Item::new("FindMax", "../classFindMax.html", "")],
        )])
        .unwrap()
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = IndexPersistence::new(temp_dir.path().to_path_buf());

        let index = small_index();
        let metadata = persistence
            .save(&index, vec!["all_66.js".to_string()])
            .unwrap();
        assert_eq!(metadata.entry_count, 1);
        assert_eq!(metadata.sources, vec!["all_66.js".to_string()]);

        let reloaded = persistence.load().unwrap();
        assert_eq!(reloaded, index);
    }

    #[test]
    fn load_without_index_reports_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = IndexPersistence::new(temp_dir.path().to_path_buf());
        assert!(!persistence.exists());
        assert!(matches!(
            persistence.load(),
            Err(IndexError::IndexNotFound { .. })
        ));
    }

    #[test]
    fn clear_removes_both_files() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = IndexPersistence::new(temp_dir.path().to_path_buf());
        persistence.save(&small_index(), Vec::new()).unwrap();
        assert!(persistence.exists());
        persistence.clear().unwrap();
        assert!(!persistence.exists());
    }
}
