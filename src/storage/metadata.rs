//! Metadata tracking for the persisted index.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{IndexError, IndexResult};
use crate::index::SymbolIndex;

pub(crate) const METADATA_FILE: &str = "index.meta";

/// State of the persisted index, stored beside the data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexMetadata {
    /// Version of the index format
    pub version: u32,

    /// Number of entries in the index
    pub entry_count: u32,

    /// Total number of items across entries
    pub item_count: u32,

    /// Search-data files the index was built from
    pub sources: Vec<String>,

    /// Unix timestamp of the last rebuild
    pub generated_at: u64,
}

impl IndexMetadata {
    pub fn new() -> Self {
        Self {
            version: 1,
            entry_count: 0,
            item_count: 0,
            sources: Vec::new(),
            generated_at: unix_timestamp(),
        }
    }

    /// Refresh counts from a freshly built index.
    pub fn update_counts(&mut self, index: &SymbolIndex) {
        self.entry_count = index.len() as u32;
        self.item_count = index.item_count() as u32;
        self.generated_at = unix_timestamp();
    }

    pub fn save(&self, base_path: &Path) -> IndexResult<()> {
        let metadata_path = base_path.join(METADATA_FILE);
        let json = serde_json::to_string_pretty(self).map_err(IndexError::Serialize)?;
        fs::write(&metadata_path, json).map_err(|e| IndexError::FileWrite {
            path: metadata_path,
            source: e,
        })
    }

    pub fn load(base_path: &Path) -> IndexResult<Self> {
        let metadata_path = base_path.join(METADATA_FILE);
        if !metadata_path.exists() {
            return Ok(Self::new());
        }
        let json = fs::read_to_string(&metadata_path).map_err(|e| IndexError::FileRead {
            path: metadata_path.clone(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| IndexError::Deserialize {
            path: metadata_path,
            source: e,
        })
    }
}

impl Default for IndexMetadata {
    fn default() -> Self {
        Self::new()
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
