//! Core records of the search index.

use serde::{Deserialize, Serialize};

/// One concrete documentation target associated with a search key: a
/// class page, a method anchor, or one overload of either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Name shown in search results, e.g. `Image2D`.
    pub display_name: String,
    /// Relative page path with an optional `#anchor` fragment.
    /// Never empty in a validated index.
    pub target_url: String,
    /// Enclosing scope, or the full overload signature for methods.
    /// Empty when the target is not nested in anything.
    #[serde(default)]
    pub container: String,
}

impl Item {
    pub fn new(
        display_name: impl Into<String>,
        target_url: impl Into<String>,
        container: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            target_url: target_url.into(),
            container: container.into(),
        }
    }

    /// Page path without the anchor fragment.
    pub fn path(&self) -> &str {
        match self.target_url.split_once('#') {
            Some((path, _)) => path,
            None => &self.target_url,
        }
    }

    /// Anchor fragment, if the target points inside a page.
    pub fn anchor(&self) -> Option<&str> {
        self.target_url.split_once('#').map(|(_, anchor)| anchor)
    }
}

/// One search key plus its display items.
///
/// Keys are lowercase and need not be unique across entries: a class
/// and its constructors share a key, each in its own entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub key: String,
    pub items: Vec<Item>,
}

impl IndexEntry {
    pub fn new(key: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            key: key.into(),
            items,
        }
    }
}
