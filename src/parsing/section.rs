//! Section naming used by generated `search/` directories.
//!
//! The search database is sharded into one file per symbol kind and
//! leading character, named `<kind>_<hex>.js` where `<hex>` is the
//! character code of the first letter of the keys inside. The sample
//! corpus ships `all_69.js`: kind `all`, keys starting with `i`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Symbol kind a search-data shard covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    All,
    Classes,
    Namespaces,
    Files,
    Functions,
    Variables,
    Typedefs,
    Enums,
    Enumvalues,
    Properties,
    Events,
    Related,
    Defines,
    Groups,
    Pages,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Classes => "classes",
            Self::Namespaces => "namespaces",
            Self::Files => "files",
            Self::Functions => "functions",
            Self::Variables => "variables",
            Self::Typedefs => "typedefs",
            Self::Enums => "enums",
            Self::Enumvalues => "enumvalues",
            Self::Properties => "properties",
            Self::Events => "events",
            Self::Related => "related",
            Self::Defines => "defines",
            Self::Groups => "groups",
            Self::Pages => "pages",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "all" => Self::All,
            "classes" => Self::Classes,
            "namespaces" => Self::Namespaces,
            "files" => Self::Files,
            "functions" => Self::Functions,
            "variables" => Self::Variables,
            "typedefs" => Self::Typedefs,
            "enums" => Self::Enums,
            "enumvalues" => Self::Enumvalues,
            "properties" => Self::Properties,
            "events" => Self::Events,
            "related" => Self::Related,
            "defines" => Self::Defines,
            "groups" => Self::Groups,
            "pages" => Self::Pages,
            _ => return None,
        })
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of one search-data shard, recovered from its file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    /// First character of the keys in this shard.
    pub initial: char,
}

impl Section {
    /// Recognize a shard file name such as `all_69.js` or
    /// `functions_6d.js`. Returns `None` for anything else (the
    /// directory also holds the search engine script itself).
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".js")?;
        let (kind, hex) = stem.rsplit_once('_')?;
        let kind = SectionKind::parse(kind)?;
        let code = u32::from_str_radix(hex, 16).ok()?;
        let initial = char::from_u32(code)?;
        Some(Self { kind, initial })
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{:x}.js", self.kind, self.initial as u32)
    }
}
