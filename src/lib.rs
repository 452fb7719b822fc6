pub mod config;
pub mod error;
pub mod index;
pub mod io;
pub mod logging;
pub mod parsing;
pub mod query;
pub mod storage;

pub use config::Settings;
pub use error::{IndexError, IndexResult};
pub use index::{IndexEntry, Item, MatchMode, SymbolIndex};
pub use parsing::{ParseError, Section, SectionKind, parse_searchdata};
pub use storage::{IndexMetadata, IndexPersistence};
