//! On-disk storage of the native index form.

mod metadata;
mod persistence;

pub use metadata::IndexMetadata;
pub use persistence::IndexPersistence;
