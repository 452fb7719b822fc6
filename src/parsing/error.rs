use thiserror::Error;

/// Errors produced while parsing a search-data fragment.
///
/// Loading is fail-fast: the first malformed record aborts the whole
/// load, so a broken input can never produce a partial index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character '{found}' at line {line}, column {column}")]
    UnexpectedChar { found: char, line: u32, column: u32 },

    #[error("expected {expected} at line {line}, column {column}")]
    Expected {
        expected: &'static str,
        line: u32,
        column: u32,
    },

    #[error("unexpected end of input while looking for {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: u32, column: u32 },

    #[error("trailing content after the entry list at line {line}, column {column}")]
    TrailingContent { line: u32, column: u32 },

    #[error("entry '{key}' has no items")]
    EmptyItems { key: String },

    #[error("entry '{key}' has an item with an empty target URL")]
    EmptyTargetUrl { key: String },

    #[error("search key '{key}' is not lowercase")]
    KeyNotLowercase { key: String },
}
