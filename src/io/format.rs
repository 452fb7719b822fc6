//! Output formatting for CLI commands.
//!
//! Every command renders either plain text for terminals or a small
//! JSON envelope for tooling, selected with `--json`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }

    pub fn is_json(self) -> bool {
        self == Self::Json
    }
}

/// Operation outcome in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    NotFound,
    Error,
}

/// JSON envelope printed by commands in `--json` mode.
#[derive(Debug, Serialize)]
pub struct JsonResponse<T: Serialize> {
    pub status: ResponseStatus,
    /// Machine-readable code, e.g. `OK`, `NOT_FOUND`, `PARSE_ERROR`
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            code: "OK",
            message: None,
            query: None,
            count: None,
            data: Some(data),
        }
    }

    pub fn not_found(message: String) -> Self {
        Self {
            status: ResponseStatus::NotFound,
            code: "NOT_FOUND",
            message: Some(message),
            query: None,
            count: None,
            data: None,
        }
    }

    pub fn error(code: &'static str, message: String) -> Self {
        Self {
            status: ResponseStatus::Error,
            code,
            message: Some(message),
            query: None,
            count: None,
            data: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Render to stdout. Serialization of these envelopes cannot fail;
    /// a formatter error would be a bug, not an input condition.
    pub fn print(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(self).expect("envelope serialization")
        );
    }
}
