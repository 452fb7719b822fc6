//! Input/output handling for the CLI.

mod exit_code;
mod format;

pub use exit_code::ExitCode;
pub use format::{JsonResponse, OutputFormat, ResponseStatus};
