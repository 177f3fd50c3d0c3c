//! Output formatters for check results

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::diagnostic::Diagnostic;
use crate::engine::CheckRun;

/// Output formatter trait
pub trait OutputFormatter: Send + Sync {
    /// Format the result of checking one document
    fn format(&self, run: &CheckRun) -> String;

    /// Format a single diagnostic
    fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String;
}
