//! Output formatting for scan results

mod formatters;

pub use formatters::{JsonFormatter, TextFormatter};

use fhash_core::ScanResult;

/// Formats scan results for output
pub trait Formatter {
    /// Format a successful result
    fn format(&self, result: &ScanResult) -> String;

    /// Format a failure result
    fn format_error(&self, result: &ScanResult) -> String;
}
