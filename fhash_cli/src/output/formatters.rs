//! Text and JSON-lines formatters

use super::Formatter;
use fhash_core::ScanResult;
use serde_json::json;

/// Text formatter compatible with md5sum/sha256sum style output
///
/// Single algorithm: `<digest>  <path>`. Multiple algorithms: one
/// `<algo>:<digest>  <path>` line per algorithm, sorted by algorithm name.
pub struct TextFormatter {
    algorithms: Vec<String>,
}

impl TextFormatter {
    pub fn new(mut algorithms: Vec<String>) -> Self {
        algorithms.sort();
        Self { algorithms }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, result: &ScanResult) -> String {
        let empty = String::new();
        let hashes = result.hashes();

        if let [algorithm] = self.algorithms.as_slice() {
            let digest = hashes.and_then(|h| h.get(algorithm)).unwrap_or(&empty);
            return format!("{digest}  {}", result.path.display());
        }

        let lines: Vec<String> = self
            .algorithms
            .iter()
            .map(|algorithm| {
                let digest = hashes.and_then(|h| h.get(algorithm)).unwrap_or(&empty);
                format!("{algorithm}:{digest}  {}", result.path.display())
            })
            .collect();
        lines.join("\n")
    }

    fn format_error(&self, result: &ScanResult) -> String {
        let cause = result
            .error()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        format!("# ERROR: {}: {cause}", result.path.display())
    }
}

/// JSON-lines (NDJSON) formatter
///
/// Successes flatten digests into the top-level object:
/// `{"path": ..., "size": ..., "<algo>": "<digest>", ...}`.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, result: &ScanResult) -> String {
        let mut record = json!({
            "path": result.path.to_string_lossy(),
            "size": result.size,
        });

        if let (Some(object), Some(hashes)) = (record.as_object_mut(), result.hashes()) {
            for (algorithm, digest) in hashes {
                object.insert(algorithm.clone(), json!(digest));
            }
        }

        record.to_string()
    }

    fn format_error(&self, result: &ScanResult) -> String {
        let cause = result
            .error()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        json!({
            "path": result.path.to_string_lossy(),
            "error": cause,
        })
        .to_string()
    }
}
