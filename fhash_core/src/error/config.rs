//! Configuration related error types

use thiserror::Error;

/// Errors raised while interpreting a scan configuration, before any
/// filesystem work starts
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An algorithm name that is not present in the registry
    #[error("unknown algorithm: {name} (available: {available})")]
    UnknownAlgorithm { name: String, available: String },

    /// An algorithm selection that resolves to zero algorithms
    #[error("no hash algorithms selected")]
    EmptySelection,

    /// A glob pattern that fails to compile
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A size threshold that cannot be parsed
    #[error("invalid size '{input}' (expected an integer with optional B/K/M/G/T suffix)")]
    InvalidSize { input: String },

    /// An error policy value other than "skip" or "fail"
    #[error("invalid error policy '{value}' (expected \"skip\" or \"fail\")")]
    InvalidPolicy { value: String },
}

impl ConfigError {
    /// Create an unknown algorithm error listing the registered names
    pub fn unknown_algorithm(name: &str, available: &[String]) -> Self {
        Self::UnknownAlgorithm {
            name: name.to_string(),
            available: available.join(", "),
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: &str, message: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            message: message.to_string(),
        }
    }

    /// Create an invalid size error
    pub fn invalid_size(input: &str) -> Self {
        Self::InvalidSize {
            input: input.to_string(),
        }
    }
}
