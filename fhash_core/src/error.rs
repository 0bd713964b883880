//! Error types for the fhash core library
//!
//! Errors fall into two categories: configuration errors, which are fatal and
//! reported before any scanning begins, and scan errors, which are recovered
//! into per-path failure results during a scan.

use thiserror::Error;

pub mod config;
pub mod scan;

pub use self::config::ConfigError;
pub use self::scan::ScanError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the fhash core library
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (algorithm selection, filter syntax)
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Per-path scanning errors
    #[error(transparent)]
    Scan(#[from] ScanError),
}
