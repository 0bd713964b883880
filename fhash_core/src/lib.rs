//! fhash core library
//!
//! Scans directory trees or explicit path lists under bounded concurrency
//! and computes one or more digests per file in a single read pass. The
//! command-line surface, output formatting, and path-list ingestion live in
//! the companion CLI crate; this library only produces a stream of per-path
//! results.

pub mod error;
pub mod hashing;
pub mod scanner;

// Re-export main types
pub use error::{ConfigError, Error, Result, ScanError};
pub use hashing::{
    AlgorithmRegistry, DigestEncoding, HashAlgorithmImpl, QuickXorHash, StreamingHasher,
    algorithm_names, hash_file, hash_reader, parse_selection,
};
pub use scanner::{
    ErrorPolicy, FileFilter, FilterOptions, ScanOutcome, ScanResult, Scanner, merge, parse_size,
};
