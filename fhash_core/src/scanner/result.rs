//! Scan result types

use crate::error::ScanError;
use std::collections::HashMap;
use std::path::PathBuf;

/// Outcome of scanning a single path: digests or the error that stopped it
#[derive(Debug)]
pub enum ScanOutcome {
    /// Algorithm name -> canonical encoded digest
    Hashed(HashMap<String, String>),
    /// The error encountered while processing the path
    Failed(ScanError),
}

/// Result of scanning a single file
#[derive(Debug)]
pub struct ScanResult {
    /// File path (relative or absolute depending on scanner configuration)
    pub path: PathBuf,
    /// File size in bytes (0 when the size could not be determined)
    pub size: u64,
    /// Digests on success, the cause on failure
    pub outcome: ScanOutcome,
}

impl ScanResult {
    /// Create a success result
    pub fn success(path: PathBuf, size: u64, hashes: HashMap<String, String>) -> Self {
        Self {
            path,
            size,
            outcome: ScanOutcome::Hashed(hashes),
        }
    }

    /// Create a failure result
    pub fn failure(path: PathBuf, error: ScanError) -> Self {
        Self {
            path,
            size: 0,
            outcome: ScanOutcome::Failed(error),
        }
    }

    /// True if this result represents an error
    pub fn is_err(&self) -> bool {
        matches!(self.outcome, ScanOutcome::Failed(_))
    }

    /// Digest map, if the scan succeeded
    pub fn hashes(&self) -> Option<&HashMap<String, String>> {
        match &self.outcome {
            ScanOutcome::Hashed(hashes) => Some(hashes),
            ScanOutcome::Failed(_) => None,
        }
    }

    /// Error cause, if the scan failed
    pub fn error(&self) -> Option<&ScanError> {
        match &self.outcome {
            ScanOutcome::Hashed(_) => None,
            ScanOutcome::Failed(error) => Some(error),
        }
    }
}
