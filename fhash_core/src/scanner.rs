//! Concurrent file scanning
//!
//! The scanner walks directory trees or explicit path lists, applies the
//! configured filter before any file is opened, and hashes accepted files
//! under a bounded worker pool. Results stream out of a bounded channel in
//! completion order, with backpressure on the producers when the consumer
//! falls behind.

use crate::error::{ConfigError, ScanError};
use crate::hashing::{HashAlgorithmImpl, hash_file};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use walkdir::WalkDir;

mod filter;
mod merge;
mod result;

pub use filter::{FileFilter, FilterOptions, parse_size};
pub use merge::merge;
pub use result::{ScanOutcome, ScanResult};

/// How the scanner reacts to per-path failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Emit a failure result and continue with remaining paths
    #[default]
    Skip,
    /// Emit a failure result and stop dispatching new work (best effort:
    /// work already in flight completes and still emits its results)
    Fail,
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip" => Ok(ErrorPolicy::Skip),
            "fail" => Ok(ErrorPolicy::Fail),
            other => Err(ConfigError::InvalidPolicy {
                value: other.to_string(),
            }),
        }
    }
}

/// Scans files and computes their digests
#[derive(Clone)]
pub struct Scanner {
    workers: usize,
    filter: Option<Arc<FileFilter>>,
    algorithms: Vec<Arc<dyn HashAlgorithmImpl>>,
    on_error: ErrorPolicy,
    recursive: bool,
    absolute_paths: bool,
}

impl Scanner {
    /// Create a scanner with default settings: one worker per processor,
    /// skip-on-error, recursive, no filter
    pub fn new(algorithms: Vec<Arc<dyn HashAlgorithmImpl>>) -> Self {
        Self {
            workers: num_cpus::get(),
            filter: None,
            algorithms,
            on_error: ErrorPolicy::Skip,
            recursive: true,
            absolute_paths: false,
        }
    }

    /// Set the number of concurrent workers (minimum 1)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Set the file filter
    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Set the error policy
    pub fn with_error_policy(mut self, on_error: ErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }

    /// Set whether directory scans descend into subdirectories
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set whether result paths are rewritten to absolute form
    pub fn with_absolute_paths(mut self, absolute: bool) -> Self {
        self.absolute_paths = absolute;
        self
    }

    /// Scan a single file
    ///
    /// Returns `None` when the file is rejected by the filter. Directories
    /// and unreadable paths yield failure results.
    pub async fn scan_file(&self, path: &Path) -> Option<ScanResult> {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) => {
                return Some(ScanResult::failure(
                    path.to_path_buf(),
                    ScanError::stat(path, e),
                ));
            }
        };

        if metadata.is_dir() {
            return Some(ScanResult::failure(
                path.to_path_buf(),
                ScanError::invalid_target(path),
            ));
        }

        let size = metadata.len();
        if let Some(filter) = &self.filter
            && !filter.matches(path, size)
        {
            return None;
        }

        match hash_file(path, &self.algorithms).await {
            Ok(hashes) => Some(ScanResult::success(self.output_path(path), size, hashes)),
            Err(e) => Some(ScanResult::failure(self.output_path(path), e)),
        }
    }

    /// Scan an explicit list of file paths concurrently
    ///
    /// Results arrive in completion order through a bounded channel.
    pub fn scan_files(&self, paths: Vec<PathBuf>) -> mpsc::Receiver<ScanResult> {
        let (tx, rx) = mpsc::channel(self.workers * 2);
        let scanner = self.clone();

        tokio::spawn(async move {
            scanner.dispatch(paths, tx).await;
        });

        rx
    }

    /// Scan a directory, filtering during enumeration and hashing accepted
    /// files concurrently
    pub fn scan_dir(&self, dir: PathBuf) -> mpsc::Receiver<ScanResult> {
        let (tx, rx) = mpsc::channel(self.workers * 2);
        let scanner = self.clone();

        tokio::spawn(async move {
            let enumeration = {
                let scanner = scanner.clone();
                let dir = dir.clone();
                tokio::task::spawn_blocking(move || scanner.enumerate(&dir))
            };

            let enumeration = match enumeration.await {
                Ok(enumeration) => enumeration,
                Err(e) => {
                    log::error!("enumeration task failed for {}: {e}", dir.display());
                    return;
                }
            };

            match enumeration {
                Ok((accepted, failures)) => {
                    for failure in failures {
                        if tx.send(failure).await.is_err() {
                            return;
                        }
                    }
                    scanner.dispatch(accepted, tx).await;
                }
                // Fail-on-error: the walk aborted, emit the cause and stop
                Err(failure) => {
                    let _ = tx.send(failure).await;
                }
            }
        });

        rx
    }

    /// Walk a directory collecting accepted paths and walk failures
    ///
    /// Under the fail policy the first unreadable entry aborts the walk and
    /// is returned as the sole result.
    fn enumerate(&self, dir: &Path) -> Result<(Vec<PathBuf>, Vec<ScanResult>), ScanResult> {
        let mut accepted = Vec::new();
        let mut failures = Vec::new();

        let mut walker = WalkDir::new(dir).follow_links(false);
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| dir.to_path_buf());
                    let failure = ScanResult::failure(
                        path.clone(),
                        ScanError::walk(&path, e.into()),
                    );
                    if self.on_error == ErrorPolicy::Fail {
                        return Err(failure);
                    }
                    log::warn!("walk error under {}: continuing", dir.display());
                    failures.push(failure);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(e) => {
                    let path = entry.path().to_path_buf();
                    let failure =
                        ScanResult::failure(path.clone(), ScanError::walk(&path, e.into()));
                    if self.on_error == ErrorPolicy::Fail {
                        return Err(failure);
                    }
                    log::warn!("unreadable metadata for {}: continuing", path.display());
                    failures.push(failure);
                    continue;
                }
            };

            if let Some(filter) = &self.filter
                && !filter.matches(entry.path(), size)
            {
                continue;
            }

            accepted.push(entry.into_path());
        }

        log::debug!(
            "enumerated {} under {} ({} accepted, {} failed)",
            accepted.len() + failures.len(),
            dir.display(),
            accepted.len(),
            failures.len()
        );

        Ok((accepted, failures))
    }

    /// Run per-file processing for every path under the admission gate
    ///
    /// A semaphore of worker width bounds concurrency; a permit is acquired
    /// before each dispatch and held until that file's result is emitted.
    /// Under the fail policy a halt flag set by the first failure stops new
    /// dispatch, while already-dispatched work runs to completion.
    async fn dispatch(&self, paths: Vec<PathBuf>, tx: mpsc::Sender<ScanResult>) {
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let halted = Arc::new(AtomicBool::new(false));
        let mut tasks = JoinSet::new();

        for path in paths {
            let Ok(permit) = semaphore.clone().acquire_owned().await else {
                break;
            };
            if halted.load(Ordering::SeqCst) {
                break;
            }

            let scanner = self.clone();
            let tx = tx.clone();
            let halted = halted.clone();
            tasks.spawn(async move {
                if let Some(result) = scanner.scan_file(&path).await {
                    if result.is_err() && scanner.on_error == ErrorPolicy::Fail {
                        halted.store(true, Ordering::SeqCst);
                    }
                    let _ = tx.send(result).await;
                }
                drop(permit);
            });
        }

        while tasks.join_next().await.is_some() {}
    }

    fn output_path(&self, path: &Path) -> PathBuf {
        if self.absolute_paths {
            std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
        } else {
            path.to_path_buf()
        }
    }
}
