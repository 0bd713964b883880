//! Single-pass multi-algorithm hashing
//!
//! Reads a byte source once and feeds every requested accumulator the same
//! chunks, so N digests cost one read pass. Operates on any async reader;
//! file handling is a thin wrapper, which keeps the fan-out testable against
//! in-memory buffers.

use super::traits::HashAlgorithmImpl;
use crate::error::ScanError;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};

/// Read chunk size for hashing
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Compute all requested digests from a reader in a single pass
///
/// Returns a map from algorithm name to canonical encoded digest. An empty
/// algorithm list yields an empty map. The reader is consumed; it is never
/// rewound.
pub async fn hash_reader<R>(
    reader: &mut R,
    algorithms: &[Arc<dyn HashAlgorithmImpl>],
) -> std::io::Result<HashMap<String, String>>
where
    R: AsyncRead + Unpin,
{
    let mut hashers: Vec<_> = algorithms.iter().map(|a| a.create_hasher()).collect();
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];

    loop {
        let n = reader.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        for hasher in &mut hashers {
            hasher.update(&buffer[..n]);
        }
    }

    let mut results = HashMap::with_capacity(algorithms.len());
    for (algorithm, hasher) in algorithms.iter().zip(&hashers) {
        let digest = algorithm.encoding().encode(&hasher.finalize());
        results.insert(algorithm.name().to_string(), digest);
    }

    Ok(results)
}

/// Compute all requested digests for a file in a single pass
pub async fn hash_file(
    path: &Path,
    algorithms: &[Arc<dyn HashAlgorithmImpl>],
) -> Result<HashMap<String, String>, ScanError> {
    let file = File::open(path)
        .await
        .map_err(|e| ScanError::read(path, e))?;
    let mut reader = BufReader::new(file);

    hash_reader(&mut reader, algorithms)
        .await
        .map_err(|e| ScanError::read(path, e))
}
