//! Multi-algorithm hashing for the fhash core library
//!
//! Exposes the algorithm registry, the accumulator traits, and the
//! single-pass fan-out used by the scanner.

use crate::error::ConfigError;
use std::sync::Arc;

mod algorithms;
mod multi;
mod registry;
mod traits;

pub use algorithms::quickxor::QuickXorHash;
pub use multi::{READ_BUFFER_SIZE, hash_file, hash_reader};
pub use registry::AlgorithmRegistry;
pub use traits::{DigestEncoding, HashAlgorithmImpl, StreamingHasher};

/// Parse a comma-separated algorithm selection against the global registry
pub fn parse_selection(names: &str) -> Result<Vec<Arc<dyn HashAlgorithmImpl>>, ConfigError> {
    AlgorithmRegistry::global().parse_selection(names)
}

/// Names of all registered algorithms, sorted
pub fn algorithm_names() -> Vec<String> {
    AlgorithmRegistry::global().names()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_uses_global_registry() {
        let selected = parse_selection("quickxor").unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name(), "quickxor");
        assert_eq!(selected[0].output_size(), 20);
        assert_eq!(selected[0].encoding(), DigestEncoding::Base64);
    }

    #[test]
    fn test_algorithm_names_sorted() {
        let names = algorithm_names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn test_every_builtin_finalize_is_idempotent() {
        for name in algorithm_names() {
            let algorithm = AlgorithmRegistry::global().get(&name).unwrap();
            let mut hasher = algorithm.create_hasher();
            hasher.update(b"idempotence check");
            let first = hasher.finalize();
            let second = hasher.finalize();
            assert_eq!(first, second, "{name} finalize mutated state");
            assert_eq!(first.len(), algorithm.output_size(), "{name} output size");
        }
    }

    #[test]
    fn test_every_builtin_is_chunk_invariant() {
        let data = b"a modest amount of input, split many ways";
        for name in algorithm_names() {
            let algorithm = AlgorithmRegistry::global().get(&name).unwrap();

            let mut whole = algorithm.create_hasher();
            whole.update(data);

            let mut parts = algorithm.create_hasher();
            for chunk in data.chunks(7) {
                parts.update(chunk);
            }

            assert_eq!(
                whole.finalize(),
                parts.finalize(),
                "{name} is sensitive to chunk boundaries"
            );
        }
    }
}
