//! Central registry for hash algorithm implementations
//!
//! The registry is built once at first access and read-only afterwards, so
//! concurrent scan tasks can look algorithms up without synchronization.

use super::traits::HashAlgorithmImpl;
use crate::error::ConfigError;
use once_cell::sync::OnceCell;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Central registry for all hash algorithms
pub struct AlgorithmRegistry {
    algorithms: HashMap<String, Arc<dyn HashAlgorithmImpl>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    fn new() -> Self {
        Self {
            algorithms: HashMap::new(),
        }
    }

    /// Get the global registry instance
    pub fn global() -> &'static Self {
        static INSTANCE: OnceCell<AlgorithmRegistry> = OnceCell::new();
        INSTANCE.get_or_init(|| {
            let mut registry = Self::new();
            super::algorithms::register_all(&mut registry);
            registry
        })
    }

    /// Register an algorithm under its case-folded name (last write wins)
    pub fn register(&mut self, algorithm: impl HashAlgorithmImpl + 'static) {
        let name = algorithm.name().to_lowercase();
        self.algorithms.insert(name, Arc::new(algorithm));
    }

    /// Get an algorithm by case-insensitive name
    pub fn get(&self, name: &str) -> Option<Arc<dyn HashAlgorithmImpl>> {
        self.algorithms.get(&name.to_lowercase()).cloned()
    }

    /// List all registered algorithm names in lexicographic order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.algorithms.keys().cloned().collect();
        names.sort();
        names
    }

    /// Parse a comma-separated, case-insensitive algorithm selection
    ///
    /// Entries are whitespace-trimmed and duplicates are silently dropped,
    /// keeping first-occurrence order. Unregistered names and selections
    /// resolving to zero algorithms are configuration errors.
    pub fn parse_selection(
        &self,
        names: &str,
    ) -> Result<Vec<Arc<dyn HashAlgorithmImpl>>, ConfigError> {
        let mut selected = Vec::new();
        let mut seen = HashSet::new();

        for part in names.split(',') {
            let name = part.trim().to_lowercase();
            if name.is_empty() {
                continue;
            }
            if !seen.insert(name.clone()) {
                continue;
            }

            match self.get(&name) {
                Some(algorithm) => selected.push(algorithm),
                None => return Err(ConfigError::unknown_algorithm(&name, &self.names())),
            }
        }

        if selected.is_empty() {
            return Err(ConfigError::EmptySelection);
        }

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::traits::StreamingHasher;

    struct FixedHasher(Vec<u8>);

    impl StreamingHasher for FixedHasher {
        fn update(&mut self, _data: &[u8]) {}

        fn finalize(&self) -> Vec<u8> {
            self.0.clone()
        }
    }

    #[derive(Debug)]
    struct FakeAlgorithm {
        id: &'static str,
        digest: Vec<u8>,
    }

    impl HashAlgorithmImpl for FakeAlgorithm {
        fn name(&self) -> &'static str {
            self.id
        }

        fn output_size(&self) -> usize {
            self.digest.len()
        }

        fn create_hasher(&self) -> Box<dyn StreamingHasher> {
            Box::new(FixedHasher(self.digest.clone()))
        }
    }

    #[test]
    fn test_register_case_folds_and_last_write_wins() {
        let mut registry = AlgorithmRegistry::new();
        registry.register(FakeAlgorithm {
            id: "Fake",
            digest: vec![0; 4],
        });
        registry.register(FakeAlgorithm {
            id: "FAKE",
            digest: vec![0; 8],
        });

        assert_eq!(registry.names(), vec!["fake"]);
        assert_eq!(registry.get("fAkE").unwrap().output_size(), 8);
    }

    #[test]
    fn test_global_registry_has_builtins() {
        let registry = AlgorithmRegistry::global();
        assert_eq!(
            registry.names(),
            vec![
                "blake3", "crc32", "md5", "quickxor", "sha1", "sha256", "sha512", "xxh128", "xxh3",
            ]
        );
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let registry = AlgorithmRegistry::global();
        assert!(registry.get("SHA256").is_some());
        assert!(registry.get("QuickXor").is_some());
        assert!(registry.get("whirlpool").is_none());
    }

    #[test]
    fn test_parse_selection_trims_and_dedupes() {
        let registry = AlgorithmRegistry::global();
        let selected = registry.parse_selection("MD5, sha256 , md5").unwrap();

        let names: Vec<_> = selected.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["md5", "sha256"]);
    }

    #[test]
    fn test_parse_selection_matches_plain_form() {
        let registry = AlgorithmRegistry::global();
        let noisy = registry.parse_selection("MD5, sha256 , md5").unwrap();
        let plain = registry.parse_selection("md5,sha256").unwrap();

        let noisy: Vec<_> = noisy.iter().map(|a| a.name()).collect();
        let plain: Vec<_> = plain.iter().map(|a| a.name()).collect();
        assert_eq!(noisy, plain);
    }

    #[test]
    fn test_parse_selection_unknown_algorithm() {
        let registry = AlgorithmRegistry::global();
        let error = registry.parse_selection("md5,sha3").unwrap_err();

        match error {
            ConfigError::UnknownAlgorithm { name, available } => {
                assert_eq!(name, "sha3");
                assert!(available.contains("quickxor"));
            }
            other => panic!("expected UnknownAlgorithm, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_selection_empty_input() {
        let registry = AlgorithmRegistry::global();
        assert!(matches!(
            registry.parse_selection(""),
            Err(ConfigError::EmptySelection)
        ));
        assert!(matches!(
            registry.parse_selection(" , ,, "),
            Err(ConfigError::EmptySelection)
        ));
    }
}
