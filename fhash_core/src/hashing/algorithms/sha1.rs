//! SHA-1 hash algorithm implementation

use crate::hashing::traits::{HashAlgorithmImpl, StreamingHasher};
use sha1::{Digest, Sha1};

#[derive(Debug)]
pub struct Sha1Algorithm;

struct Sha1StreamingHasher {
    hasher: Sha1,
}

impl StreamingHasher for Sha1StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(&self) -> Vec<u8> {
        self.hasher.clone().finalize().to_vec()
    }
}

impl HashAlgorithmImpl for Sha1Algorithm {
    fn name(&self) -> &'static str {
        "sha1"
    }

    fn output_size(&self) -> usize {
        20
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Sha1StreamingHasher { hasher: Sha1::new() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_known_vectors() {
        let test_cases: Vec<(&[u8], &str)> = vec![
            (b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
            (b"a", "86f7e437faa5a7fce15d1ddcb9eaeaea377667b8"),
            (
                b"The quick brown fox jumps over the lazy dog",
                "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
            ),
        ];

        for (input, expected) in test_cases {
            assert_eq!(Sha1Algorithm.hash_bytes(input), expected);
        }
    }
}
