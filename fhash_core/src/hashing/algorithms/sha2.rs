//! SHA-256 and SHA-512 hash algorithm implementations

use crate::hashing::traits::{HashAlgorithmImpl, StreamingHasher};
use sha2::{Digest, Sha256, Sha512};

#[derive(Debug)]
pub struct Sha256Algorithm;

struct Sha256StreamingHasher {
    hasher: Sha256,
}

impl StreamingHasher for Sha256StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(&self) -> Vec<u8> {
        self.hasher.clone().finalize().to_vec()
    }
}

impl HashAlgorithmImpl for Sha256Algorithm {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn output_size(&self) -> usize {
        32
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Sha256StreamingHasher {
            hasher: Sha256::new(),
        })
    }
}

#[derive(Debug)]
pub struct Sha512Algorithm;

struct Sha512StreamingHasher {
    hasher: Sha512,
}

impl StreamingHasher for Sha512StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(&self) -> Vec<u8> {
        self.hasher.clone().finalize().to_vec()
    }
}

impl HashAlgorithmImpl for Sha512Algorithm {
    fn name(&self) -> &'static str {
        "sha512"
    }

    fn output_size(&self) -> usize {
        64
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Sha512StreamingHasher {
            hasher: Sha512::new(),
        })
    }
}
