//! XXH3 64-bit and 128-bit fingerprint implementations
//!
//! Non-cryptographic, used for fast change detection rather than integrity
//! guarantees. Digests render big-endian so the hex form sorts like the
//! numeric value.

use crate::hashing::traits::{HashAlgorithmImpl, StreamingHasher};
use xxhash_rust::xxh3::Xxh3;

#[derive(Debug)]
pub struct Xxh3Algorithm;

struct Xxh3StreamingHasher {
    hasher: Xxh3,
}

impl StreamingHasher for Xxh3StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(&self) -> Vec<u8> {
        self.hasher.digest().to_be_bytes().to_vec()
    }
}

impl HashAlgorithmImpl for Xxh3Algorithm {
    fn name(&self) -> &'static str {
        "xxh3"
    }

    fn output_size(&self) -> usize {
        8
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Xxh3StreamingHasher {
            hasher: Xxh3::new(),
        })
    }
}

#[derive(Debug)]
pub struct Xxh128Algorithm;

struct Xxh128StreamingHasher {
    hasher: Xxh3,
}

impl StreamingHasher for Xxh128StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(&self) -> Vec<u8> {
        self.hasher.digest128().to_be_bytes().to_vec()
    }
}

impl HashAlgorithmImpl for Xxh128Algorithm {
    fn name(&self) -> &'static str {
        "xxh128"
    }

    fn output_size(&self) -> usize {
        16
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Xxh128StreamingHasher {
            hasher: Xxh3::new(),
        })
    }
}
