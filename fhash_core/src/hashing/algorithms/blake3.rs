//! BLAKE3 hash algorithm implementation

use crate::hashing::traits::{HashAlgorithmImpl, StreamingHasher};

#[derive(Debug)]
pub struct Blake3Algorithm;

struct Blake3StreamingHasher {
    hasher: blake3::Hasher,
}

impl StreamingHasher for Blake3StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(&self) -> Vec<u8> {
        self.hasher.finalize().as_bytes().to_vec()
    }
}

impl HashAlgorithmImpl for Blake3Algorithm {
    fn name(&self) -> &'static str {
        "blake3"
    }

    fn output_size(&self) -> usize {
        32
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Blake3StreamingHasher {
            hasher: blake3::Hasher::new(),
        })
    }
}
