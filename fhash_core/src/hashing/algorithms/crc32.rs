//! CRC32 (IEEE) hash algorithm implementation

use crate::hashing::traits::{HashAlgorithmImpl, StreamingHasher};
use crc32fast::Hasher as Crc32Hasher;

#[derive(Debug)]
pub struct Crc32Algorithm;

struct Crc32StreamingHasher {
    hasher: Crc32Hasher,
}

impl StreamingHasher for Crc32StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(&self) -> Vec<u8> {
        // Big-endian, matching the conventional textual rendering
        self.hasher.clone().finalize().to_be_bytes().to_vec()
    }
}

impl HashAlgorithmImpl for Crc32Algorithm {
    fn name(&self) -> &'static str {
        "crc32"
    }

    fn output_size(&self) -> usize {
        4
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Crc32StreamingHasher {
            hasher: Crc32Hasher::new(),
        })
    }
}
