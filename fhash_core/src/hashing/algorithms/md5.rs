//! MD5 hash algorithm implementation

use crate::hashing::traits::{HashAlgorithmImpl, StreamingHasher};
use md5::{Digest, Md5};

#[derive(Debug)]
pub struct Md5Algorithm;

struct Md5StreamingHasher {
    hasher: Md5,
}

impl StreamingHasher for Md5StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(&self) -> Vec<u8> {
        self.hasher.clone().finalize().to_vec()
    }
}

impl HashAlgorithmImpl for Md5Algorithm {
    fn name(&self) -> &'static str {
        "md5"
    }

    fn output_size(&self) -> usize {
        16
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Md5StreamingHasher { hasher: Md5::new() })
    }
}
