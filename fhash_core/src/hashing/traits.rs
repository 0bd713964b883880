//! Core traits for the hash accumulator system

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

/// Canonical text encoding of a digest
///
/// Fixed per algorithm: every built-in encodes as lowercase hexadecimal
/// except QuickXor, which encodes as standard base64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestEncoding {
    Hex,
    Base64,
}

impl DigestEncoding {
    /// Encode raw digest bytes into their canonical text form
    pub fn encode(&self, digest: &[u8]) -> String {
        match self {
            DigestEncoding::Hex => hex::encode(digest),
            DigestEncoding::Base64 => BASE64_STANDARD.encode(digest),
        }
    }
}

/// Core trait that all hash algorithms must implement
pub trait HashAlgorithmImpl: Send + Sync + std::fmt::Debug {
    /// Unique lowercase identifier for this algorithm
    fn name(&self) -> &'static str;

    /// Size of the digest in bytes
    fn output_size(&self) -> usize;

    /// Canonical text encoding of the digest
    fn encoding(&self) -> DigestEncoding {
        DigestEncoding::Hex
    }

    /// Create a new streaming hasher instance
    fn create_hasher(&self) -> Box<dyn StreamingHasher>;

    /// Calculate the canonical encoded digest for in-memory data
    fn hash_bytes(&self, data: &[u8]) -> String {
        let mut hasher = self.create_hasher();
        hasher.update(data);
        self.encoding().encode(&hasher.finalize())
    }
}

/// Trait for streaming hash calculation
pub trait StreamingHasher: Send {
    /// Absorb the next chunk of input
    fn update(&mut self, data: &[u8]);

    /// Produce the digest over everything absorbed so far
    ///
    /// Must not mutate state: repeated calls without further updates return
    /// identical bytes, so several accumulators can be finalized after a
    /// single shared read pass.
    fn finalize(&self) -> Vec<u8>;
}
