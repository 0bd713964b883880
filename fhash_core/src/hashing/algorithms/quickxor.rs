//! QuickXorHash implementation
//!
//! A non-cryptographic checksum that XORs input bytes into a circular buffer
//! and folds the buffer with a bit-shift walk on finalization. Used by
//! OneDrive for Business to fingerprint file content, so the output must be
//! bit-exact against the published algorithm.
//!
//! See: https://docs.microsoft.com/en-us/onedrive/developer/code-snippets/quickxorhash

use crate::hashing::traits::{DigestEncoding, HashAlgorithmImpl, StreamingHasher};

/// Size of the digest in bytes
pub const SIZE: usize = 20;

const SHIFT: usize = 11;
const WIDTH_IN_BITS: usize = 8 * SIZE;
const DATA_SIZE: usize = SHIFT * WIDTH_IN_BITS;

/// Running QuickXorHash state: a circular buffer plus a total-byte counter
pub struct QuickXorHash {
    data: [u8; DATA_SIZE],
    size: u64,
}

/// XOR src into dst, returning the number of bytes combined
fn xor_bytes(dst: &mut [u8], src: &[u8]) -> usize {
    let n = dst.len().min(src.len());
    for (d, s) in dst[..n].iter_mut().zip(&src[..n]) {
        *d ^= *s;
    }
    n
}

impl QuickXorHash {
    /// Create a new hash with zeroed state
    pub fn new() -> Self {
        Self {
            data: [0; DATA_SIZE],
            size: 0,
        }
    }

    /// Absorb more data into the running hash
    ///
    /// Input is XORed into the circular buffer starting at the current
    /// write position (total bytes absorbed modulo the buffer length),
    /// wrapping as many times as the input requires. Output is independent
    /// of how the input is chunked; a zero-length slice is a no-op.
    pub fn update(&mut self, p: &[u8]) {
        let mut i = 0;

        // Fill the tail of the current lap first
        let last_remain = (self.size % DATA_SIZE as u64) as usize;
        if last_remain != 0 {
            i += xor_bytes(&mut self.data[last_remain..], p);
        }

        if i != p.len() {
            while p.len() - i >= DATA_SIZE {
                i += xor_bytes(&mut self.data, &p[i..]);
            }
            xor_bytes(&mut self.data, &p[i..]);
        }

        self.size += p.len() as u64;
    }

    /// Fold the buffer into the 20-byte digest
    ///
    /// Each buffer position i contributes its byte rotated left by
    /// (11 * i) mod 160 bits into a 21-byte scratch; byte 20 is folded back
    /// into byte 0, and the little-endian total length is XORed into the
    /// last 8 digest bytes. Does not mutate state.
    fn check_sum(&self) -> [u8; SIZE + 1] {
        let mut h = [0u8; SIZE + 1];

        for i in 0..DATA_SIZE {
            let shift = (i * SHIFT) % WIDTH_IN_BITS;
            let shift_bytes = shift / 8;
            let shift_bits = shift % 8;
            let shifted = (self.data[i] as u16) << shift_bits;
            h[shift_bytes] ^= shifted as u8;
            h[shift_bytes + 1] ^= (shifted >> 8) as u8;
        }
        h[0] ^= h[SIZE];

        let d = self.size;
        for (j, byte) in h[SIZE - 8..SIZE].iter_mut().enumerate() {
            *byte ^= (d >> (8 * j)) as u8;
        }

        h
    }

    /// Produce the 20-byte digest without disturbing the running state
    pub fn digest(&self) -> [u8; SIZE] {
        let h = self.check_sum();
        let mut out = [0u8; SIZE];
        out.copy_from_slice(&h[..SIZE]);
        out
    }

    /// Reset the hash to its initial state
    pub fn reset(&mut self) {
        self.data = [0; DATA_SIZE];
        self.size = 0;
    }
}

impl Default for QuickXorHash {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct QuickXorAlgorithm;

struct QuickXorStreamingHasher {
    hash: QuickXorHash,
}

impl StreamingHasher for QuickXorStreamingHasher {
    fn update(&mut self, data: &[u8]) {
        self.hash.update(data);
    }

    fn finalize(&self) -> Vec<u8> {
        self.hash.digest().to_vec()
    }
}

impl HashAlgorithmImpl for QuickXorAlgorithm {
    fn name(&self) -> &'static str {
        "quickxor"
    }

    fn output_size(&self) -> usize {
        SIZE
    }

    fn encoding(&self) -> DigestEncoding {
        // OneDrive publishes QuickXor digests as base64
        DigestEncoding::Base64
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(QuickXorStreamingHasher {
            hash: QuickXorHash::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_quickxor_reference_vectors() {
        let test_cases: Vec<(&[u8], &str)> = vec![
            (b"", "AAAAAAAAAAAAAAAAAAAAAAAAAAA="),
            (b"hello", "aCgDG9jwBgAAAAAABQAAAAAAAAA="),
            (b"hello world", "aCgDG9jwBhDc4Q1yawMZAAAAAAA="),
        ];

        for (input, expected) in test_cases {
            assert_eq!(
                QuickXorAlgorithm.hash_bytes(input),
                expected,
                "digest mismatch for {input:?}"
            );
        }
    }

    #[test]
    fn test_chunked_update_matches_oneshot() {
        let mut split = QuickXorHash::new();
        split.update(b"hello");
        split.update(b" world");

        let mut oneshot = QuickXorHash::new();
        oneshot.update(b"hello world");

        assert_eq!(split.digest(), oneshot.digest());
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut hash = QuickXorHash::new();
        hash.update(b"data");
        let before = hash.digest();
        hash.update(b"");
        assert_eq!(hash.digest(), before);
    }

    #[test]
    fn test_digest_is_idempotent() {
        let mut hash = QuickXorHash::new();
        hash.update(b"repeatable");
        assert_eq!(hash.digest(), hash.digest());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut hash = QuickXorHash::new();
        hash.update(b"some data");
        hash.reset();
        hash.update(b"hello");

        let mut fresh = QuickXorHash::new();
        fresh.update(b"hello");

        assert_eq!(hash.digest(), fresh.digest());
    }

    #[test]
    fn test_input_larger_than_buffer_wraps() {
        // 3 full laps plus a tail forces the multi-wrap path
        let data: Vec<u8> = (0..DATA_SIZE * 3 + 123).map(|i| i as u8).collect();

        let mut oneshot = QuickXorHash::new();
        oneshot.update(&data);

        let mut chunked = QuickXorHash::new();
        for chunk in data.chunks(997) {
            chunked.update(chunk);
        }

        assert_eq!(oneshot.digest(), chunked.digest());
    }

    #[test]
    fn test_length_affects_digest() {
        // Trailing zero bytes leave the buffer unchanged but not the counter
        let mut a = QuickXorHash::new();
        a.update(b"abc");
        let mut b = QuickXorHash::new();
        b.update(b"abc\0\0");

        assert_ne!(a.digest(), b.digest());
    }

    proptest! {
        #[test]
        fn test_chunk_boundaries_do_not_matter(
            data: Vec<u8>,
            split in 0usize..4096,
        ) {
            let split = split.min(data.len());

            let mut parts = QuickXorHash::new();
            parts.update(&data[..split]);
            parts.update(&data[split..]);

            let mut whole = QuickXorHash::new();
            whole.update(&data);

            prop_assert_eq!(parts.digest(), whole.digest());
        }
    }
}
