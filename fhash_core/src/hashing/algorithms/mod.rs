//! Hash algorithm implementations

use super::registry::AlgorithmRegistry;

mod blake3;
mod crc32;
mod md5;
pub mod quickxor;
mod sha1;
mod sha2;
mod xxh3;

/// Register all built-in algorithms with the registry
pub(crate) fn register_all(registry: &mut AlgorithmRegistry) {
    registry.register(md5::Md5Algorithm);
    registry.register(sha1::Sha1Algorithm);
    registry.register(sha2::Sha256Algorithm);
    registry.register(sha2::Sha512Algorithm);
    registry.register(crc32::Crc32Algorithm);
    registry.register(blake3::Blake3Algorithm);
    registry.register(xxh3::Xxh3Algorithm);
    registry.register(xxh3::Xxh128Algorithm);
    registry.register(quickxor::QuickXorAlgorithm);
}
