//! Digest primitives and entropy helpers
//!
//! Thin wrappers over `ring` and `ripemd` that return fixed-width arrays.

pub mod crypto;

pub use crypto::{
    checksum, double_sha256, hash160, random_bytes, ripemd160_digest, sha256_digest,
    sha512_digest, sha512_half, sha512_quarter, CHECKSUM_LEN,
};
