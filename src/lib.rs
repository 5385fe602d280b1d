//! # Ripple Crypto - Versioned, Checksummed Hash Encoding
//!
//! Opaque payloads (account ids, public and private keys, seeds) carried as
//! `[network][version][payload]` buffers and converted to and from
//! Base58Check text with a per-network alphabet.
//!
//! ## How the code is organized
//! - `utils/`: SHA-256, SHA-512 and RIPEMD-160 digests, checksums, entropy
//! - `codec/`: alphabets and the radix-58 codec with checksum envelope
//! - `hash/`: the registry of hash types, the `Hash` value and its constructors
//! - `config/`: defaults for the command line tool
//! - `cli/`: argument parsing and output for the `hashtool` binary
//! - `error/`: the crate error type
//!
//! Decoding verifies checksums by default. `ChecksumPolicy::Legacy` keeps the
//! old behavior of dropping the checksum unverified, for values written by
//! encoders that are not trusted to have produced one.

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod hash;
pub mod utils;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use codec::{base58_decode, base58_encode, decode_check, encode_check, Alphabet};
pub use config::{Config, GLOBAL_CONFIG};
pub use error::{CryptoError, Result};
pub use hash::{
    account_one, account_zero, generate_family_seed, new_hash, new_hash_from_text,
    new_ripple_hash, ChecksumPolicy, Hash, HashKind, HashTypeDescriptor, HashVersion, Network,
};
pub use utils::{double_sha256, hash160, sha512_half, sha512_quarter};
