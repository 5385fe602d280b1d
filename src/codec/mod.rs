//! Base58Check text codec
//!
//! Per-network alphabets and the radix-58 conversion that, together with
//! a double-SHA-256 checksum, produces the transportable text form.

pub mod alphabet;
pub mod base58;

pub use alphabet::{alphabet_for, Alphabet, ALPHABET_LEN, BITCOIN, RIPPLE};
pub use base58::{base58_decode, base58_encode, decode_check, decode_unchecked, encode_check};
