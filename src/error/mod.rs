//! Error handling for hash construction and text decoding
//!
//! Every constructor and decoder in the crate reports failures through
//! [`CryptoError`]. Digest and entropy failures are internal faults that
//! callers are not expected to retry.

use std::fmt;

/// Result type alias for hash operations
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Error kinds produced while building, decoding or rendering hashes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// No registry entry for the (network, version) pair
    UnknownHashType { network: u8, version: u8 },
    /// Payload longer than the registered maximum
    PayloadTooLarge { expected: usize, actual: usize },
    /// Symbol outside the alphabet used for decoding
    InvalidCharacter { character: char, position: usize },
    /// Trailing checksum does not match the recomputed digest
    ChecksumMismatch { expected: [u8; 4], actual: [u8; 4] },
    /// A hash of the wrong kind for the operation
    UnexpectedKind { expected: &'static str, found: String },
    /// Decoded text too short to hold a version byte and checksum
    InvalidLength(usize),
    /// Underlying digest computation failed
    DigestFailure(String),
    /// System random number generator failed
    Entropy(String),
    /// Network tag or name that is not registered
    UnknownNetwork(String),
    /// Configuration errors
    Config(String),
    /// Serialization errors
    Serialization(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::UnknownHashType { network, version } => {
                write!(f, "Unknown hash type: network {network}, version {version}")
            }
            CryptoError::PayloadTooLarge { expected, actual } => {
                write!(
                    f,
                    "Hash is wrong size, expected at most {expected} bytes, got {actual}"
                )
            }
            CryptoError::InvalidCharacter {
                character,
                position,
            } => write!(f, "Invalid character '{character}' at position {position}"),
            CryptoError::ChecksumMismatch { expected, actual } => write!(
                f,
                "Checksum mismatch: expected {}, got {}",
                data_encoding::HEXUPPER.encode(expected),
                data_encoding::HEXUPPER.encode(actual)
            ),
            CryptoError::UnexpectedKind { expected, found } => {
                write!(f, "Expected {expected}, got {found}")
            }
            CryptoError::InvalidLength(len) => {
                write!(f, "Decoded value too short: {len} bytes")
            }
            CryptoError::DigestFailure(msg) => write!(f, "Digest failure: {msg}"),
            CryptoError::Entropy(msg) => write!(f, "Entropy error: {msg}"),
            CryptoError::UnknownNetwork(name) => write!(f, "Unknown network: {name}"),
            CryptoError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CryptoError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for CryptoError {}

impl From<serde_json::Error> for CryptoError {
    fn from(err: serde_json::Error) -> Self {
        CryptoError::Serialization(err.to_string())
    }
}

impl From<data_encoding::DecodeError> for CryptoError {
    fn from(err: data_encoding::DecodeError) -> Self {
        CryptoError::Serialization(format!("Invalid hex: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CryptoError::PayloadTooLarge {
            expected: 20,
            actual: 21,
        };
        assert_eq!(
            err.to_string(),
            "Hash is wrong size, expected at most 20 bytes, got 21"
        );

        let err = CryptoError::InvalidCharacter {
            character: '0',
            position: 3,
        };
        assert_eq!(err.to_string(), "Invalid character '0' at position 3");

        let err = CryptoError::ChecksumMismatch {
            expected: [0xDE, 0xAD, 0xBE, 0xEF],
            actual: [0, 0, 0, 1],
        };
        assert_eq!(
            err.to_string(),
            "Checksum mismatch: expected DEADBEEF, got 00000001"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("not json").unwrap_err();
        let err: CryptoError = json_err.into();
        assert!(matches!(err, CryptoError::Serialization(_)));
    }
}
