//! Radix-58 big-number conversion and the checksummed text envelope.
//!
//! Leading zero bytes have no weight in the integer, so each one is carried
//! as a leading zero symbol instead.

use num_bigint::BigUint;

use super::alphabet::{Alphabet, ALPHABET_LEN};
use crate::error::{CryptoError, Result};
use crate::utils::{checksum, CHECKSUM_LEN};

const RADIX: u32 = ALPHABET_LEN as u32;

pub fn base58_encode(data: &[u8], alphabet: &Alphabet) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let value = BigUint::from_bytes_be(&data[zeros..]);

    let mut encoded = String::with_capacity(data.len() * 138 / 100 + 1);
    encoded.extend(std::iter::repeat(alphabet.zero()).take(zeros));
    if zeros < data.len() {
        // to_radix_be divides by 58 repeatedly and returns the most significant digit first
        encoded.extend(value.to_radix_be(RADIX).into_iter().map(|d| alphabet.symbol(d)));
    }
    encoded
}

pub fn base58_decode(text: &str, alphabet: &Alphabet) -> Result<Vec<u8>> {
    let digits = text
        .chars()
        .enumerate()
        .map(|(position, character)| {
            alphabet
                .digit(character)
                .ok_or(CryptoError::InvalidCharacter {
                    character,
                    position,
                })
        })
        .collect::<Result<Vec<u8>>>()?;

    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    let mut decoded = vec![0u8; zeros];
    if zeros < digits.len() {
        let value = BigUint::from_radix_be(&digits[zeros..], RADIX).ok_or_else(|| {
            CryptoError::Serialization("radix-58 digits out of range".to_string())
        })?;
        decoded.extend(value.to_bytes_be());
    }
    Ok(decoded)
}

/// Encodes `data` followed by its 4-byte double-SHA-256 checksum.
pub fn encode_check(data: &[u8], alphabet: &Alphabet) -> Result<String> {
    let mut buf = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    buf.extend_from_slice(data);
    buf.extend_from_slice(&checksum(data)?);
    Ok(base58_encode(&buf, alphabet))
}

/// Decodes checksummed text and returns the body with the checksum verified
/// and removed.
pub fn decode_check(text: &str, alphabet: &Alphabet) -> Result<Vec<u8>> {
    let mut decoded = split_checksum(text, alphabet)?;
    let split = decoded.len() - CHECKSUM_LEN;
    let actual: [u8; CHECKSUM_LEN] = [
        decoded[split],
        decoded[split + 1],
        decoded[split + 2],
        decoded[split + 3],
    ];
    decoded.truncate(split);
    let expected = checksum(&decoded)?;
    if expected != actual {
        return Err(CryptoError::ChecksumMismatch { expected, actual });
    }
    Ok(decoded)
}

/// Decodes checksummed text and drops the checksum without verifying it.
/// Only for compatibility with values written by encoders that never
/// produced a valid checksum.
pub fn decode_unchecked(text: &str, alphabet: &Alphabet) -> Result<Vec<u8>> {
    let mut decoded = split_checksum(text, alphabet)?;
    decoded.truncate(decoded.len() - CHECKSUM_LEN);
    Ok(decoded)
}

// A body needs at least a version byte ahead of the checksum.
fn split_checksum(text: &str, alphabet: &Alphabet) -> Result<Vec<u8>> {
    let decoded = base58_decode(text, alphabet)?;
    if decoded.len() <= CHECKSUM_LEN {
        return Err(CryptoError::InvalidLength(decoded.len()));
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::alphabet::{BITCOIN, RIPPLE};
    use rand::Rng;

    #[test]
    fn test_encode_empty_and_zeros() {
        assert_eq!(base58_encode(&[], &BITCOIN), "");
        assert_eq!(base58_encode(&[0], &BITCOIN), "1");
        assert_eq!(base58_encode(&[0, 0, 0], &RIPPLE), "rrr");
        assert_eq!(base58_decode("", &BITCOIN).unwrap(), Vec::<u8>::new());
        assert_eq!(base58_decode("rrr", &RIPPLE).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_encode_known_values() {
        assert_eq!(base58_encode(&[57], &BITCOIN), "z");
        assert_eq!(base58_encode(&[58], &BITCOIN), "21");
        assert_eq!(base58_encode(b"hello world", &BITCOIN), "StV1DL6CwTryKyV");
        assert_eq!(base58_encode(&[0, 0, 1], &BITCOIN), "112");
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(base58_decode("21", &BITCOIN).unwrap(), vec![58]);
        assert_eq!(
            base58_decode("StV1DL6CwTryKyV", &BITCOIN).unwrap(),
            b"hello world".to_vec()
        );
        assert_eq!(base58_decode("112", &BITCOIN).unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_decode_rejects_foreign_characters() {
        let err = base58_decode("abc0def", &BITCOIN).unwrap_err();
        assert_eq!(
            err,
            CryptoError::InvalidCharacter {
                character: '0',
                position: 3
            }
        );
        assert!(matches!(
            base58_decode("rpsh l", &RIPPLE),
            Err(CryptoError::InvalidCharacter { character: ' ', .. })
        ));
    }

    #[test]
    fn test_random_round_trip_matches_bs58() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let len = rng.gen_range(0..48);
            let mut data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let leading = rng.gen_range(0..4).min(data.len());
            data[..leading].iter_mut().for_each(|b| *b = 0);

            let ours = base58_encode(&data, &RIPPLE);
            let theirs = bs58::encode(&data)
                .with_alphabet(bs58::Alphabet::RIPPLE)
                .into_string();
            assert_eq!(ours, theirs);
            assert_eq!(base58_decode(&ours, &RIPPLE).unwrap(), data);

            let ours = base58_encode(&data, &BITCOIN);
            assert_eq!(ours, bs58::encode(&data).into_string());
            assert_eq!(base58_decode(&ours, &BITCOIN).unwrap(), data);
        }
    }

    #[test]
    fn test_check_round_trip() {
        let body = [0u8, 0xAB, 0xCD, 0x00, 0x01];
        let text = encode_check(&body, &RIPPLE).unwrap();
        assert_eq!(decode_check(&text, &RIPPLE).unwrap(), body);
        assert_eq!(decode_unchecked(&text, &RIPPLE).unwrap(), body);
    }

    #[test]
    fn test_decode_check_detects_corruption() {
        let body = [0u8; 21];
        let mut raw = body.to_vec();
        raw.extend_from_slice(&[1, 2, 3, 4]);
        let text = base58_encode(&raw, &RIPPLE);

        assert!(matches!(
            decode_check(&text, &RIPPLE),
            Err(CryptoError::ChecksumMismatch {
                actual: [1, 2, 3, 4],
                ..
            })
        ));
        assert_eq!(decode_unchecked(&text, &RIPPLE).unwrap(), body);
    }

    #[test]
    fn test_decode_check_rejects_short_input() {
        assert_eq!(
            decode_check("", &RIPPLE).unwrap_err(),
            CryptoError::InvalidLength(0)
        );
        let four = base58_encode(&[9, 9, 9, 9], &RIPPLE);
        assert_eq!(
            decode_unchecked(&four, &RIPPLE).unwrap_err(),
            CryptoError::InvalidLength(4)
        );
    }
}
