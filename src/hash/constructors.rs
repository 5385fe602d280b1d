//! Validated construction of [`Hash`] values.

use log::{debug, warn};
use serde::Serialize;
use std::str::FromStr;

use super::hash::{Hash, HEADER_LEN};
use super::registry::{lookup, HashKind, HashVersion, Network};
use crate::codec::{alphabet_for, decode_check, decode_unchecked};
use crate::error::{CryptoError, Result};
use crate::utils::{hash160, random_bytes, sha512_quarter};

pub const SEED_LEN: usize = 16;

/// How text decoding treats the trailing checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumPolicy {
    /// Verify the checksum and revalidate against the registry.
    #[default]
    Strict,
    /// Drop the checksum unverified and skip the registry, as older
    /// encoders did.
    Legacy,
}

impl FromStr for ChecksumPolicy {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(ChecksumPolicy::Strict),
            "legacy" => Ok(ChecksumPolicy::Legacy),
            _ => Err(CryptoError::Config(format!(
                "Invalid checksum policy: {s}. Valid options: strict, legacy"
            ))),
        }
    }
}

/// Literal inputs that name well-known accounts without any encoding.
const RESERVED_ACCOUNTS: [(&str, [u8; 20]); 2] = [
    ("0", [0; 20]),
    ("1", [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
];

/// Builds a hash after checking the payload against the registry.
pub fn new_hash(payload: &[u8], network: Network, version: HashVersion) -> Result<Hash> {
    let descriptor = lookup(network, version)?;
    if payload.len() > descriptor.max_payload {
        debug!(
            "Rejected {} payload of {} bytes",
            descriptor.kind,
            payload.len()
        );
        return Err(CryptoError::PayloadTooLarge {
            expected: descriptor.max_payload,
            actual: payload.len(),
        });
    }
    Ok(Hash::from_parts(network, version, payload))
}

pub fn new_hash_of_kind(payload: &[u8], kind: HashKind) -> Result<Hash> {
    new_hash(payload, kind.network(), kind.version())
}

/// Decodes Base58Check text for `network` with a verified checksum.
/// On Ripple the literals `"0"` and `"1"` map to the reserved accounts.
pub fn new_hash_from_text(text: &str, network: Network) -> Result<Hash> {
    decode_text(text, network, ChecksumPolicy::Strict)
}

/// Decodes text the way older encoders expected: the checksum is dropped
/// without verification and the version is not checked against the registry.
pub fn new_hash_from_text_unchecked(text: &str, network: Network) -> Result<Hash> {
    decode_text(text, network, ChecksumPolicy::Legacy)
}

pub fn decode_text(text: &str, network: Network, policy: ChecksumPolicy) -> Result<Hash> {
    if network == Network::Ripple {
        if let Some(hash) = reserved_account(text) {
            return Ok(hash);
        }
    }

    let alphabet = alphabet_for(network);
    match policy {
        ChecksumPolicy::Strict => {
            let body = decode_check(text, alphabet).map_err(|e| {
                debug!("Failed to decode {network} text: {e}");
                e
            })?;
            new_hash(&body[1..], network, HashVersion(body[0]))
        }
        ChecksumPolicy::Legacy => {
            warn!("Decoding {network} text without checksum verification");
            let body = decode_unchecked(text, alphabet)?;
            Ok(Hash::from_parts(network, HashVersion(body[0]), &body[1..]))
        }
    }
}

fn reserved_account(text: &str) -> Option<Hash> {
    RESERVED_ACCOUNTS
        .iter()
        .find(|(literal, _)| *literal == text)
        .map(|(_, payload)| {
            Hash::from_parts(Network::Ripple, HashVersion::RIPPLE_ACCOUNT_ID, payload)
        })
}

/// Reserved account id with value zero.
pub fn account_zero() -> Hash {
    Hash::from_parts(Network::Ripple, HashVersion::RIPPLE_ACCOUNT_ID, &[0; 20])
}

/// Reserved account id with value one.
pub fn account_one() -> Hash {
    Hash::from_parts(
        Network::Ripple,
        HashVersion::RIPPLE_ACCOUNT_ID,
        &RESERVED_ACCOUNTS[1].1,
    )
}

/// Decodes Ripple text, including the reserved `"0"` and `"1"` accounts.
pub fn new_ripple_hash(text: &str) -> Result<Hash> {
    new_hash_from_text(text, Network::Ripple)
}

pub fn new_ripple_account(b: &[u8]) -> Result<Hash> {
    new_hash_of_kind(b, HashKind::AccountId)
}

pub fn new_ripple_public_node(b: &[u8]) -> Result<Hash> {
    new_hash_of_kind(b, HashKind::NodePublic)
}

pub fn new_ripple_private_node(b: &[u8]) -> Result<Hash> {
    new_hash_of_kind(b, HashKind::NodePrivate)
}

pub fn new_ripple_public_account(b: &[u8]) -> Result<Hash> {
    new_hash_of_kind(b, HashKind::AccountPublic)
}

pub fn new_ripple_private_account(b: &[u8]) -> Result<Hash> {
    new_hash_of_kind(b, HashKind::AccountPrivate)
}

pub fn new_ripple_family_generator(b: &[u8]) -> Result<Hash> {
    new_hash_of_kind(b, HashKind::FamilyGenerator)
}

pub fn new_ripple_family_seed(b: &[u8]) -> Result<Hash> {
    new_hash_of_kind(b, HashKind::FamilySeed)
}

pub fn new_bitcoin_address(b: &[u8]) -> Result<Hash> {
    new_hash_of_kind(b, HashKind::BitcoinAddress)
}

pub fn new_litecoin_address(b: &[u8]) -> Result<Hash> {
    new_hash_of_kind(b, HashKind::LitecoinAddress)
}

/// Family seed from the first quarter of SHA-512 over the password.
///
/// Deterministic and unsalted: a convenience for reproducible test
/// accounts, not a password hardening scheme.
pub fn generate_family_seed(password: &str) -> Result<Hash> {
    let seed = sha512_quarter(password.as_bytes())?;
    new_ripple_family_seed(&seed)
}

/// Family seed from system entropy.
pub fn generate_random_seed() -> Result<Hash> {
    let seed: [u8; SEED_LEN] = random_bytes()?;
    new_ripple_family_seed(&seed)
}

/// Account id for a public key: RIPEMD-160 of SHA-256 of its payload.
pub fn account_from_public_key(public: &Hash) -> Result<Hash> {
    match public.kind() {
        Some(HashKind::AccountPublic) | Some(HashKind::NodePublic) => {}
        Some(kind) => {
            return Err(CryptoError::UnexpectedKind {
                expected: "a public key",
                found: kind.to_string(),
            })
        }
        None => {
            return Err(CryptoError::UnexpectedKind {
                expected: "a public key",
                found: format!("{}/{}", public.network(), public.version()),
            })
        }
    }
    new_ripple_account(&hash160(public.payload())?)
}

impl FromStr for Hash {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        new_ripple_hash(s)
    }
}
