use ring::digest::{Context, SHA256, SHA512};
use ring::rand::{SecureRandom, SystemRandom};
use ripemd::{Digest as RipemdDigest, Ripemd160};

use crate::error::{CryptoError, Result};

pub const CHECKSUM_LEN: usize = 4;

fn fixed<const N: usize>(digest: &[u8], name: &str) -> Result<[u8; N]> {
    digest.get(..N).and_then(|d| d.try_into().ok()).ok_or_else(|| {
        CryptoError::DigestFailure(format!(
            "{name} produced {} bytes, need {N}",
            digest.len()
        ))
    })
}

pub fn sha256_digest(data: &[u8]) -> Result<[u8; 32]> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    fixed(digest.as_ref(), "SHA-256")
}

pub fn sha512_digest(data: &[u8]) -> Result<[u8; 64]> {
    let mut context = Context::new(&SHA512);
    context.update(data);
    let digest = context.finish();
    fixed(digest.as_ref(), "SHA-512")
}

pub fn ripemd160_digest(data: &[u8]) -> Result<[u8; 20]> {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    fixed(hasher.finalize().as_slice(), "RIPEMD-160")
}

/// SHA-256 applied twice; source of the text-form checksum.
pub fn double_sha256(data: &[u8]) -> Result<[u8; 32]> {
    sha256_digest(&sha256_digest(data)?)
}

/// First quarter of SHA-512, used to derive family seeds from passwords.
pub fn sha512_quarter(data: &[u8]) -> Result<[u8; 16]> {
    fixed(&sha512_digest(data)?, "SHA-512/4")
}

/// First half of SHA-512, the ledger's general object hash.
pub fn sha512_half(data: &[u8]) -> Result<[u8; 32]> {
    fixed(&sha512_digest(data)?, "SHA-512/2")
}

/// RIPEMD-160 of SHA-256, which turns a public key into an account id.
pub fn hash160(data: &[u8]) -> Result<[u8; 20]> {
    ripemd160_digest(&sha256_digest(data)?)
}

pub fn checksum(data: &[u8]) -> Result<[u8; CHECKSUM_LEN]> {
    fixed(&double_sha256(data)?, "checksum")
}

pub fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let rng = SystemRandom::new();
    let mut buf = [0u8; N];
    rng.fill(&mut buf)
        .map_err(|e| CryptoError::Entropy(format!("System RNG failed: {e}")))?;
    Ok(buf)
}
