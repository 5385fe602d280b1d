use data_encoding::HEXUPPER;
use num_bigint::BigUint;
use serde::{Serialize, Serializer};
use std::fmt;
use zeroize::Zeroize;

use super::registry::{HashKind, HashVersion, Network};
use crate::codec::{alphabet_for, encode_check};
use crate::error::Result;

pub const HEADER_LEN: usize = 2;

/// A network- and version-tagged payload.
///
/// Layout is `[network][version][payload..]`. Values are only built by the
/// constructors in this module, which check the pair against the registry,
/// so the header is always present and the network tag always valid.
/// Equality and ordering compare the raw buffer.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash(Vec<u8>);

impl Hash {
    pub(super) fn from_parts(network: Network, version: HashVersion, payload: &[u8]) -> Hash {
        let mut buf = Vec::with_capacity(HEADER_LEN + payload.len());
        buf.push(network.tag());
        buf.push(version.0);
        buf.extend_from_slice(payload);
        Hash(buf)
    }

    pub fn network(&self) -> Network {
        match Network::try_from(self.0[0]) {
            Ok(network) => network,
            Err(_) => unreachable!("hash built with unregistered network tag {}", self.0[0]),
        }
    }

    pub fn version(&self) -> HashVersion {
        HashVersion(self.0[1])
    }

    /// The registered kind, or `None` for values decoded in legacy mode
    /// with a version the registry does not know.
    pub fn kind(&self) -> Option<HashKind> {
        HashKind::from_parts(self.network(), self.version())
    }

    pub fn payload(&self) -> &[u8] {
        &self.0[HEADER_LEN..]
    }

    /// Payload with leading zero bytes removed. An all-zero payload keeps
    /// its final byte so the result is never empty unless the payload is.
    pub fn payload_trimmed(&self) -> &[u8] {
        let payload = self.payload();
        match payload.iter().position(|&b| b != 0) {
            Some(i) => &payload[i..],
            None => &payload[payload.len().saturating_sub(1)..],
        }
    }

    /// Payload read as a big-endian unsigned integer.
    pub fn value(&self) -> BigUint {
        BigUint::from_bytes_be(self.payload())
    }

    /// Base58Check text of `[version][payload]` in the network's alphabet.
    pub fn to_text(&self) -> Result<String> {
        encode_check(&self.0[1..], alphabet_for(self.network()))
    }

    /// The text form as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Uppercase hex of the payload.
    pub fn to_hex(&self) -> String {
        HEXUPPER.encode(self.payload())
    }

    /// The full `[network][version][payload]` buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for Hash {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_text().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "Hash({kind}:{})", self.to_hex()),
            None => write!(
                f,
                "Hash({}/{}:{})",
                self.network(),
                self.version(),
                self.to_hex()
            ),
        }
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let text = self.to_text().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}
