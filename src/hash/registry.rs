use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{CryptoError, Result};

/// Target system whose alphabet and version numbering apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Ripple = 0,
    Bitcoin = 1,
    Litecoin = 2,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Ripple, Network::Bitcoin, Network::Litecoin];

    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Network {
    type Error = CryptoError;

    fn try_from(tag: u8) -> Result<Self> {
        Network::ALL
            .into_iter()
            .find(|n| n.tag() == tag)
            .ok_or_else(|| CryptoError::UnknownNetwork(tag.to_string()))
    }
}

impl FromStr for Network {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ripple" | "xrp" => Ok(Network::Ripple),
            "bitcoin" | "btc" => Ok(Network::Bitcoin),
            "litecoin" | "ltc" => Ok(Network::Litecoin),
            _ => Err(CryptoError::UnknownNetwork(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Network::Ripple => "ripple",
            Network::Bitcoin => "bitcoin",
            Network::Litecoin => "litecoin",
        })
    }
}

/// Payload kind within a network. Values overlap between networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HashVersion(pub u8);

impl HashVersion {
    pub const RIPPLE_ACCOUNT_ID: HashVersion = HashVersion(0);
    pub const RIPPLE_NODE_PUBLIC: HashVersion = HashVersion(28);
    pub const RIPPLE_NODE_PRIVATE: HashVersion = HashVersion(32);
    pub const RIPPLE_FAMILY_SEED: HashVersion = HashVersion(33);
    pub const RIPPLE_ACCOUNT_PRIVATE: HashVersion = HashVersion(34);
    pub const RIPPLE_ACCOUNT_PUBLIC: HashVersion = HashVersion(35);
    pub const RIPPLE_FAMILY_GENERATOR: HashVersion = HashVersion(41);
    pub const BITCOIN_ADDRESS: HashVersion = HashVersion(0);
    pub const LITECOIN_ADDRESS: HashVersion = HashVersion(48);
}

impl fmt::Display for HashVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Every registered (network, version) pair, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashKind {
    AccountId,
    NodePublic,
    NodePrivate,
    FamilySeed,
    AccountPrivate,
    AccountPublic,
    FamilyGenerator,
    BitcoinAddress,
    LitecoinAddress,
}

impl HashKind {
    pub const ALL: [HashKind; 9] = [
        HashKind::AccountId,
        HashKind::NodePublic,
        HashKind::NodePrivate,
        HashKind::FamilySeed,
        HashKind::AccountPrivate,
        HashKind::AccountPublic,
        HashKind::FamilyGenerator,
        HashKind::BitcoinAddress,
        HashKind::LitecoinAddress,
    ];

    pub fn network(self) -> Network {
        match self {
            HashKind::BitcoinAddress => Network::Bitcoin,
            HashKind::LitecoinAddress => Network::Litecoin,
            _ => Network::Ripple,
        }
    }

    pub fn version(self) -> HashVersion {
        match self {
            HashKind::AccountId => HashVersion::RIPPLE_ACCOUNT_ID,
            HashKind::NodePublic => HashVersion::RIPPLE_NODE_PUBLIC,
            HashKind::NodePrivate => HashVersion::RIPPLE_NODE_PRIVATE,
            HashKind::FamilySeed => HashVersion::RIPPLE_FAMILY_SEED,
            HashKind::AccountPrivate => HashVersion::RIPPLE_ACCOUNT_PRIVATE,
            HashKind::AccountPublic => HashVersion::RIPPLE_ACCOUNT_PUBLIC,
            HashKind::FamilyGenerator => HashVersion::RIPPLE_FAMILY_GENERATOR,
            HashKind::BitcoinAddress => HashVersion::BITCOIN_ADDRESS,
            HashKind::LitecoinAddress => HashVersion::LITECOIN_ADDRESS,
        }
    }

    pub fn descriptor(self) -> &'static HashTypeDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Reverse lookup from a raw pair.
    pub fn from_parts(network: Network, version: HashVersion) -> Option<HashKind> {
        HashKind::ALL
            .into_iter()
            .find(|k| k.network() == network && k.version() == version)
    }

    fn name(self) -> &'static str {
        match self {
            HashKind::AccountId => "account-id",
            HashKind::NodePublic => "node-public",
            HashKind::NodePrivate => "node-private",
            HashKind::FamilySeed => "family-seed",
            HashKind::AccountPrivate => "account-private",
            HashKind::AccountPublic => "account-public",
            HashKind::FamilyGenerator => "family-generator",
            HashKind::BitcoinAddress => "bitcoin-address",
            HashKind::LitecoinAddress => "litecoin-address",
        }
    }
}

impl FromStr for HashKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.to_lowercase().replace('_', "-");
        HashKind::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = HashKind::ALL.iter().map(|k| k.name()).collect();
                format!("Invalid hash kind: {s}. Valid options: {}", names.join(", "))
            })
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Registry entry for one (network, version) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashTypeDescriptor {
    pub kind: HashKind,
    pub description: &'static str,
    /// Leading text symbol of a full-size value.
    pub prefix: char,
    /// Upper bound on the payload; shorter payloads are accepted.
    pub max_payload: usize,
    /// Text length of a full-size payload whose first byte is nonzero.
    pub text_len: usize,
}

// Indexed by `HashKind as usize`.
static DESCRIPTORS: [HashTypeDescriptor; 9] = [
    HashTypeDescriptor {
        kind: HashKind::AccountId,
        description: "Short name for sending funds to an account.",
        prefix: 'r',
        max_payload: 20,
        text_len: 34,
    },
    HashTypeDescriptor {
        kind: HashKind::NodePublic,
        description: "Validation public key for node.",
        prefix: 'n',
        max_payload: 33,
        text_len: 52,
    },
    HashTypeDescriptor {
        kind: HashKind::NodePrivate,
        description: "Validation private key for node.",
        prefix: 'p',
        max_payload: 32,
        text_len: 51,
    },
    HashTypeDescriptor {
        kind: HashKind::FamilySeed,
        description: "Family seed.",
        prefix: 's',
        max_payload: 16,
        text_len: 29,
    },
    HashTypeDescriptor {
        kind: HashKind::AccountPrivate,
        description: "Account private key.",
        prefix: 'p',
        max_payload: 32,
        text_len: 51,
    },
    HashTypeDescriptor {
        kind: HashKind::AccountPublic,
        description: "Account public key.",
        prefix: 'a',
        max_payload: 33,
        text_len: 52,
    },
    HashTypeDescriptor {
        kind: HashKind::FamilyGenerator,
        description: "Family public generator.",
        prefix: 'f',
        max_payload: 33,
        text_len: 52,
    },
    HashTypeDescriptor {
        kind: HashKind::BitcoinAddress,
        description: "Bitcoin pay-to-pubkey-hash address.",
        prefix: '1',
        max_payload: 20,
        text_len: 34,
    },
    HashTypeDescriptor {
        kind: HashKind::LitecoinAddress,
        description: "Litecoin pay-to-pubkey-hash address.",
        prefix: 'L',
        max_payload: 20,
        text_len: 34,
    },
];

static REGISTRY: Lazy<HashMap<(Network, HashVersion), &'static HashTypeDescriptor>> =
    Lazy::new(|| {
        DESCRIPTORS
            .iter()
            .map(|d| ((d.kind.network(), d.kind.version()), d))
            .collect()
    });

/// Registry entry for the pair, if one exists.
pub fn lookup(network: Network, version: HashVersion) -> Result<&'static HashTypeDescriptor> {
    REGISTRY
        .get(&(network, version))
        .copied()
        .ok_or(CryptoError::UnknownHashType {
            network: network.tag(),
            version: version.0,
        })
}

pub fn descriptors() -> &'static [HashTypeDescriptor] {
    &DESCRIPTORS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_matches_kind_order() {
        for kind in HashKind::ALL {
            assert_eq!(kind.descriptor().kind, kind);
        }
    }

    #[test]
    fn test_lookup_registered_pairs() {
        let d = lookup(Network::Ripple, HashVersion::RIPPLE_ACCOUNT_ID).unwrap();
        assert_eq!(d.max_payload, 20);
        let d = lookup(Network::Ripple, HashVersion::RIPPLE_FAMILY_SEED).unwrap();
        assert_eq!(d.max_payload, 16);
        let d = lookup(Network::Litecoin, HashVersion::LITECOIN_ADDRESS).unwrap();
        assert_eq!(d.kind, HashKind::LitecoinAddress);
    }

    #[test]
    fn test_versions_are_scoped_by_network() {
        // Version 0 is an account id on Ripple and an address on Bitcoin
        let ripple = lookup(Network::Ripple, HashVersion(0)).unwrap();
        let bitcoin = lookup(Network::Bitcoin, HashVersion(0)).unwrap();
        assert_eq!(ripple.kind, HashKind::AccountId);
        assert_eq!(bitcoin.kind, HashKind::BitcoinAddress);

        assert_eq!(
            lookup(Network::Litecoin, HashVersion(0)).unwrap_err(),
            CryptoError::UnknownHashType {
                network: 2,
                version: 0
            }
        );
    }

    #[test]
    fn test_kind_round_trips_through_parts_and_names() {
        for kind in HashKind::ALL {
            assert_eq!(HashKind::from_parts(kind.network(), kind.version()), Some(kind));
            assert_eq!(kind.to_string().parse::<HashKind>().unwrap(), kind);
        }
        assert_eq!(
            "FAMILY_SEED".parse::<HashKind>().unwrap(),
            HashKind::FamilySeed
        );
        assert!("wallet".parse::<HashKind>().is_err());
    }

    #[test]
    fn test_network_parsing() {
        assert_eq!("Ripple".parse::<Network>().unwrap(), Network::Ripple);
        assert_eq!("btc".parse::<Network>().unwrap(), Network::Bitcoin);
        assert_eq!(Network::try_from(2).unwrap(), Network::Litecoin);
        assert!(Network::try_from(3).is_err());
        assert!("dogecoin".parse::<Network>().is_err());
    }
}
