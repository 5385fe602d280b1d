use log::warn;
use once_cell::sync::Lazy;
use std::env;
use std::sync::{PoisonError, RwLock};

use crate::hash::{ChecksumPolicy, Network};

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

const NETWORK_KEY: &str = "HASH_NETWORK";
const CHECKSUM_KEY: &str = "HASH_CHECKSUM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Settings {
    network: Network,
    checksum: ChecksumPolicy,
}

/// Defaults for the command line tool. Library calls always take an
/// explicit network and policy.
pub struct Config {
    inner: RwLock<Settings>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Reads `HASH_NETWORK` and `HASH_CHECKSUM`, falling back to the
    /// defaults when a variable is unset or malformed.
    pub fn new() -> Config {
        Config::from_env_values(env::var(NETWORK_KEY).ok(), env::var(CHECKSUM_KEY).ok())
    }

    fn from_env_values(network: Option<String>, checksum: Option<String>) -> Config {
        let mut settings = Settings::default();
        if let Some(value) = network {
            match value.parse() {
                Ok(network) => settings.network = network,
                Err(e) => warn!("Ignoring {NETWORK_KEY}: {e}"),
            }
        }
        if let Some(value) = checksum {
            match value.parse() {
                Ok(policy) => settings.checksum = policy,
                Err(e) => warn!("Ignoring {CHECKSUM_KEY}: {e}"),
            }
        }
        Config {
            inner: RwLock::new(settings),
        }
    }

    fn read(&self) -> Settings {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_network(&self) -> Network {
        self.read().network
    }

    pub fn set_network(&self, network: Network) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .network = network;
    }

    pub fn get_checksum_policy(&self) -> ChecksumPolicy {
        self.read().checksum
    }

    pub fn set_checksum_policy(&self, policy: ChecksumPolicy) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .checksum = policy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(network: Option<&str>, checksum: Option<&str>) -> Config {
        Config::from_env_values(network.map(String::from), checksum.map(String::from))
    }

    #[test]
    fn test_unset_variables_use_defaults() {
        let config = config_from(None, None);
        assert_eq!(config.get_network(), Network::Ripple);
        assert_eq!(config.get_checksum_policy(), ChecksumPolicy::Strict);
    }

    #[test]
    fn test_valid_variables_are_applied() {
        let config = config_from(Some("litecoin"), Some("LEGACY"));
        assert_eq!(config.get_network(), Network::Litecoin);
        assert_eq!(config.get_checksum_policy(), ChecksumPolicy::Legacy);
    }

    #[test]
    fn test_malformed_variables_fall_back() {
        let config = config_from(Some("dogecoin"), Some("lenient"));
        assert_eq!(config.get_network(), Network::Ripple);
        assert_eq!(config.get_checksum_policy(), ChecksumPolicy::Strict);

        // One bad variable does not discard the other
        let config = config_from(Some("btc"), Some("lenient"));
        assert_eq!(config.get_network(), Network::Bitcoin);
        assert_eq!(config.get_checksum_policy(), ChecksumPolicy::Strict);
    }

    #[test]
    fn test_setters_override() {
        let config = config_from(None, None);
        config.set_network(Network::Bitcoin);
        config.set_checksum_policy(ChecksumPolicy::Legacy);
        assert_eq!(config.get_network(), Network::Bitcoin);
        assert_eq!(config.get_checksum_policy(), ChecksumPolicy::Legacy);
    }
}
