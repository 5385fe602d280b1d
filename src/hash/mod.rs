//! Tagged hash values
//!
//! A [`Hash`] is a payload tagged with its network and version. The
//! registry bounds payload sizes per pair, and the constructors here are
//! the only way to build one.

pub mod constructors;
#[allow(clippy::module_inception)]
pub mod hash;
pub mod registry;

pub use constructors::{
    account_from_public_key, account_one, account_zero, decode_text, generate_family_seed,
    generate_random_seed, new_bitcoin_address, new_hash, new_hash_from_text,
    new_hash_from_text_unchecked, new_hash_of_kind, new_litecoin_address, new_ripple_account,
    new_ripple_family_generator, new_ripple_family_seed, new_ripple_hash,
    new_ripple_private_account, new_ripple_private_node, new_ripple_public_account,
    new_ripple_public_node, ChecksumPolicy, SEED_LEN,
};
pub use hash::{Hash, HEADER_LEN};
pub use registry::{descriptors, lookup, HashKind, HashTypeDescriptor, HashVersion, Network};
