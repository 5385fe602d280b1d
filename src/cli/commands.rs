use clap::{Parser, Subcommand};

use crate::hash::{HashKind, Network};

#[derive(Debug, Parser)]
#[command(name = "hashtool", about = "Encode and decode Base58Check hashes")]
pub struct Opt {
    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "encode", about = "Encode a hex payload as text")]
    Encode {
        #[arg(help = "Hash kind, e.g. account-id, family-seed, bitcoin-address")]
        kind: HashKind,
        #[arg(help = "Payload as hex")]
        payload: String,
    },
    #[command(name = "decode", about = "Decode text into its network, version and payload")]
    Decode {
        #[arg(help = "Base58Check text, or 0/1 for the reserved accounts")]
        text: String,
        #[arg(long, help = "Network whose alphabet to use (ripple, bitcoin, litecoin)")]
        network: Option<Network>,
        #[arg(long, help = "Drop the checksum without verifying it")]
        legacy: bool,
    },
    #[command(name = "seed", about = "Derive a family seed from a password")]
    Seed {
        #[arg(help = "The password")]
        password: String,
    },
    #[command(name = "random-seed", about = "Generate a family seed from system entropy")]
    RandomSeed,
    #[command(name = "account", about = "Derive the account id of a public key")]
    Account {
        #[arg(help = "33-byte public key as hex, or its Base58Check text")]
        public_key: String,
    },
    #[command(name = "registry", about = "List the registered hash types")]
    Registry,
}
