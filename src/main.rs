// Command line entry point for encoding, decoding and deriving hashes
use clap::Parser;
use data_encoding::HEXLOWER_PERMISSIVE;
use log::{error, info, LevelFilter};
use ripple_crypto::cli::HashReport;
use ripple_crypto::hash::{
    account_from_public_key, decode_text, descriptors, generate_family_seed,
    generate_random_seed, new_hash_of_kind, new_ripple_public_account, ChecksumPolicy, Hash,
};
use ripple_crypto::{Command, Opt, GLOBAL_CONFIG};
use std::process;

fn main() {
    // Info level by default so decode warnings and seed notices are visible,
    // RUST_LOG still overrides it
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    // Parse the command line, clap reports usage errors itself
    let opt = Opt::parse();

    // Any failure is logged as a readable message and exits with code 1
    if let Err(e) = run_command(opt.command, opt.json) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// Each command maps onto one library operation and prints the resulting hash
fn run_command(command: Command, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // Wrap a raw hex payload with the kind's network and version
        Command::Encode { kind, payload } => {
            // Accept both upper and lower case hex
            let bytes = HEXLOWER_PERMISSIVE.decode(payload.as_bytes())?;
            let hash = new_hash_of_kind(&bytes, kind)?;
            print_hash(&hash, json)?;
        }
        // Turn text back into network, version and payload
        Command::Decode {
            text,
            network,
            legacy,
        } => {
            // Flags win over HASH_NETWORK and HASH_CHECKSUM
            if let Some(network) = network {
                GLOBAL_CONFIG.set_network(network);
            }
            if legacy {
                GLOBAL_CONFIG.set_checksum_policy(ChecksumPolicy::Legacy);
            }
            // "0" and "1" resolve to the reserved accounts on Ripple
            let hash = decode_text(
                &text,
                GLOBAL_CONFIG.get_network(),
                GLOBAL_CONFIG.get_checksum_policy(),
            )?;
            print_hash(&hash, json)?;
        }
        // Same password always yields the same seed, no salt involved
        Command::Seed { password } => {
            let seed = generate_family_seed(&password)?;
            print_hash(&seed, json)?;
        }
        // Fresh seed from the system RNG
        Command::RandomSeed => {
            let seed = generate_random_seed()?;
            info!("Generated a random family seed, keep it secret");
            print_hash(&seed, json)?;
        }
        // Account id is RIPEMD-160 of SHA-256 of the public key
        Command::Account { public_key } => {
            // Hex is read as an account public key, anything else as Ripple text
            let public = match HEXLOWER_PERMISSIVE.decode(public_key.as_bytes()) {
                Ok(bytes) => new_ripple_public_account(&bytes)?,
                Err(_) => public_key.parse::<Hash>()?,
            };
            let account = account_from_public_key(&public)?;
            print_hash(&account, json)?;
        }
        // Show every registered network and version pair
        Command::Registry => {
            if json {
                println!("{}", serde_json::to_string_pretty(descriptors())?);
            } else {
                // kind, network, version, max payload, prefix, text length, description
                for d in descriptors() {
                    println!(
                        "{:<17} {:<8} v{:<3} {:>2} bytes  '{}' x{}  {}",
                        d.kind,
                        d.kind.network(),
                        d.kind.version(),
                        d.max_payload,
                        d.prefix,
                        d.text_len,
                        d.description
                    );
                }
            }
        }
    }
    Ok(())
}

// Renders a hash as aligned text or pretty JSON
fn print_hash(hash: &Hash, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", HashReport::new(hash)?.render(json)?);
    Ok(())
}
