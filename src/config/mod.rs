//! Configuration management
//!
//! Default network and checksum policy for the command line tool, seeded
//! from the environment and overridable by flags.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG};
