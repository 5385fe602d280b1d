//! Command-line interface
//!
//! Argument parsing and output formatting for the `hashtool` binary.

pub mod commands;
pub mod report;

pub use commands::{Command, Opt};
pub use report::HashReport;
