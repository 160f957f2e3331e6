// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod parsers;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::args::Args;
use crate::config::Config;
use crate::error::Result;

/// Convert arguments, scan the file and print the report to stdout.
///
/// # Errors
///
/// Fails on invalid checkpoints, unreadable or undecodable input, and
/// failures writing to stdout.
pub fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    log::info!(
        "scanning {} with {} checkpoint(s)",
        config.path.display(),
        config.checkpoints.len()
    );

    let report = balance_probe_engine::run(&config)?;
    presentation::print_report(&report)?;
    Ok(())
}
