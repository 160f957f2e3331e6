// crates/cli/src/args.rs
use std::path::PathBuf;

use balance_probe_engine::config::DEFAULT_SOURCE;
use clap::{ArgAction, Parser, ValueHint};

use crate::parsers::CheckpointArg;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "balance_probe",
    version = crate::VERSION,
    about = "Report brace, paren and <div> balance at checkpoint lines of a source file"
)]
pub struct Args {
    /// File to scan
    #[arg(value_hint = ValueHint::FilePath, default_value = DEFAULT_SOURCE)]
    pub path: PathBuf,

    /// Checkpoint as LINE=LABEL (repeatable). Replaces the built-in admin page table.
    #[arg(short = 'c', long = "checkpoint", value_name = "LINE=LABEL")]
    pub checkpoints: Vec<CheckpointArg>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
