#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod checkpoint;
pub mod depths;
pub mod lines;
pub mod markers;
pub mod scanner;

pub use checkpoint::{Checkpoint, CheckpointError, CheckpointTable};
pub use depths::{Depths, tally_line};
pub use scanner::{CheckpointHit, ScanReport, Scanner, scan_lines, scan_text};
