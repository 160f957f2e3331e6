// crates/engine/src/lib.rs
use balance_probe_core::lines::split_lines;
use balance_probe_core::{Checkpoint, CheckpointTable, ScanReport, Scanner};

pub mod config;
pub mod error;
pub mod filesystem;

use crate::config::Config;
use crate::error::Result;

/// Read the configured file and run the balance scan over it.
///
/// The whole file is read and decoded before the first line is counted, so an
/// error never follows partial results.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
/// Unbalanced content is never an error.
pub fn run(config: &Config) -> Result<ScanReport> {
    let text = filesystem::read_source(&config.path)?;

    let mut scanner = Scanner::new(&config.checkpoints);
    for line in split_lines(&text) {
        if let Some(hit) = scanner.feed_line(line) {
            log::trace!("L{} {}: {}", hit.line, hit.label, hit.depths);
        }
    }
    let report = scanner.finish();
    log::debug!(
        "scanned {} lines of {}, {} checkpoint(s) hit",
        report.lines_scanned,
        config.path.display(),
        report.hits.len()
    );

    for checkpoint in unreached_checkpoints(&report, &config.checkpoints) {
        log::warn!(
            "checkpoint L{} {} is past the end of {} ({} lines)",
            checkpoint.line,
            checkpoint.label,
            config.path.display(),
            report.lines_scanned
        );
    }

    Ok(report)
}

/// Checkpoints whose line lies beyond the last scanned line.
pub fn unreached_checkpoints<'t>(
    report: &ScanReport,
    table: &'t CheckpointTable,
) -> impl Iterator<Item = &'t Checkpoint> + use<'t> {
    let last = report.lines_scanned;
    table.iter().filter(move |c| c.line > last)
}
