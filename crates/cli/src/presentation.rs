// crates/cli/src/presentation.rs
use balance_probe_core::{CheckpointHit, Depths, ScanReport};
use std::io::{self, Write};

#[must_use]
pub fn format_hit(hit: &CheckpointHit) -> String {
    format!("L{} {}: {}", hit.line, hit.label, hit.depths)
}

#[must_use]
pub fn format_final(depths: &Depths) -> String {
    format!("Final state: {depths}")
}

/// One line per checkpoint hit, then the final state.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_report<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    for hit in &report.hits {
        writeln!(out, "{}", format_hit(hit))?;
    }
    writeln!(out, "{}", format_final(&report.final_depths))
}

/// # Errors
///
/// Propagates stdout write failures (e.g. a closed pipe).
pub fn print_report(report: &ScanReport) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_report(&mut out, report)?;
    out.flush()
}
