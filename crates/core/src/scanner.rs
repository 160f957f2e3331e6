use alloc::string::String;
use alloc::vec::Vec;

use crate::checkpoint::CheckpointTable;
use crate::depths::{Depths, tally_line};
use crate::lines::split_lines;

/// Counter snapshot taken after a checkpoint line was processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointHit {
    pub line: usize,
    pub label: String,
    pub depths: Depths,
}

/// Outcome of a full pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Hits in ascending line order, at most one per checkpoint.
    pub hits: Vec<CheckpointHit>,
    pub final_depths: Depths,
    pub lines_scanned: usize,
}

/// Single forward pass over a line stream.
///
/// Counters start at zero and are updated line by line; after each line the
/// current line number is checked against the table.
#[derive(Debug)]
pub struct Scanner<'t> {
    table: &'t CheckpointTable,
    depths: Depths,
    line_number: usize,
    hits: Vec<CheckpointHit>,
}

impl<'t> Scanner<'t> {
    #[must_use]
    pub const fn new(table: &'t CheckpointTable) -> Self {
        Self {
            table,
            depths: Depths::zero(),
            line_number: 0,
            hits: Vec::new(),
        }
    }

    /// Process the next line. Returns the hit recorded for it, if the line is a checkpoint.
    pub fn feed_line(&mut self, line: &str) -> Option<&CheckpointHit> {
        self.line_number += 1;
        self.depths.apply(tally_line(line));

        let label = self.table.label(self.line_number)?;
        self.hits.push(CheckpointHit {
            line: self.line_number,
            label: label.into(),
            depths: self.depths,
        });
        self.hits.last()
    }

    #[must_use]
    pub const fn depths(&self) -> Depths {
        self.depths
    }

    /// Number of lines consumed so far (the 1-based number of the last line).
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    #[must_use]
    pub fn finish(self) -> ScanReport {
        ScanReport {
            hits: self.hits,
            final_depths: self.depths,
            lines_scanned: self.line_number,
        }
    }
}

/// Scan an already split line stream.
pub fn scan_lines<'a, I>(lines: I, table: &CheckpointTable) -> ScanReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = Scanner::new(table);
    for line in lines {
        scanner.feed_line(line);
    }
    scanner.finish()
}

/// Split `text` into lines and scan them.
#[must_use]
pub fn scan_text(text: &str, table: &CheckpointTable) -> ScanReport {
    scan_lines(split_lines(text), table)
}
