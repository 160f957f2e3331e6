use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use thiserror::Error;

/// A line number paired with the structural region expected to start or end there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    /// 1-based line number.
    pub line: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckpointError {
    #[error("checkpoint line numbers start at 1, got 0")]
    ZeroLine,

    #[error("duplicate checkpoint for line {0}")]
    Duplicate(usize),
}

/// Immutable lookup from line number to label.
///
/// Entries keep their insertion order for display; lookups go through an index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckpointTable {
    entries: Vec<Checkpoint>,
    index: HashMap<usize, usize>,
}

impl CheckpointTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(line, label)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CheckpointError::ZeroLine`] for a line number of 0 and
    /// [`CheckpointError::Duplicate`] when a line number appears twice.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CheckpointError>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (line, label) in entries {
            if line == 0 {
                return Err(CheckpointError::ZeroLine);
            }
            if table.index.contains_key(&line) {
                return Err(CheckpointError::Duplicate(line));
            }
            table.push(line, label.into());
        }
        Ok(table)
    }

    /// Checkpoints for the admin page component (`src/app/admin/page.tsx`),
    /// marking where each dashboard tab opens and closes.
    #[must_use]
    pub fn admin_page() -> Self {
        const ADMIN_PAGE: &[(usize, &str)] = &[
            (1592, "Main Return"),
            (1727, "Create Tab Start"),
            (1794, "Create Tab End"),
            (1797, "Discovery Tab Start"),
            (1962, "Discovery Tab End"),
            (1963, "Full Automation Tab Start"),
            (2417, "Full Automation Tab End"),
            (2420, "Manage Tab Start"),
            (2610, "Manage Tab End"),
            (2613, "Analytics Tab Start"),
            (2916, "Analytics Tab End"),
            (2918, "Social Tab Start"),
        ];

        let mut table = Self::new();
        for &(line, label) in ADMIN_PAGE {
            table.push(line, label.into());
        }
        table
    }

    fn push(&mut self, line: usize, label: String) {
        self.index.insert(line, self.entries.len());
        self.entries.push(Checkpoint { line, label });
    }

    #[must_use]
    pub fn label(&self, line: usize) -> Option<&str> {
        self.index
            .get(&line)
            .map(|&i| self.entries[i].label.as_str())
    }

    #[must_use]
    pub fn contains(&self, line: usize) -> bool {
        self.index.contains_key(&line)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Checkpoint> {
        self.entries.iter()
    }

    /// Highest line number in the table.
    #[must_use]
    pub fn max_line(&self) -> Option<usize> {
        self.entries.iter().map(|c| c.line).max()
    }
}

impl<'a> IntoIterator for &'a CheckpointTable {
    type Item = &'a Checkpoint;
    type IntoIter = core::slice::Iter<'a, Checkpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_and_misses() {
        let table = CheckpointTable::from_entries([(3, "end"), (1, "start")]).unwrap();
        assert_eq!(table.label(1), Some("start"));
        assert_eq!(table.label(3), Some("end"));
        assert_eq!(table.label(2), None);
        assert!(!table.contains(0));
    }

    #[test]
    fn keeps_insertion_order() {
        let table = CheckpointTable::from_entries([(3, "end"), (1, "start")]).unwrap();
        let lines: Vec<_> = table.iter().map(|c| c.line).collect();
        assert_eq!(lines, [3, 1]);
        assert_eq!(table.max_line(), Some(3));
    }

    #[test]
    fn rejects_zero_and_duplicates() {
        assert_eq!(
            CheckpointTable::from_entries([(0, "x")]).unwrap_err(),
            CheckpointError::ZeroLine
        );
        assert_eq!(
            CheckpointTable::from_entries([(5, "a"), (5, "b")]).unwrap_err(),
            CheckpointError::Duplicate(5)
        );
    }

    #[test]
    fn admin_page_table() {
        let table = CheckpointTable::admin_page();
        assert_eq!(table.len(), 12);
        assert_eq!(table.label(1592), Some("Main Return"));
        assert_eq!(table.label(2918), Some("Social Tab Start"));
        assert_eq!(table.iter().next().map(|c| c.line), Some(1592));
    }

    #[test]
    fn empty_table() {
        let table = CheckpointTable::new();
        assert!(table.is_empty());
        assert_eq!(table.max_line(), None);
    }
}
