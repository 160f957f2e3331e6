use core::fmt;
use core::ops::{Add, AddAssign};

use crate::markers::count_tags;

/// Running balance of the three structural counters.
///
/// Values are signed and never clamped: a negative depth is the signal that
/// more closers than openers have been seen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Depths {
    /// `{` minus `}`.
    pub braces: i64,
    /// `(` minus `)`.
    pub parens: i64,
    /// `<div` minus `</div>`.
    pub divs: i64,
}

impl Depths {
    /// All counters at zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            braces: 0,
            parens: 0,
            divs: 0,
        }
    }

    #[must_use]
    pub const fn new(braces: i64, parens: i64, divs: i64) -> Self {
        Self {
            braces,
            parens,
            divs,
        }
    }

    /// True when every counter is back at zero.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.braces == 0 && self.parens == 0 && self.divs == 0
    }

    /// Add the delta of a single line to the running totals.
    pub fn apply(&mut self, delta: Self) {
        *self += delta;
    }
}

/// Net change contributed by one line.
///
/// Braces and parens are counted per character; the div markers are counted
/// as substrings over the whole line. The three counters never interact.
#[must_use]
pub fn tally_line(line: &str) -> Depths {
    let mut delta = Depths::zero();

    for ch in line.chars() {
        match ch {
            '{' => delta.braces += 1,
            '}' => delta.braces -= 1,
            '(' => delta.parens += 1,
            ')' => delta.parens -= 1,
            _ => {}
        }
    }

    let (opens, closes) = count_tags(line);
    delta.divs = to_signed(opens) - to_signed(closes);

    delta
}

#[allow(clippy::cast_possible_wrap)]
const fn to_signed(n: usize) -> i64 {
    n as i64
}

impl Add for Depths {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            braces: self.braces + rhs.braces,
            parens: self.parens + rhs.parens,
            divs: self.divs + rhs.divs,
        }
    }
}

impl AddAssign for Depths {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Depths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Braces={}, Parens={}, Divs={}",
            self.braces, self.parens, self.divs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn tally_counts_each_character() {
        assert_eq!(tally_line("{{}(\n"), Depths::new(1, 1, 0));
        assert_eq!(tally_line("))"), Depths::new(0, -2, 0));
    }

    #[test]
    fn tally_counts_tags_alongside_brackets() {
        assert_eq!(tally_line("<div>{(\n"), Depths::new(1, 1, 1));
        assert_eq!(tally_line("</div>}\n"), Depths::new(-1, 0, -1));
    }

    #[test]
    fn apply_accumulates_without_clamping() {
        let mut depths = Depths::zero();
        depths.apply(tally_line("}"));
        depths.apply(tally_line("}"));
        assert_eq!(depths.braces, -2);
        assert!(!depths.is_balanced());
    }

    #[test]
    fn display_matches_report_format() {
        assert_eq!(
            Depths::new(3, -1, 0).to_string(),
            "Braces=3, Parens=-1, Divs=0"
        );
    }
}
