//! Line splitting with text-mode newline handling.

/// Iterator over the lines of a text, each keeping its terminator.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A trailing fragment without a
/// terminator is yielded as the last line; an empty text yields nothing.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

/// Split `text` into lines, keeping terminators.
#[must_use]
pub const fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        let end = match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') => i + 2,
            Some(i) => i + 1,
            None => bytes.len(),
        };

        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}

impl core::iter::FusedIterator for Lines<'_> {}
