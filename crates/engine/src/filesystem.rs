use balance_probe_core::lines::split_lines;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{EngineError, Result};

/// Read the whole file and decode it as UTF-8.
///
/// The file handle is dropped before decoding starts, on success and on error.
///
/// # Errors
///
/// [`EngineError::FileAccess`] when the file cannot be opened or read,
/// [`EngineError::Decoding`] when its bytes are not valid UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = {
        let file = File::open(path).map_err(|source| EngineError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| EngineError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        bytes
    };
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    decode(path, bytes)
}

fn decode(path: &Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        let source = e.utf8_error();
        let valid = String::from_utf8_lossy(&e.as_bytes()[..source.valid_up_to()]);
        EngineError::Decoding {
            path: path.to_path_buf(),
            line: line_at_end(&valid),
            source,
        }
    })
}

/// 1-based number of the line the end of `prefix` falls on.
fn line_at_end(prefix: &str) -> usize {
    split_lines(prefix)
        .filter(|l| l.ends_with(['\n', '\r']))
        .count()
        + 1
}
