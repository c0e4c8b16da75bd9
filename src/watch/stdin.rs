// src/watch/stdin.rs

//! Watch list supplied on standard input, one path per line.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::PathBuf;

use crate::errors::{PollwatchError, Result};

/// Read one path per line.
///
/// Only the line terminator (`\n` or `\r\n`) is removed; spaces around a
/// name belong to the path. Lines made only of whitespace are skipped and
/// repeated paths dropped (the first occurrence keeps its position). An
/// empty list is an error.
pub fn read_path_list<R: BufRead>(reader: R) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let path = line.strip_suffix('\r').unwrap_or(&line);
        if path.trim().is_empty() {
            continue;
        }
        if seen.insert(path.to_string()) {
            paths.push(PathBuf::from(path));
        }
    }

    if paths.is_empty() {
        return Err(PollwatchError::EmptyWatchList);
    }
    Ok(paths)
}
