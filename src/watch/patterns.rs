// src/watch/patterns.rs

//! Start-up expansion of the watch pattern into a concrete set of paths.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::debug;

use crate::errors::{PollwatchError, Result};
use crate::fs::FileSystem;

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Compile `pattern` with shell-like semantics: `*`, `?` and classes never
/// match a path separator, `**` spans directories.
pub fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| PollwatchError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
    Ok(glob.compile_matcher())
}

/// Expand `pattern` once into the sorted, de-duplicated list of existing
/// paths it matches.
///
/// The walk starts at the pattern's literal directory prefix and descends
/// only as deep as the pattern can reach. Unreadable directories are
/// skipped, and a directory reached again through a symlink is listed only
/// once. Zero matches is an error.
pub fn expand_pattern(fs: &dyn FileSystem, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = compile_pattern(pattern)?;
    let (root, max_depth) = walk_plan(pattern);
    debug!(pattern, root = ?root, max_depth, "expanding watch pattern");

    let mut matches = Vec::new();
    let mut stack = vec![(root, 1usize)];
    let mut visited: HashSet<PathBuf> = HashSet::new();

    while let Some((dir, depth)) = stack.pop() {
        let listing = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir.as_path()
        };

        if let Ok(canonical) = fs.canonicalize(listing) {
            if !visited.insert(canonical) {
                debug!(dir = ?listing, "directory already walked; skipping link cycle");
                continue;
            }
        }

        let entries = match fs.read_dir(listing) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(dir = ?listing, error = %err, "skipping unreadable directory");
                continue;
            }
        };

        for entry in entries {
            let Some(name) = entry.file_name() else {
                continue;
            };
            let candidate = dir.join(name);

            if matcher.is_match(&candidate) {
                matches.push(candidate.clone());
            }
            if depth < max_depth && fs.is_dir(&entry) {
                stack.push((candidate, depth + 1));
            }
        }
    }

    matches.sort();
    matches.dedup();

    if matches.is_empty() {
        return Err(PollwatchError::NoMatches(pattern.to_string()));
    }
    Ok(matches)
}

/// Split a pattern into the literal directory to start walking from and the
/// number of directory levels below it that can match.
fn walk_plan(pattern: &str) -> (PathBuf, usize) {
    let components: Vec<&str> = pattern.split('/').collect();

    let mut literal = components
        .iter()
        .take_while(|c| !c.contains(GLOB_META))
        .count();
    // A fully literal pattern still needs its last component matched as an entry.
    if literal == components.len() {
        literal = literal.saturating_sub(1);
    }

    let root = match components[..literal].join("/") {
        s if s.is_empty() && pattern.starts_with('/') => "/".to_string(),
        s => s,
    };

    let rest = &components[literal..];
    let max_depth = if rest.iter().any(|c| c.contains("**")) {
        usize::MAX
    } else {
        rest.len().max(1)
    };

    (PathBuf::from(root), max_depth)
}
