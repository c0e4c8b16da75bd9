// src/exec/template.rs

//! Command template and placeholder substitution.
//!
//! Each argument is scanned on its own:
//! - `%` becomes the changed path (anywhere, including the program name),
//! - `\%` becomes a literal `%`,
//! - every other character, including a lone `\`, is copied unchanged.
//!
//! Arguments are never re-split, so a path containing spaces stays a single
//! argument.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

use crate::errors::{PollwatchError, Result};

/// Placeholder replaced by the changed path.
pub const PLACEHOLDER: char = '%';
/// Escape character that makes the following `%` literal.
pub const ESCAPE: char = '\\';

/// Immutable argument template; `args[0]` is the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    args: Vec<String>,
}

impl CommandTemplate {
    pub fn new(args: Vec<String>) -> Result<Self> {
        if args.is_empty() {
            return Err(PollwatchError::EmptyTemplate);
        }
        Ok(Self { args })
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// True if any argument contains an unescaped placeholder.
    pub fn references_path(&self) -> bool {
        self.args.iter().any(|arg| substitute(arg, "") != substitute(arg, "x"))
    }

    /// Concrete argument vector for a change of `path`.
    ///
    /// The path is spliced in as raw OS bytes, so non UTF-8 names survive.
    pub fn render(&self, path: &Path) -> Vec<OsString> {
        self.args
            .iter()
            .map(|arg| substitute(arg, path.as_os_str()))
            .collect()
    }
}

impl fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}

/// Substitute every unescaped `%` in `arg` with `path`.
pub fn substitute(arg: &str, path: impl AsRef<OsStr>) -> OsString {
    let path = path.as_ref();
    let mut out = OsString::with_capacity(arg.len() + path.len());
    let mut literal = String::new();
    let mut chars = arg.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE if chars.peek() == Some(&PLACEHOLDER) => {
                chars.next();
                literal.push(PLACEHOLDER);
            }
            PLACEHOLDER => {
                out.push(&literal);
                literal.clear();
                out.push(path);
            }
            other => literal.push(other),
        }
    }

    out.push(&literal);
    out
}
