use std::fmt;

/// Where the initial watch set comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchSource {
    /// Glob pattern, expanded once at start-up.
    Pattern(String),
    /// One path per line on standard input.
    Stdin,
}

impl fmt::Display for WatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchSource::Pattern(p) => write!(f, "pattern {p:?}"),
            WatchSource::Stdin => f.write_str("standard input"),
        }
    }
}
