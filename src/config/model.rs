// src/config/model.rs

use serde::Deserialize;

/// Top-level TOML document.
///
/// ```toml
/// [watch]
/// pattern = "src/*.rs"
/// cmd = ["cargo", "check"]
/// delay = 2
/// verbose = true
/// stdin = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub watch: WatchSection,
}

/// `[watch]` section. Every key is optional; command-line values win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchSection {
    pub pattern: Option<String>,
    pub cmd: Option<Vec<String>>,
    /// Poll interval in whole seconds.
    pub delay: Option<u64>,
    #[serde(default)]
    pub verbose: bool,
    /// Force (`true`) or forbid (`false`) reading paths from stdin.
    pub stdin: Option<bool>,
}
