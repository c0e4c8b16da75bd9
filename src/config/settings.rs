// src/config/settings.rs

use std::time::Duration;

use crate::cli::{CliArgs, LogLevel};
use crate::config::model::ConfigFile;
use crate::errors::{PollwatchError, Result};
use crate::exec::CommandTemplate;
use crate::types::WatchSource;

pub const DEFAULT_DELAY_SECS: u64 = 1;

/// Fully resolved configuration, built once at start-up and handed to the
/// pollers and the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: WatchSource,
    pub template: CommandTemplate,
    pub interval: Duration,
    pub verbose: bool,
    pub log_level: Option<LogLevel>,
}

impl Settings {
    /// Merge the command line with an optional config file.
    ///
    /// - `--no-stdin` forces pattern mode; otherwise `[watch].stdin` decides,
    ///   falling back to "read stdin when it is not a terminal".
    /// - In pattern mode the first positional is the pattern and the rest is
    ///   the command; either may be supplied by the config file instead.
    /// - In stdin mode all positionals are the command.
    pub fn resolve(
        cli: &CliArgs,
        file: Option<&ConfigFile>,
        stdin_is_terminal: bool,
    ) -> Result<Self> {
        let section = file.map(|f| f.watch.clone()).unwrap_or_default();

        let delay = cli.delay.or(section.delay).unwrap_or(DEFAULT_DELAY_SECS);
        if delay == 0 {
            return Err(PollwatchError::Config(
                "delay must be at least 1 second (got 0)".to_string(),
            ));
        }

        let use_stdin = !cli.no_stdin && section.stdin.unwrap_or(!stdin_is_terminal);

        let (source, cmd) = if use_stdin {
            let cmd = if cli.args.is_empty() {
                section.cmd
            } else {
                Some(cli.args.clone())
            };
            (WatchSource::Stdin, cmd)
        } else {
            let (pattern, cmd) = match cli.args.split_first() {
                Some((pattern, [])) => (Some(pattern.clone()), section.cmd),
                Some((pattern, rest)) => (Some(pattern.clone()), Some(rest.to_vec())),
                None => (section.pattern, section.cmd),
            };
            let pattern = pattern
                .ok_or_else(|| PollwatchError::Usage("pollwatch pattern cmd [args...]".to_string()))?;
            (WatchSource::Pattern(pattern), cmd)
        };

        let cmd = cmd
            .filter(|c| !c.is_empty())
            .ok_or_else(|| PollwatchError::Usage("missing command to run".to_string()))?;

        Ok(Self {
            source,
            template: CommandTemplate::new(cmd)?,
            interval: Duration::from_secs(delay),
            verbose: cli.verbose || section.verbose,
            log_level: cli.log_level,
        })
    }
}
