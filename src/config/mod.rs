// src/config/mod.rs

//! Configuration loading and resolution for pollwatch.
//!
//! Responsibilities:
//! - Define the optional TOML data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Merge it with the command line into validated [`Settings`]
//!   (`settings.rs`).

pub mod loader;
pub mod model;
pub mod settings;

pub use loader::load_from_path;
pub use model::{ConfigFile, WatchSection};
pub use settings::{Settings, DEFAULT_DELAY_SECS};
