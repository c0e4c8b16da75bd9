// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`template`] turns a changed path plus the raw argument template into a
//!   concrete argument vector.
//! - [`backend`] provides the `ExecutorBackend` trait and the
//!   `ProcessExecutor` the runtime uses in production, which tests can
//!   replace with a fake implementation.

pub mod backend;
pub mod template;

pub use backend::{CommandOutcome, ExecutorBackend, ProcessExecutor};
pub use template::{substitute, CommandTemplate};
