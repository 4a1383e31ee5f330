//! Shared building blocks for the `morse` workspace.
//!
//! * [`config`]: runtime configuration filled in by the CLI.
//! * [`error`]: the error taxonomy returned by the core.
//! * [`log`]: terminal-oriented logging macros on top of `tracing`.

pub mod config;
pub mod error;
pub mod log;
