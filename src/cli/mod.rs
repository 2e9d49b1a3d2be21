//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler implements the
//! logic for one subcommand and returns the process exit code.

mod diff;
mod generate;

pub use diff::run_diff;
pub use generate::run_generate;

// Re-export config types used by handlers
pub use crate::config::{DiffConfig, GenerateConfig};
