//! Pipeline orchestration for lock manifest operations.
//!
//! Shared parse → generate and parse → diff → report workflows used by the
//! CLI command handlers.

mod diff_stage;
mod generate_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::compute_diff;
pub use generate_stage::{generate_declarations, GeneratedDeclarations};
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::parse_lockfile_with_context;
pub use report_stage::output_report;

/// Process exit codes
pub mod exit_codes {
    /// Success, equivalent manifests, or usage shown
    pub const SUCCESS: i32 = 0;
    /// The manifests differ
    pub const DIFFERENCES_FOUND: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}
