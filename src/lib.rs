//! **Tools for working with CocoaPods `Podfile.lock` manifests.**
//!
//! `podlock-tools` reads the `PODS:` section of a lock manifest and works
//! with its hierarchical dependency entries (`Library`, `Library/Sub`,
//! `Library/Sub/Detail`). Consumers only need the most specific entries,
//! since naming a sub-module implies its ancestors, so both operations of
//! the library run on a *reduced* set of entries.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`DependencyEntry`] and [`LockManifest`], the parsed
//!   form of a lock file.
//! - **[`hierarchy`]**: [`reduce`] to the most specific entries and
//!   [`group`] entries under an owner.
//! - **[`podfile`]**: renders `pod` declarations with a local path or a
//!   remote branch [`Strategy`].
//! - **[`diff`]**: the [`DiffEngine`], comparing the reduced entries of two
//!   manifests.
//! - **[`reports`]**: summary and JSON output for diff results.
//! - **[`pipeline`]**: file-level stages shared by the CLI handlers.
//!
//! ## Reducing a Manifest
//!
//! ```
//! use podlock_tools::parse_lockfile_str;
//!
//! let manifest = parse_lockfile_str("PODS:\n  - A (1.0)\n  - A/Core (1.0)\n  - B (2.0)\n\n")?;
//! let reduced = manifest.reduced_entries();
//! let names: Vec<&str> = reduced.iter().map(|entry| entry.as_str()).collect();
//! assert_eq!(names, ["A/Core", "B"]);
//! # Ok::<(), podlock_tools::parsers::ParseError>(())
//! ```
//!
//! ## Diffing Two Manifests
//!
//! ```
//! use podlock_tools::{parse_lockfile_str, DiffEngine};
//!
//! let old = parse_lockfile_str("PODS:\n  - A/Core (1.0)\n  - B (1.0)\n\n")?;
//! let new = parse_lockfile_str("PODS:\n  - A/Core (1.0)\n  - C (1.0)\n\n")?;
//!
//! let diff = DiffEngine::new().diff_manifests(&old, &new);
//! assert!(diff.only_in_old.contains("B"));
//! assert!(diff.only_in_new.contains("C"));
//! # Ok::<(), podlock_tools::parsers::ParseError>(())
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `podlock-tools` binary exposes the `gen-pod` and `dif-pod`
//! subcommands on top of this library.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod hierarchy;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod podfile;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, BehaviorConfig, DiffConfig, GenerateConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{DiffEngine, DiffResult, DiffSummary};
pub use error::{ErrorContext, PodToolsError, Result};
pub use hierarchy::{group, reduce};
pub use model::{DependencyEntry, LockManifest};
pub use parsers::{parse_lockfile, parse_lockfile_str, LockfileParser, PodfileLockParser};
pub use podfile::{generate_entries, Resolution, Strategy};
pub use reports::{ReportFormat, ReportGenerator};
