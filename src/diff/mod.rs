//! Dependency diff between two lock manifests.
//!
//! # Example
//!
//! ```
//! use podlock_tools::diff::DiffEngine;
//!
//! let old = "PODS:\n  - A/Core (1.0)\n  - B (1.0)\n\n";
//! let new = "PODS:\n  - A/Core (1.0)\n  - C (1.0)\n\n";
//!
//! let result = DiffEngine::new().diff_str(old, new).unwrap();
//! assert!(!result.is_equivalent());
//! assert_eq!(result.summary.removed, 1);
//! assert_eq!(result.summary.added, 1);
//! ```

mod engine;
mod result;

pub use engine::DiffEngine;
pub use result::{DiffResult, DiffSummary};
