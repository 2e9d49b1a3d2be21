//! `Podfile.lock` parser.
//!
//! Only the `PODS:` section is read. It starts at a line that is exactly
//! `PODS:` and runs until the first blank line or the end of the file:
//!
//! ```text
//! PODS:
//!   - A (1.0)
//!   - A/Core (1.0)
//!   - B (1.0):
//!     - A/Core (= 1.0)
//!
//! DEPENDENCIES:
//!   ...
//! ```

use super::traits::{LockfileParser, ParseError};
use crate::model::LockManifest;
use regex::Regex;
use std::sync::LazyLock;

/// Header line followed by the run of non-empty lines below it.
static PODS_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^PODS:\n((?:.+\n?)*)").expect("static regex"));

/// Parser for CocoaPods lock manifests
#[derive(Debug, Clone, Copy, Default)]
pub struct PodfileLockParser;

impl PodfileLockParser {
    /// Create a new parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LockfileParser for PodfileLockParser {
    fn parse_str(&self, content: &str) -> Result<LockManifest, ParseError> {
        let content = content.replace("\r\n", "\n");
        let section = PODS_SECTION
            .captures(&content)
            .and_then(|caps| caps.get(1))
            .ok_or(ParseError::MissingSection)?;

        let lines = section
            .as_str()
            .lines()
            .map(|line| line.trim().to_string())
            .collect();

        Ok(LockManifest::new(lines))
    }
}
