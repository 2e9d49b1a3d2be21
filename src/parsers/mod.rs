//! Lock manifest parsers.
//!
//! ## Usage
//!
//! ```no_run
//! use podlock_tools::parsers::parse_lockfile;
//! use std::path::Path;
//!
//! let manifest = parse_lockfile(Path::new("Podfile.lock")).unwrap();
//! for entry in manifest.reduced_entries() {
//!     println!("{entry}");
//! }
//! ```

mod podfile_lock;
mod traits;

pub use podfile_lock::PodfileLockParser;
pub use traits::{LockfileParser, ParseError};

use crate::model::LockManifest;
use std::path::Path;

/// Maximum manifest file size (64 MB).
const MAX_LOCKFILE_SIZE: u64 = 64 * 1024 * 1024;

/// Read and parse a lock manifest from disk.
///
/// Returns an error if the file exceeds [`MAX_LOCKFILE_SIZE`].
pub fn parse_lockfile(path: &Path) -> Result<LockManifest, ParseError> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_LOCKFILE_SIZE {
        return Err(ParseError::IoError(format!(
            "lock file is {} MB, exceeding the {} MB limit",
            metadata.len() / (1024 * 1024),
            MAX_LOCKFILE_SIZE / (1024 * 1024),
        )));
    }
    PodfileLockParser::new().parse(path)
}

/// Parse a lock manifest from string content
pub fn parse_lockfile_str(content: &str) -> Result<LockManifest, ParseError> {
    PodfileLockParser::new().parse_str(content)
}
