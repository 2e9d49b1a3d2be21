//! Lock manifest parsing stage.

use crate::error::{PodToolsError, Result};
use crate::model::LockManifest;
use crate::parsers::{parse_lockfile, ParseError};
use std::path::Path;

/// Parse a lock manifest with context for error messages.
///
/// A missing file is reported as [`PodToolsError::FileNotFound`]; a file
/// without a `PODS:` section or with non-text content as
/// [`PodToolsError::MalformedManifest`].
pub fn parse_lockfile_with_context(path: &Path, quiet: bool) -> Result<LockManifest> {
    if !path.exists() {
        return Err(PodToolsError::FileNotFound(path.to_path_buf()));
    }
    if !quiet {
        tracing::info!("Parsing lock file: {}", path.display());
    }

    let manifest = parse_lockfile(path).map_err(|e| match e {
        ParseError::IoError(message) => PodToolsError::io(path, std::io::Error::other(message)),
        other => PodToolsError::manifest(path.display().to_string(), other),
    })?;

    tracing::debug!(
        "Read {} lines from the PODS section of {}",
        manifest.line_count(),
        path.display()
    );

    Ok(manifest)
}
