//! Parser trait definitions and error types.

use crate::model::LockManifest;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while parsing a lock manifest
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("no dependency section found")]
    MissingSection,

    #[error("input is not text: {0}")]
    NotText(String),
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

/// Trait for lock manifest parsers
///
/// Implementors only need `parse_str`; byte and file entry points decode the
/// input first and report non-UTF-8 data as [`ParseError::NotText`].
pub trait LockfileParser {
    /// Parse a manifest from a file path
    fn parse(&self, path: &Path) -> Result<LockManifest, ParseError> {
        let bytes = std::fs::read(path)?;
        self.parse_bytes(&bytes)
    }

    /// Parse a manifest from raw bytes
    fn parse_bytes(&self, bytes: &[u8]) -> Result<LockManifest, ParseError> {
        let content =
            std::str::from_utf8(bytes).map_err(|e| ParseError::NotText(e.to_string()))?;
        self.parse_str(content)
    }

    /// Parse a manifest from string content
    fn parse_str(&self, content: &str) -> Result<LockManifest, ParseError>;
}
