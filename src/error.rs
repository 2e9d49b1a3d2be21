//! Unified error types for podlock-tools.
//!
//! Every failure is terminal for the current invocation. The library returns
//! these values and only the binary entry point turns them into messages and
//! exit codes.

use crate::parsers::ParseError;
use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for podlock-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PodToolsError {
    /// One or more required inputs were not supplied
    #[error("Missing required options: {}", .fields.join(", "))]
    MissingArgument { fields: Vec<String> },

    /// A referenced input file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The lock manifest has no dependency section or is not text
    #[error("Malformed manifest ({context})")]
    MalformedManifest {
        context: String,
        #[source]
        source: ParseError,
    },

    /// The owner configuration or allow-list is not valid structured data
    #[error("Error parsing JSON from {}: {message}", .path.display())]
    MalformedConfig { path: PathBuf, message: String },

    /// The manifest parsed but produced no usable entries
    #[error(
        "No unique dependencies found in {}. Please check your Podfile.lock content and repo configs.",
        .0.display()
    )]
    EmptyResultSet(PathBuf),

    /// IO errors with context; the underlying error is the source
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Tool configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Report rendering errors
    #[error("Report generation failed")]
    Report(#[from] ReportError),
}

/// Convenient Result type for podlock-tools operations
pub type Result<T> = std::result::Result<T, PodToolsError>;

impl PodToolsError {
    /// Create a missing-argument error from field names
    pub fn missing<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingArgument {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a malformed-manifest error with context
    pub fn manifest(context: impl Into<String>, source: ParseError) -> Self {
        Self::MalformedManifest {
            context: context.into(),
            source,
        }
    }

    /// Create a malformed-config error for a file
    pub fn malformed_config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MalformedConfig {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = source.kind().to_string();
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error only asks the user for more input.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::MissingArgument { .. })
    }
}

impl From<std::io::Error> for PodToolsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.kind().to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained onto the error so the message shows the path
/// through the pipeline, e.g. `old manifest: reading Podfile.lock`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<PodToolsError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: PodToolsError, new_ctx: &str) -> PodToolsError {
    match err {
        PodToolsError::MalformedManifest { context, source } => PodToolsError::MalformedManifest {
            context: chain_context(new_ctx, &context),
            source,
        },
        PodToolsError::Io {
            path,
            message,
            source,
        } => PodToolsError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        PodToolsError::Config(msg) => PodToolsError::Config(chain_context(new_ctx, &msg)),
        // These already name the file they are about.
        other => other,
    }
}

/// Chain two context strings together.
///
/// Returns `"new: existing"`, or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_lists_every_field() {
        let err = PodToolsError::missing(["lock_path", "dep_way"]);
        assert_eq!(
            err.to_string(),
            "Missing required options: lock_path, dep_way"
        );
        assert!(err.is_usage());
    }

    #[test]
    fn test_file_not_found_display() {
        let err = PodToolsError::FileNotFound(PathBuf::from("/tmp/Podfile.lock"));
        assert!(err.to_string().contains("/tmp/Podfile.lock"));
        assert!(!err.is_usage());
    }

    #[test]
    fn test_empty_result_set_is_distinct_from_malformed() {
        let empty = PodToolsError::EmptyResultSet(PathBuf::from("Podfile.lock"));
        let malformed = PodToolsError::manifest("in Podfile.lock", ParseError::MissingSection);

        assert!(empty.to_string().contains("No unique dependencies"));
        assert!(malformed.to_string().contains("Malformed manifest"));
    }

    #[test]
    fn test_source_chain_is_not_repeated() {
        let err = PodToolsError::manifest("Podfile.lock", ParseError::MissingSection);
        let rendered = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(rendered.matches("no dependency section found").count(), 1);
        assert!(rendered.starts_with("Malformed manifest (Podfile.lock)"));

        let io_err = std::io::Error::other("file too large");
        let rendered = format!("{:#}", anyhow::Error::from(PodToolsError::io("x.lock", io_err)));
        assert_eq!(rendered.matches("file too large").count(), 1);

        let report = PodToolsError::from(ReportError::SerializationError("bad key".into()));
        let rendered = format!("{:#}", anyhow::Error::from(report));
        assert_eq!(rendered.matches("bad key").count(), 1);
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PodToolsError::io("/path/to/Podfile.lock", io_err);
        assert!(err.to_string().contains("/path/to/Podfile.lock"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(PodToolsError::manifest("base", ParseError::MissingSection))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(PodToolsError::MalformedManifest { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected MalformedManifest, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(PodToolsError::config("bad"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_context_leaves_file_errors_untouched() {
        let result: Result<()> = Err(PodToolsError::FileNotFound(PathBuf::from("a.lock")));
        match result.context("ignored") {
            Err(PodToolsError::FileNotFound(path)) => assert_eq!(path, PathBuf::from("a.lock")),
            other => panic!("Expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
