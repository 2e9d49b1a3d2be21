//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for diff reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `-`/`+` lines for the terminal
    #[default]
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Where the compared manifests came from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Path to the old manifest
    pub old_lock_path: Option<String>,
    /// Path to the new manifest
    pub new_lock_path: Option<String>,
}

/// Configuration passed to every reporter
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Create a report configuration with metadata
    #[must_use]
    pub const fn with_metadata(metadata: ReportMetadata) -> Self {
        Self { metadata }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_matches_cli_value() {
        for format in ReportFormat::value_variants() {
            let parsed = ReportFormat::from_str(&format.to_string(), false).unwrap();
            assert_eq!(parsed, *format);
        }
    }

    #[test]
    fn test_format_yaml_name() {
        let format: ReportFormat = serde_yaml::from_str("json").unwrap();
        assert_eq!(format, ReportFormat::Json);
    }
}
