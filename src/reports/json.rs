//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, DiffSummary};
use crate::model::DependencyEntry;
use chrono::Utc;
use indexmap::IndexSet;
use serde::Serialize;

/// JSON report generator, pretty-printed
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonDiffReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: "podlock-tools".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: Utc::now().to_rfc3339(),
                old_lock_path: config.metadata.old_lock_path.as_deref(),
                new_lock_path: config.metadata.new_lock_path.as_deref(),
            },
            equivalent: result.is_equivalent(),
            allowed_owners: (!result.allowed_owners.is_empty())
                .then_some(result.allowed_owners.as_slice()),
            summary: &result.summary,
            removed: &result.only_in_old,
            added: &result.only_in_new,
        };

        serde_json::to_string_pretty(&report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonDiffReport<'a> {
    metadata: JsonReportMetadata<'a>,
    equivalent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_owners: Option<&'a [String]>,
    summary: &'a DiffSummary,
    removed: &'a IndexSet<DependencyEntry>,
    added: &'a IndexSet<DependencyEntry>,
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_lock_path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_lock_path: Option<&'a str>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}
