//! Owner configuration and allow-list loading.
//!
//! Owner configuration (for `gen-pod`) is a JSON object keyed by owner:
//!
//! ```json
//! {
//!   "A": { "path": "../A", "git_url": "git@example.com:a.git", "branch": "release" },
//!   "B": { "path": "../B" }
//! }
//! ```
//!
//! The allow-list (for `dif-pod`) is a JSON array of owner names.

use crate::error::{PodToolsError, Result};
use crate::podfile::{Resolution, Strategy};
use indexmap::{IndexMap, IndexSet};
use serde_json::Value;
use std::path::Path;

/// Owner records in file order.
///
/// Records are kept as loosely-typed JSON so that one malformed entry does
/// not reject the whole file; [`OwnerConfigs::resolve`] decides per strategy
/// which records are usable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnerConfigs {
    records: IndexMap<String, Value>,
}

impl OwnerConfigs {
    /// Parse owner configuration from JSON text
    pub fn from_json_str(content: &str) -> std::result::Result<Self, serde_json::Error> {
        let records: IndexMap<String, Value> = serde_json::from_str(content)?;
        Ok(Self { records })
    }

    /// Number of records, usable or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Owner names in file order
    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Owners usable under `strategy`, with their resolution, in file order.
    ///
    /// A record is usable when it is an object carrying string values for
    /// the keys the strategy needs (`path`, or `git_url` and `branch`).
    /// Other records are skipped.
    #[must_use]
    pub fn resolve(&self, strategy: Strategy) -> Vec<(String, Resolution)> {
        self.records
            .iter()
            .filter_map(|(owner, record)| match resolve_record(record, strategy) {
                Some(resolution) => Some((owner.clone(), resolution)),
                None => {
                    tracing::debug!("Skipping owner '{owner}': no usable {strategy} record");
                    None
                }
            })
            .collect()
    }
}

fn resolve_record(record: &Value, strategy: Strategy) -> Option<Resolution> {
    let fields = record.as_object()?;
    let text = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_string);

    match strategy {
        Strategy::Path => Some(Resolution::Path {
            path: text("path")?,
        }),
        Strategy::Branch => Some(Resolution::Branch {
            git_url: text("git_url")?,
            branch: text("branch")?,
        }),
    }
}

/// Load owner configuration from a JSON file.
pub fn load_owner_configs(path: &Path) -> Result<OwnerConfigs> {
    let content = read_config(path)?;
    OwnerConfigs::from_json_str(&content)
        .map_err(|e| PodToolsError::malformed_config(path, e.to_string()))
}

/// Parse an allow-list from JSON text
pub fn parse_allow_list(content: &str) -> std::result::Result<IndexSet<String>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Load an allow-list of owner names from a JSON file.
pub fn load_allow_list(path: &Path) -> Result<IndexSet<String>> {
    let content = read_config(path)?;
    parse_allow_list(&content).map_err(|e| PodToolsError::malformed_config(path, e.to_string()))
}

fn read_config(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PodToolsError::FileNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|e| PodToolsError::io(path, e))
}
