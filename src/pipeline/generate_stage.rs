//! Declaration generation stage.

use super::parse_lockfile_with_context;
use crate::config::{load_owner_configs, GenerateConfig};
use crate::error::{PodToolsError, Result};
use crate::podfile::{generate_entries, Strategy};

/// Declarations produced for one `gen-pod` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDeclarations {
    pub strategy: Strategy,
    pub entries: Vec<String>,
}

impl GeneratedDeclarations {
    /// Declarations joined by newlines
    #[must_use]
    pub fn body(&self) -> String {
        self.entries.join("\n")
    }

    /// Banner line followed by the declarations
    #[must_use]
    pub fn with_banner(&self) -> String {
        if self.entries.is_empty() {
            self.strategy.banner().to_string()
        } else {
            format!("{}\n{}", self.strategy.banner(), self.body())
        }
    }
}

/// Load every input, then render declarations for the configured owners.
///
/// Inputs are all read before anything is returned, so a malformed owner
/// configuration or manifest never yields partial output.
pub fn generate_declarations(config: &GenerateConfig, quiet: bool) -> Result<GeneratedDeclarations> {
    let owners = load_owner_configs(&config.owner_config)?;
    tracing::debug!(
        "Loaded {} owner records from {}: {:?}",
        owners.len(),
        config.owner_config.display(),
        owners.owners().collect::<Vec<_>>()
    );

    let manifest = parse_lockfile_with_context(&config.lock_path, quiet)?;
    let entries = manifest.entries();
    if entries.is_empty() {
        return Err(PodToolsError::EmptyResultSet(config.lock_path.clone()));
    }

    let resolved = owners.resolve(config.strategy);
    if !quiet {
        tracing::info!(
            "Generating {} declarations for {} of {} owners",
            config.strategy,
            resolved.len(),
            owners.len()
        );
    }

    Ok(GeneratedDeclarations {
        strategy: config.strategy,
        entries: generate_entries(&entries, &resolved),
    })
}
