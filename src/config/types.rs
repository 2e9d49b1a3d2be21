//! Configuration types for podlock-tools operations.
//!
//! [`AppConfig`] mirrors the `.podlock-tools.yaml` file. The per-command
//! [`GenerateConfig`] and [`DiffConfig`] values are built once per
//! invocation from CLI arguments layered over the file, and are immutable
//! afterwards.

use crate::error::{PodToolsError, Result};
use crate::podfile::Strategy;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `gen-pod`
    pub generate: GenerateSettings,
    /// Defaults for `dif-pod`
    pub diff: DiffSettings,
    /// Output configuration (format, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// File-level defaults for declaration generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GenerateSettings {
    /// Resolution strategy used when `--dep-way` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,
    /// Owner configuration JSON used when `--config-path` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_config: Option<PathBuf>,
}

/// File-level defaults for manifest diffs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DiffSettings {
    /// Allow-list JSON used when `--config-path` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_list: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Diff report format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Only log warnings and errors
    pub quiet: bool,
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for `gen-pod`
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Lock manifest to read
    pub lock_path: PathBuf,
    /// Resolution strategy
    pub strategy: Strategy,
    /// Owner configuration JSON
    pub owner_config: PathBuf,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// Configuration for `dif-pod`
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Manifests to compare
    pub paths: DiffPaths,
    /// Optional allow-list JSON
    pub allow_list: Option<PathBuf>,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// Paths for diff operation
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to the old manifest
    pub old: PathBuf,
    /// Path to the new manifest
    pub new: PathBuf,
}

// ============================================================================
// Builders
// ============================================================================

/// Builder for [`GenerateConfig`]
#[derive(Debug, Default)]
pub struct GenerateConfigBuilder {
    lock_path: Option<PathBuf>,
    strategy: Option<Strategy>,
    owner_config: Option<PathBuf>,
    output: OutputConfig,
    behavior: BehaviorConfig,
}

impl GenerateConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lock_path(mut self, path: Option<PathBuf>) -> Self {
        self.lock_path = path;
        self
    }

    #[must_use]
    pub const fn strategy(mut self, strategy: Option<Strategy>) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn owner_config(mut self, path: Option<PathBuf>) -> Self {
        self.owner_config = path;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    /// Fill unset values from the tool configuration file
    #[must_use]
    pub fn with_file_defaults(mut self, file: &AppConfig) -> Self {
        if self.strategy.is_none() {
            self.strategy = file.generate.strategy;
        }
        if self.owner_config.is_none() {
            self.owner_config.clone_from(&file.generate.owner_config);
        }
        if self.output.file.is_none() {
            self.output.file.clone_from(&file.output.file);
        }
        self.output.no_color |= file.output.no_color;
        self.behavior.quiet |= file.behavior.quiet;
        self
    }

    /// Build the configuration, reporting every missing field at once.
    pub fn build(self) -> Result<GenerateConfig> {
        let mut missing = Vec::new();
        if self.lock_path.is_none() {
            missing.push("--lock-path");
        }
        if self.strategy.is_none() {
            missing.push("--dep-way");
        }
        if self.owner_config.is_none() {
            missing.push("--config-path");
        }

        match (self.lock_path, self.strategy, self.owner_config) {
            (Some(lock_path), Some(strategy), Some(owner_config)) => Ok(GenerateConfig {
                lock_path,
                strategy,
                owner_config,
                output: self.output,
                behavior: self.behavior,
            }),
            _ => Err(PodToolsError::missing(missing)),
        }
    }
}

/// Builder for [`DiffConfig`]
#[derive(Debug, Default)]
pub struct DiffConfigBuilder {
    old: Option<PathBuf>,
    new: Option<PathBuf>,
    allow_list: Option<PathBuf>,
    output: OutputConfig,
    behavior: BehaviorConfig,
    format: Option<ReportFormat>,
}

impl DiffConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn old_path(mut self, path: Option<PathBuf>) -> Self {
        self.old = path;
        self
    }

    #[must_use]
    pub fn new_path(mut self, path: Option<PathBuf>) -> Self {
        self.new = path;
        self
    }

    #[must_use]
    pub fn allow_list(mut self, path: Option<PathBuf>) -> Self {
        self.allow_list = path;
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: Option<ReportFormat>) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    /// Fill unset values from the tool configuration file
    #[must_use]
    pub fn with_file_defaults(mut self, file: &AppConfig) -> Self {
        if self.allow_list.is_none() {
            self.allow_list.clone_from(&file.diff.allow_list);
        }
        if self.format.is_none() {
            self.format = Some(file.output.format);
        }
        if self.output.file.is_none() {
            self.output.file.clone_from(&file.output.file);
        }
        self.output.no_color |= file.output.no_color;
        self.behavior.quiet |= file.behavior.quiet;
        self
    }

    /// Build the configuration, reporting every missing field at once.
    pub fn build(self) -> Result<DiffConfig> {
        let mut missing = Vec::new();
        if self.old.is_none() {
            missing.push("--old-lock-path");
        }
        if self.new.is_none() {
            missing.push("--new-lock-path");
        }

        let (Some(old), Some(new)) = (self.old, self.new) else {
            return Err(PodToolsError::missing(missing));
        };

        let mut output = self.output;
        output.format = self.format.unwrap_or_default();

        Ok(DiffConfig {
            paths: DiffPaths { old, new },
            allow_list: self.allow_list,
            output,
            behavior: self.behavior,
        })
    }
}
