//! Configuration module for podlock-tools.
//!
//! This module provides:
//! - Owner configuration and allow-list loading (JSON inputs of the commands)
//! - Type-safe per-command configuration built once per invocation
//! - YAML tool config file loading and discovery
//! - Validation for tool configuration values
//!
//! # Configuration File
//!
//! Place a `.podlock-tools.yaml` file in your project root or
//! `~/.config/podlock-tools/`:
//!
//! ```yaml
//! generate:
//!   strategy: path
//!   owner_config: ./repo_configs.json
//! diff:
//!   allow_list: ./dif_libs.json
//! output:
//!   no_color: true
//! ```

pub mod file;
mod owners;
mod types;
mod validation;

pub use owners::{load_allow_list, load_owner_configs, parse_allow_list, OwnerConfigs};
pub use types::{
    AppConfig, BehaviorConfig, DiffConfig, DiffConfigBuilder, DiffPaths, DiffSettings,
    GenerateConfig, GenerateConfigBuilder, GenerateSettings, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_tool_config,
    ConfigFileError, ToolConfig,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.podlock-tools.yaml` config files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}
