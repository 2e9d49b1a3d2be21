//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use super::validation::Validatable;
use crate::error::{PodToolsError, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".podlock-tools.yaml",
    ".podlock-tools.yml",
    "podlock-tools.yaml",
    "podlock-tools.yml",
];

/// Directory under the user config dir that may hold a global config.
const CONFIG_DIR_NAME: &str = "podlock-tools";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/podlock-tools/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    search_paths()
        .into_iter()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Directories searched for a config file, in priority order.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    let mut dirs_to_search = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs_to_search.push(cwd);
    }
    if let Some(git_root) = find_git_root() {
        dirs_to_search.push(git_root);
    }
    if let Some(config_dir) = dirs::config_dir() {
        dirs_to_search.push(config_dir.join(CONFIG_DIR_NAME));
    }
    if let Some(home) = dirs::home_dir() {
        dirs_to_search.push(home);
    }
    dirs_to_search
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> std::result::Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// The tool config in effect for one run.
#[derive(Debug, Default)]
pub struct ToolConfig {
    /// Effective settings, defaults when no file was used
    pub config: AppConfig,
    /// File the settings were read from
    pub source: Option<PathBuf>,
    /// Discovered file that failed to load and was skipped
    pub ignored: Option<(PathBuf, ConfigFileError)>,
}

/// Load the tool config for a run.
///
/// An explicit path must exist, parse and validate, otherwise the run fails
/// with [`PodToolsError::Config`]. A discovered file that fails to load is
/// skipped in favor of the defaults.
pub fn load_tool_config(explicit_path: Option<&Path>) -> Result<ToolConfig> {
    if let Some(path) = explicit_path {
        let config = load_config_file(path)
            .map_err(|e| PodToolsError::config(format!("{}: {e}", path.display())))?;
        let problems = config.validate();
        if !problems.is_empty() {
            let joined: Vec<String> = problems.iter().map(ToString::to_string).collect();
            return Err(PodToolsError::config(format!(
                "{}: {}",
                path.display(),
                joined.join("; ")
            )));
        }
        return Ok(ToolConfig {
            config,
            source: Some(path.to_path_buf()),
            ignored: None,
        });
    }

    let Some(path) = discover_config_file(None) else {
        return Ok(ToolConfig::default());
    };
    Ok(match load_config_file(&path) {
        Ok(config) => ToolConfig {
            config,
            source: Some(path),
            ignored: None,
        },
        Err(e) => ToolConfig {
            ignored: Some((path, e)),
            ..ToolConfig::default()
        },
    })
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_example_config() -> String {
    r"# podlock-tools configuration
# ===========================
#
# Place this file at:
#   - .podlock-tools.yaml in your project root
#   - ~/.config/podlock-tools/podlock-tools.yaml for global config
#
# CLI arguments always override file settings.

# Defaults for gen-pod
# generate:
#   # Resolution strategy: path or branch
#   strategy: path
#   # Owner configuration JSON (owner -> {path} or {git_url, branch})
#   owner_config: ./repo_configs.json

# Defaults for dif-pod
# diff:
#   # JSON array of owners to compare (omit to compare everything)
#   allow_list: ./dif_libs.json

# Output configuration
output:
  # Diff report format: summary, json
  format: summary
  # Output file path (omit for stdout)
  # file: report.txt
  # Disable colored output
  no_color: false

# Behavior flags
behavior:
  # Only log warnings and errors
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
