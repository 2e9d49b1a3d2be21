//! Resolution strategies for generated `pod` declarations.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a generated declaration points at a library's source
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Local checkout: `:path => '...'`
    Path,
    /// Remote repository branch: `:git => '...', :branch => '...'`
    Branch,
}

impl Strategy {
    /// Banner line printed before the generated declarations
    #[must_use]
    pub const fn banner(self) -> &'static str {
        match self {
            Self::Path => "====path dependencies====",
            Self::Branch => "====branch dependencies====",
        }
    }

    /// Lowercase name as accepted on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Branch => "branch",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where one owner's sources come from, resolved for a single strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Path { path: String },
    Branch { git_url: String, branch: String },
}

impl Resolution {
    /// Source options rendered after the pod name, e.g. `:path => '../A'`
    #[must_use]
    pub fn source_options(&self) -> String {
        match self {
            Self::Path { path } => format!(":path => '{path}'"),
            Self::Branch { git_url, branch } => {
                format!(":git => '{git_url}', :branch => '{branch}'")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banners() {
        assert_eq!(Strategy::Path.banner(), "====path dependencies====");
        assert_eq!(Strategy::Branch.banner(), "====branch dependencies====");
    }

    #[test]
    fn test_strategy_from_cli_value() {
        assert_eq!(Strategy::from_str("path", true).unwrap(), Strategy::Path);
        assert_eq!(Strategy::from_str("branch", true).unwrap(), Strategy::Branch);
        assert!(Strategy::from_str("tag", true).is_err());
    }

    #[test]
    fn test_source_options() {
        let path = Resolution::Path {
            path: "../A".to_string(),
        };
        assert_eq!(path.source_options(), ":path => '../A'");

        let branch = Resolution::Branch {
            git_url: "git@example.com:a.git".to_string(),
            branch: "release".to_string(),
        };
        assert_eq!(
            branch.source_options(),
            ":git => 'git@example.com:a.git', :branch => 'release'"
        );
    }
}
