//! Generate command handler.
//!
//! Implements the `gen-pod` subcommand.

use crate::config::GenerateConfig;
use crate::pipeline::{exit_codes, generate_declarations, write_output, OutputTarget};
use anyhow::Result;

/// Run the generate command, returning the desired exit code.
///
/// Standard output receives the strategy banner followed by the
/// declarations; an output file receives the declarations only, so it can be
/// pasted into a Podfile as is.
#[allow(clippy::needless_pass_by_value)]
pub fn run_generate(config: GenerateConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let declarations = generate_declarations(&config, quiet)?;

    let target = OutputTarget::from_option(config.output.file.clone());
    let content = match &target {
        OutputTarget::Stdout => declarations.with_banner(),
        OutputTarget::File(_) => declarations.body(),
    };
    write_output(&content, &target, quiet)?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BehaviorConfig, OutputConfig};
    use crate::podfile::Strategy;

    #[test]
    fn test_run_generate_writes_body_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let lock = dir.path().join("Podfile.lock");
        let owners = dir.path().join("repo_configs.json");
        let out = dir.path().join("Podfile.part");
        std::fs::write(&lock, "PODS:\n  - A (1.0)\n\n").unwrap();
        std::fs::write(&owners, r#"{"A": {"git_url": "u.git", "branch": "dev"}}"#).unwrap();

        let config = GenerateConfig {
            lock_path: lock,
            strategy: Strategy::Branch,
            owner_config: owners,
            output: OutputConfig {
                file: Some(out.clone()),
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig { quiet: true },
        };

        assert_eq!(run_generate(config).unwrap(), exit_codes::SUCCESS);
        assert_eq!(
            std::fs::read_to_string(out).unwrap(),
            "pod 'A', :git => 'u.git', :branch => 'dev'\n"
        );
    }
}
