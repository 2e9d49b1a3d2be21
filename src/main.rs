//! podlock-tools: CocoaPods lock manifest tooling
//!
//! Generates Podfile declarations from a `Podfile.lock` and diffs two lock
//! manifests by their most specific dependency entries.

#![allow(clippy::too_many_lines, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use podlock_tools::{
    cli,
    config::{
        self, AppConfig, DiffConfigBuilder, GenerateConfigBuilder, ToolConfig, Validatable,
    },
    error::PodToolsError,
    pipeline::exit_codes,
    podfile::Strategy,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with mode info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput:",
        "\n  Podfile.lock (PODS section)",
        "\n\nModes:",
        "\n  gen-pod  path or branch declarations for configured owners",
        "\n  dif-pod  added and removed dependency entries",
        "\n\nReport Formats:",
        "\n  summary, json"
    )
}

#[derive(Parser)]
#[command(name = "podlock-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "CocoaPods lock manifest generator and diff tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success, no differences, or usage shown
    1  Differences detected
    2  Error occurred

EXAMPLES:
    # Local path declarations for the owners in repo_configs.json
    podlock-tools gen-pod --lock-path Podfile.lock --dep-way path --config-path repo_configs.json

    # Compare two lock files
    podlock-tools dif-pod --old-lock-path old/Podfile.lock --new-lock-path Podfile.lock

    # Compare only selected owners, as JSON
    podlock-tools dif-pod --old-lock-path a.lock --new-lock-path b.lock --config-path dif_libs.json -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `gen-pod` subcommand
///
/// Every input is optional at the parser level so that missing values can
/// be filled from the configuration file and reported together.
#[derive(Parser)]
#[command(after_help = "OWNER CONFIGURATION (--config-path):
    {
        \"AFNetworking\": {
            \"path\": \"../AFNetworking\",
            \"git_url\": \"https://github.com/AFNetworking/AFNetworking.git\",
            \"branch\": \"develop\"
        }
    }")]
struct GenPodArgs {
    /// Path to the Podfile.lock to read
    #[arg(long)]
    lock_path: Option<PathBuf>,

    /// Resolution strategy for generated declarations
    #[arg(long, value_enum)]
    dep_way: Option<Strategy>,

    /// Owner configuration JSON file
    #[arg(long)]
    config_path: Option<PathBuf>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `dif-pod` subcommand
#[derive(Parser)]
#[command(after_help = "ALLOW-LIST (--config-path):
    [\"AFNetworking\", \"SDWebImage\"]")]
struct DifPodArgs {
    /// Path to the old/baseline Podfile.lock
    #[arg(long)]
    old_lock_path: Option<PathBuf>,

    /// Path to the new Podfile.lock
    #[arg(long)]
    new_lock_path: Option<PathBuf>,

    /// Allow-list JSON array restricting the diff to these owners
    #[arg(long)]
    config_path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Podfile declarations from a lock manifest
    #[command(name = "gen-pod", alias = "gen_pod")]
    GenPod(GenPodArgs),

    /// Compare two lock manifests
    #[command(name = "dif-pod", alias = "dif_pod")]
    DifPod(DifPodArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .podlock-tools.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The config file may ask for quiet logging, so read it first
    let loaded = config::load_tool_config(cli.config.as_deref());
    let quiet = quiet_logging(&cli, &loaded);

    // Initialize logging; stdout is reserved for declarations and reports
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| log_level(cli.verbose, quiet).to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let tool = match loaded {
        Ok(tool) => tool,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(exit_codes::ERROR);
        }
    };
    if let Some((path, err)) = &tool.ignored {
        tracing::warn!("Failed to load config from {}: {}", path.display(), err);
    }
    if let Some(path) = &tool.source {
        tracing::debug!("Using config file {}", path.display());
    }
    let file_config = tool.config;
    let loaded_from = tool.source;

    let code = match cli.command {
        Commands::GenPod(args) => {
            let built = GenerateConfigBuilder::new()
                .lock_path(args.lock_path)
                .strategy(args.dep_way)
                .owner_config(args.config_path)
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .quiet(cli.quiet)
                .with_file_defaults(&file_config)
                .build();
            match built {
                Ok(config) => run_or_report(cli::run_generate(config)),
                Err(err) => usage(&err, "gen-pod"),
            }
        }

        Commands::DifPod(args) => {
            let built = DiffConfigBuilder::new()
                .old_path(args.old_lock_path)
                .new_path(args.new_lock_path)
                .allow_list(args.config_path)
                .output_format(args.output)
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .quiet(cli.quiet)
                .with_file_defaults(&file_config)
                .build();
            match built {
                Ok(config) => run_or_report(cli::run_diff(config)),
                Err(err) => usage(&err, "dif-pod"),
            }
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "podlock-tools", &mut io::stdout());
            exit_codes::SUCCESS
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            exit_codes::SUCCESS
        }

        Commands::Config { action } => {
            run_config(action, &file_config, loaded_from)?;
            exit_codes::SUCCESS
        }
    };

    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}

/// Quiet logging is on when either the flag or the config file asks for it.
fn quiet_logging(cli: &Cli, loaded: &podlock_tools::Result<ToolConfig>) -> bool {
    cli.quiet || loaded.as_ref().is_ok_and(|tool| tool.config.behavior.quiet)
}

/// Log filter for the verbosity flags; `--verbose` wins over quiet.
const fn log_level(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    }
}

/// Translate a handler outcome into an exit code, printing any error.
fn run_or_report(outcome: Result<i32>) -> i32 {
    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    }
}

/// Report missing inputs with the subcommand usage line.
fn usage(err: &PodToolsError, subcommand: &str) -> i32 {
    if !err.is_usage() {
        eprintln!("Error: {err}");
        return exit_codes::ERROR;
    }

    eprintln!("{err}");
    if let Some(line) = subcommand_usage(subcommand) {
        eprintln!("\n{line}");
    }
    exit_codes::SUCCESS
}

/// Usage line of a subcommand, qualified with the binary name.
fn subcommand_usage(subcommand: &str) -> Option<String> {
    let mut command = Cli::command();
    // Building propagates the binary name into subcommand usage
    command.build();
    command
        .find_subcommand_mut(subcommand)
        .map(|sub| sub.render_usage().to_string())
}

fn run_config(
    action: ConfigAction,
    file_config: &AppConfig,
    loaded_from: Option<PathBuf>,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            match &loaded_from {
                Some(path) => eprintln!("# Loaded from: {}", path.display()),
                None => eprintln!("# No config file found; showing defaults"),
            }
            for problem in file_config.validate() {
                eprintln!("# warning: {problem}");
            }
            let yaml = serde_yaml::to_string(file_config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            eprintln!("Config file search paths (in order):");
            for path in config::file::search_paths() {
                eprintln!("  {}", path.display());
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in config::file::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match loaded_from {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".podlock-tools.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(())
}
