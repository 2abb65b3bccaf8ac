//! advisory-diff: structural diff of security advisory documents
//!
//! Compares two directories of per-package advisory documents and reports
//! which packages, advisories and timeline events were added or removed.

use advisory_diff::{
    cli,
    config::{self, AppConfig, DiffConfigBuilder, ValidateConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "advisory-diff")]
#[command(version)]
#[command(about = "Structural diff of security advisory documents", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (no changes, or changes without --fail-on-change)
    1  Changes detected with --fail-on-change
    2  Error occurred

EXAMPLES:
    # Compare two checkouts of an advisories repository
    advisory-diff diff old/ new/

    # CI check limited to one package
    advisory-diff diff old/ new/ --package ko --fail-on-change

    # Markdown for a pull request comment
    advisory-diff diff old/ new/ -o markdown -O diff.md")]
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
    #[arg(long, global = true, env = "ADVISORY_DIFF_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Directory holding the old (baseline) advisory documents
    old: PathBuf,

    /// Directory holding the new advisory documents
    new: PathBuf,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Only compare this package (repeatable)
    #[arg(short, long = "package", value_name = "NAME")]
    packages: Vec<String>,

    /// Exit with code 1 if any changes detected
    #[arg(long)]
    fail_on_change: bool,
}

/// Arguments for the `validate` subcommand
#[derive(Parser)]
struct ValidateArgs {
    /// Directory of advisory documents
    dir: PathBuf,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Only validate this package (repeatable)
    #[arg(short, long = "package", value_name = "NAME")]
    packages: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two directories of advisory documents
    Diff(DiffArgs),

    /// Load a directory of advisory documents and report what it contains
    Validate(ValidateArgs),

    /// Print an example config file, the config JSON schema, or the effective config
    Config {
        /// Print the JSON Schema for the config file format
        #[arg(long)]
        schema: bool,

        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print the discovered config file path
    Path,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        // Reports go to stdout; keep logs out of them.
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    if exit_code != exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
}

/// Layer CLI flags over the discovered config file.
fn effective_config(
    cli: &Cli,
    output: Option<ReportFormat>,
    output_file: Option<PathBuf>,
    packages: Vec<String>,
) -> AppConfig {
    let mut overrides = AppConfig::builder()
        .output_file(output_file)
        .no_color(cli.no_color)
        .quiet(cli.quiet)
        .packages(packages)
        .build();
    if let Some(format) = output {
        overrides.output.format = format;
    }

    let (mut config, loaded_from) = config::load_or_default(cli.config.as_deref());
    if let Some(path) = loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }
    config.merge(&overrides);
    // An explicit format always wins, even when it is the default one
    if let Some(format) = output {
        config.output.format = format;
    }
    config
}

fn check_config(config: &AppConfig) -> Result<()> {
    use advisory_diff::Validatable;

    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow::bail!("invalid configuration: {}", messages.join("; "))
}

fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Diff(args) => {
            let mut app = effective_config(
                &cli,
                args.output,
                args.output_file.clone(),
                args.packages.clone(),
            );
            app.behavior.fail_on_change |= args.fail_on_change;
            check_config(&app)?;
            let config = DiffConfigBuilder::from_app_config(app)
                .old_path(args.old.clone())
                .new_path(args.new.clone())
                .build()?;
            cli::run_diff(config)
        }

        Commands::Validate(args) => {
            let app = effective_config(
                &cli,
                args.output,
                args.output_file.clone(),
                args.packages.clone(),
            );
            check_config(&app)?;
            cli::run_validate(ValidateConfig {
                path: args.dir.clone(),
                output: app.output,
                loader: app.loader,
            })
        }

        Commands::Config { schema, action } => {
            match (*schema, action.as_ref()) {
                (true, _) => {
                    println!(
                        "{}",
                        config::generate_json_schema().context("failed to generate schema")?
                    );
                }
                (false, None) => print!("{}", config::generate_example_config()),
                (false, Some(ConfigAction::Show)) => {
                    let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                    match &loaded_from {
                        Some(path) => eprintln!("# Loaded from: {}", path.display()),
                        None => eprintln!("# No config file found; showing defaults"),
                    }
                    let yaml =
                        serde_yaml::to_string(&config).context("failed to serialize config")?;
                    print!("{yaml}");
                }
                (false, Some(ConfigAction::Path)) => {
                    match config::discover_config_file(cli.config.as_deref()) {
                        Some(path) => println!("{}", path.display()),
                        None => eprintln!("No config file found."),
                    }
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "advisory-diff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}
