//! pcs CLI - dump lines and tokens of pcs source files.
//!
//! Parses arguments with clap, initializes logging, loads configuration
//! and dispatches to the command handlers in `pcs_drv::commands`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pcs_drv::commands::{run_lines, run_tokens, LinesArgs, TokensArgs};
use pcs_drv::{Config, DrvError, OutputFormat};

/// pcs - a finite-state lexical scanner
#[derive(Parser, Debug)]
#[command(name = "pcs")]
#[command(author = "PCS Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Split source files into lexemes", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "PCS_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PCS_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "PCS_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the pcs CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every line of a file with its zero-based number
    Lines(LinesCommand),

    /// Print the lexemes of one or more files
    ///
    /// Unterminated strings are reported on stderr and left out of the
    /// listing.
    Tokens(TokensCommand),
}

/// Arguments for the lines subcommand.
#[derive(Parser, Debug)]
struct LinesCommand {
    /// File to list
    file: PathBuf,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Show line:column and kind for every lexeme
    #[arg(short, long)]
    kinds: bool,

    /// Exit with an error if any diagnostic is an error
    #[arg(long)]
    strict: bool,

    /// Number of files scanned in parallel
    #[arg(short, long)]
    jobs: Option<usize>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)?;
    Ok(())
}

/// Initialize the logging system.
///
/// Events go to stderr so they never mix with command output. `RUST_LOG`
/// overrides the level picked from `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> pcs_drv::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DrvError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> pcs_drv::Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: Config) -> pcs_drv::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Lines(args) => {
            run_lines(&LinesArgs { file: args.file }, &mut out)?;
        },
        Commands::Tokens(args) => {
            let tokens_args = TokensArgs {
                files: args.files,
                format: args.format,
                kinds: args.kinds,
                strict: args.strict,
                jobs: args.jobs,
            };
            let mut err = io::stderr();
            run_tokens(&tokens_args, &config.tokens, &mut out, &mut err)?;
        },
    }

    out.flush()?;
    Ok(())
}
