//! Tokens command implementation.
//!
//! Scans one or more files and prints their lexemes in text or JSON form.
//! Diagnostics go to the error writer; in strict mode any error diagnostic
//! fails the command after the listing has been written.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::{OutputFormat, TokensConfig};
use crate::error::{DrvError, Result};
use crate::render::{render_diagnostics, render_json, render_text};
use crate::session::{ScannedFile, Session};

/// Arguments for the tokens command.
///
/// `None` and `false` fall back to the configuration file.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Files to scan, in output order.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: Option<OutputFormat>,
    /// Print position and kind next to each lexeme.
    pub kinds: bool,
    /// Fail on error diagnostics.
    pub strict: bool,
    /// Number of files scanned in parallel.
    pub jobs: Option<usize>,
}

/// Effective settings after merging arguments over configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokensOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Print position and kind next to each lexeme.
    pub show_kinds: bool,
    /// Fail on error diagnostics.
    pub strict: bool,
    /// Worker count, at least one.
    pub jobs: usize,
}

impl TokensOptions {
    /// Command-line flags win over configuration values.
    pub fn resolve(args: &TokensArgs, config: &TokensConfig) -> Self {
        Self {
            format: args.format.unwrap_or(config.format),
            show_kinds: args.kinds || config.show_kinds,
            strict: args.strict || config.strict,
            jobs: args.jobs.unwrap_or(config.jobs).max(1),
        }
    }
}

/// Scan `args.files` and write the listing to `out`.
pub fn run_tokens(
    args: &TokensArgs,
    config: &TokensConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let start_time = Instant::now();
    let options = TokensOptions::resolve(args, config);
    debug!(?options, "resolved tokens options");

    let session = Session::load(args.files.as_slice())?;
    let results = session.tokenize(options.jobs)?;

    err.write_all(render_diagnostics(&results, &session.sources).as_bytes())?;

    let listing = match options.format {
        OutputFormat::Text => render_text(&results, options.show_kinds),
        OutputFormat::Json => render_json(&results)?,
    };
    out.write_all(listing.as_bytes())?;

    let errors: usize = results.iter().map(ScannedFile::error_count).sum();
    info!(
        files = results.len(),
        errors,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "tokens complete"
    );

    if options.strict && errors > 0 {
        return Err(DrvError::Diagnostics { count: errors });
    }
    Ok(())
}
