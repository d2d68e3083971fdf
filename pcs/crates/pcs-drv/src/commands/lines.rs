//! Lines command implementation.
//!
//! Prints every line of a file prefixed with its zero-based number.

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::render::render_lines;
use crate::session::Session;

/// Arguments for the lines command.
#[derive(Debug, Clone)]
pub struct LinesArgs {
    /// File to list.
    pub file: PathBuf,
}

/// Print `line N: text` for every line of `args.file`.
pub fn run_lines(args: &LinesArgs, out: &mut dyn Write) -> Result<()> {
    let session = Session::load(std::slice::from_ref(&args.file))?;
    for file in session.sources.iter() {
        debug!(file = file.name(), lines = file.line_count(), "listing lines");
        out.write_all(render_lines(file).as_bytes())?;
    }
    Ok(())
}
