//! Command modules for the pcs CLI.
//!
//! Each subcommand lives in its own file and writes its output to the
//! writers it is handed, so tests can capture it.

pub mod lines;
pub mod tokens;

pub use lines::{run_lines, LinesArgs};
pub use tokens::{run_tokens, TokensArgs, TokensOptions};
