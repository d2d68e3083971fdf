//! pcs-drv - Command-line driver for the pcs scanner
//!
//! Loads source files into a [`Session`], runs the tokenizer over each one
//! and formats the result. The `pcs` binary is a thin clap front end over
//! the functions in [`commands`].
//!
//! Configuration is read from `pcs.toml` (see [`config`]); command-line
//! flags override it.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

pub use config::{Config, OutputFormat, TokensConfig};
pub use error::{DrvError, Result};
pub use session::{ScannedFile, Session};
