//! pcs-util - Core utilities shared by the pcs scanner and its driver.
//!
//! - [`span`] - Source locations, source files and the source map
//! - [`diagnostic`] - Diagnostic collection and rendering
//! - [`error`] - Error types for the utilities in this crate
//! - [`text`] - Small string helpers

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod text;

// Re-export main types for convenience
pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
