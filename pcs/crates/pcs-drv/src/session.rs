//! Scanning session.
//!
//! A [`Session`] owns the loaded sources and runs one tokenizer per file,
//! each with its own diagnostic handler.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pcs_lex::{Lexeme, Tokenizer};
use pcs_util::{Diagnostic, FileId, Level, SourceFile, SourceMap};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{DrvError, Result};

/// Result of scanning a single file.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// File the lexemes belong to.
    pub file_id: FileId,
    /// Display name of the file.
    pub name: String,
    /// Emitted lexemes in source order.
    pub lexemes: Vec<Lexeme>,
    /// Diagnostics reported while scanning.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScannedFile {
    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }
}

/// Loaded sources for one invocation.
#[derive(Debug, Default)]
pub struct Session {
    /// Every loaded file, in load order.
    pub sources: SourceMap,
}

impl Session {
    /// An empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every path into a fresh session.
    ///
    /// Fails on the first file that cannot be read.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        if paths.is_empty() {
            return Err(DrvError::NoInputFiles);
        }

        let mut session = Self::new();
        for path in paths {
            session.load_file(path.as_ref())?;
        }
        Ok(session)
    }

    /// Read one file and register it.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn load_file(&mut self, path: &Path) -> Result<FileId> {
        let bytes = std::fs::read(path).map_err(|source| DrvError::Open {
            path: PathBuf::from(path),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            warn!(path = %path.display(), "invalid UTF-8 replaced");
        }
        debug!(path = %path.display(), bytes = bytes.len(), "loaded source");
        Ok(self.add_source(path.display().to_string(), content.into_owned()))
    }

    /// Register in-memory source text.
    pub fn add_source(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        self.sources.add_file(name, content)
    }

    /// Tokenize every loaded file.
    ///
    /// With more than one file and `jobs > 1` the files are scanned on a
    /// dedicated thread pool. Results are always in load order.
    pub fn tokenize(&self, jobs: usize) -> Result<Vec<ScannedFile>> {
        let files: Vec<Arc<SourceFile>> = self.sources.iter().cloned().collect();

        let results: Vec<ScannedFile> = if files.len() > 1 && jobs > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()?;
            pool.install(|| files.par_iter().map(|file| scan_file(file)).collect())
        } else {
            files.iter().map(|file| scan_file(file)).collect()
        };

        info!(
            files = results.len(),
            lexemes = results.iter().map(|r| r.lexemes.len()).sum::<usize>(),
            errors = results.iter().map(ScannedFile::error_count).sum::<usize>(),
            "session tokenized"
        );
        Ok(results)
    }
}

fn scan_file(file: &SourceFile) -> ScannedFile {
    let handler = pcs_util::Handler::new();
    let lexemes = Tokenizer::new(file.content(), &handler)
        .with_file(file.id())
        .scan_all();
    debug!(file = file.name(), lexemes = lexemes.len(), "scanned file");

    ScannedFile {
        file_id: file.id(),
        name: file.name().to_string(),
        lexemes,
        diagnostics: handler.into_diagnostics(),
    }
}
