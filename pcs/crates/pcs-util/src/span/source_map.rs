//! Source map for managing source files and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing multiple source files
//! and looking up their lines for rendering.

use std::sync::Arc;

use super::FileId;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use pcs_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.pcs", "x = 1;\ny = 2;\n");
/// assert_eq!(file.name(), "main.pcs");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_at(2), Some("y = 2;"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute the starting byte offset of each line.
    ///
    /// A trailing newline terminates the last line instead of opening an
    /// empty one, and an empty file has no lines at all.
    fn line_starts(content: &str) -> Arc<[usize]> {
        if content.is_empty() {
            return Arc::from(Vec::new());
        }
        std::iter::once(0)
            .chain(
                content
                    .match_indices('\n')
                    .map(|(i, _)| i + 1)
                    .filter(|&start| start < content.len()),
            )
            .collect()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get a specific source line (1-indexed), without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Iterate over all lines in order, without their line terminators
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        (1..=self.line_count()).filter_map(move |line| self.line_at(line))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use pcs_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.pcs", "foo();");
    /// assert_eq!(file.extract_range(0, 3).unwrap(), "foo");
    /// assert!(file.extract_range(4, 2).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        if !self.content.is_char_boundary(start) || !self.content.is_char_boundary(end) {
            return Err(SourceMapError::ExtractFailed(
                "Range is not on character boundaries".to_string(),
            ));
        }

        Ok(&self.content[start..end])
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A source map managing multiple source files
///
/// # Examples
///
/// ```
/// use pcs_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let file_id = map.add_file("main.pcs", "foo();");
/// let file = map.get(file_id).unwrap();
/// assert_eq!(file.name(), "main.pcs");
/// ```
#[derive(Debug, Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create a new empty source map
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a file and return its identifier
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        self.files.push(Arc::new(SourceFile::new(id, name, content)));
        FileId(id)
    }

    /// Look up a file by identifier
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.index()).cloned()
    }

    /// Number of files in the map
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Iterate over files in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<SourceFile>> {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_ignores_trailing_newline() {
        let file = SourceFile::new(0, "a", "one\ntwo\n");
        assert_eq!(file.line_count(), 2);
        assert_eq!(file.lines().collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn test_line_count_without_trailing_newline() {
        let file = SourceFile::new(0, "a", "one\ntwo");
        assert_eq!(file.line_count(), 2);
        assert_eq!(file.line_at(2), Some("two"));
    }

    #[test]
    fn test_empty_file_has_no_lines() {
        let file = SourceFile::new(0, "a", "");
        assert_eq!(file.line_count(), 0);
        assert_eq!(file.lines().count(), 0);
        assert_eq!(file.line_at(1), None);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let file = SourceFile::new(0, "a", "a\n\nb\n");
        assert_eq!(file.lines().collect::<Vec<_>>(), vec!["a", "", "b"]);
    }

    #[test]
    fn test_crlf_is_trimmed() {
        let file = SourceFile::new(0, "a", "a\r\nb\r\n");
        assert_eq!(file.line_at(1), Some("a"));
        assert_eq!(file.line_at(2), Some("b"));
    }

    #[test]
    fn test_extract_range_errors() {
        let file = SourceFile::new(0, "a", "héllo");
        assert!(matches!(
            file.extract_range(0, 99),
            Err(SourceMapError::SpanOutOfBounds { .. })
        ));
        assert!(matches!(
            file.extract_range(2, 3),
            Err(SourceMapError::ExtractFailed(_))
        ));
    }

    #[test]
    fn test_source_map_lookup() {
        let mut map = SourceMap::new();
        let a = map.add_file("a.pcs", "x");
        let b = map.add_file("b.pcs", "y");
        assert_eq!(map.file_count(), 2);
        assert_eq!(map.get(b).unwrap().content(), "y");
        assert_eq!(map.get(a).unwrap().id(), a);
        assert!(map.get(FileId(9)).is_none());
    }
}
