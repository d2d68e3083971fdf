//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for diagnostics.

/// A location in the source: byte offset plus 1-based line and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

impl Position {
    /// The position of the first character of any source.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };
}

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use pcs_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
///
/// let (c, at) = cursor.bump().unwrap();
/// assert_eq!((c, at.line, at.column), ('a', 1, 1));
/// cursor.bump();
/// let (c, at) = cursor.bump().unwrap();
/// assert_eq!((c, at.offset, at.line, at.column), ('b', 2, 2, 1));
/// assert!(cursor.bump().is_none());
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Position of the next character to be read.
    position: Position,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: Position::START,
        }
    }

    /// Returns the character at the cursor without consuming it.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.source[self.position.offset..].chars().next()
    }

    /// Returns true if every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position.offset >= self.source.len()
    }

    /// Position of the next character to be read.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Consumes one character, returning it with the position it was read at.
    ///
    /// `\n` moves to the start of the next line; every other character,
    /// `\r` included, advances the column by one.
    pub fn bump(&mut self) -> Option<(char, Position)> {
        let c = self.current_char()?;
        let at = self.position;

        self.position.offset += c.len_utf8();
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }

        Some((c, at))
    }
}

impl Iterator for Cursor<'_> {
    type Item = (char, Position);

    fn next(&mut self) -> Option<Self::Item> {
        self.bump()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), None);
        assert!(cursor.bump().is_none());
        assert_eq!(cursor.position(), Position::START);
    }

    #[test]
    fn test_line_and_column_tracking() {
        let mut cursor = Cursor::new("ab\n\ncd");
        let positions: Vec<_> = cursor.by_ref().map(|(_, at)| (at.line, at.column)).collect();
        assert_eq!(
            positions,
            vec![(1, 1), (1, 2), (1, 3), (2, 1), (3, 1), (3, 2)]
        );
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut cursor = Cursor::new("é=ü");
        assert_eq!(cursor.bump().map(|(c, at)| (c, at.offset)), Some(('é', 0)));
        assert_eq!(cursor.bump().map(|(c, at)| (c, at.offset)), Some(('=', 2)));
        assert_eq!(cursor.bump().map(|(c, at)| (c, at.column)), Some(('ü', 3)));
        assert_eq!(cursor.offset(), "é=ü".len());
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_carriage_return_is_a_column() {
        let mut cursor = Cursor::new("a\r\nb");
        cursor.bump();
        let (c, at) = cursor.bump().unwrap();
        assert_eq!((c, at.line, at.column), ('\r', 1, 2));
        cursor.bump();
        assert_eq!(cursor.line(), 2);
    }
}
