//! Emitted lexemes and their post-hoc kinds.
//!
//! The state machine only ever produces raw text; a [`TokenKind`] is
//! attached afterwards from the lexeme text and the state that produced it.

use std::fmt;

use pcs_util::Span;

use crate::state::LexState;

/// Reserved words recognized by [`TokenKind::classify`].
pub const KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "do", "return", "break", "continue", "fn", "let", "var",
    "const", "struct", "true", "false",
];

/// Returns true if `text` is one of [`KEYWORDS`].
///
/// # Example
///
/// ```
/// use pcs_lex::token::is_keyword;
///
/// assert!(is_keyword("while"));
/// assert!(!is_keyword("While"));
/// ```
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

/// Kind of an emitted lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of identifier characters that is not a keyword
    Identifier,
    /// An identifier run that matches [`KEYWORDS`]
    Keyword,
    /// A run of digits
    Number,
    /// A quoted string, quotes included
    String,
    /// A run of operator symbols such as `==` or `<=`
    Operator,
    /// A single brace, bracket or parenthesis
    Brace,
    /// A run of semicolons
    Semicolon,
}

impl TokenKind {
    /// Derive a kind from a lexeme and the state it was accumulated in.
    ///
    /// `LexState::Idle` never emits; it falls back to `Identifier`, the same
    /// default the character classifier uses.
    pub fn classify(text: &str, origin: LexState) -> TokenKind {
        match origin {
            LexState::InIdentifier | LexState::Idle => {
                if is_keyword(text) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                }
            },
            LexState::InNumber => TokenKind::Number,
            LexState::InString => TokenKind::String,
            LexState::InOperator => TokenKind::Operator,
            LexState::InBrace => TokenKind::Brace,
            LexState::InSemicolon => TokenKind::Semicolon,
        }
    }

    /// Lowercase name used in rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Operator => "operator",
            TokenKind::Brace => "brace",
            TokenKind::Semicolon => "semicolon",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token emitted by the scanner: its exact source text plus location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    /// The characters of the token, exactly as they appeared.
    pub text: String,
    /// Where the token sits in the source.
    pub span: Span,
    /// The state the token was accumulated in.
    pub origin: LexState,
}

impl Lexeme {
    /// Kind of this lexeme.
    ///
    /// # Example
    ///
    /// ```
    /// use pcs_lex::{tokenize_lexemes, TokenKind};
    ///
    /// let kinds: Vec<_> = tokenize_lexemes("if x1 >= 10").iter().map(|l| l.kind()).collect();
    /// assert_eq!(
    ///     kinds,
    ///     vec![TokenKind::Keyword, TokenKind::Identifier, TokenKind::Operator, TokenKind::Number]
    /// );
    /// ```
    pub fn kind(&self) -> TokenKind {
        TokenKind::classify(&self.text, self.origin)
    }

    /// The lexeme text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_identifier_vs_keyword() {
        assert_eq!(
            TokenKind::classify("return", LexState::InIdentifier),
            TokenKind::Keyword
        );
        assert_eq!(
            TokenKind::classify("returns", LexState::InIdentifier),
            TokenKind::Identifier
        );
    }

    #[test]
    fn test_classify_follows_origin() {
        assert_eq!(TokenKind::classify("42", LexState::InNumber), TokenKind::Number);
        assert_eq!(TokenKind::classify("\"if\"", LexState::InString), TokenKind::String);
        assert_eq!(TokenKind::classify("||", LexState::InOperator), TokenKind::Operator);
        assert_eq!(TokenKind::classify("{", LexState::InBrace), TokenKind::Brace);
        assert_eq!(TokenKind::classify(";;", LexState::InSemicolon), TokenKind::Semicolon);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Operator.to_string(), "operator");
        assert_eq!(TokenKind::Keyword.as_str(), "keyword");
    }

    #[test]
    fn test_lexeme_display_is_text() {
        let lexeme = Lexeme {
            text: "foo".to_string(),
            span: Span::new(0, 3, 1, 1),
            origin: LexState::InIdentifier,
        };
        assert_eq!(lexeme.to_string(), "foo");
        assert_eq!(lexeme.as_str(), "foo");
    }
}
