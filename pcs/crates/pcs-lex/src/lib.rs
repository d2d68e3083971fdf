//! pcs-lex - Lexical scanner for pcs source text
//!
//! This crate turns a sequence of characters into a sequence of lexemes
//! using a single-pass, one-character finite-state machine. It does no
//! parsing and no file I/O: callers hand it text and get tokens back.
//!
//! # Example Usage
//!
//! ```
//! use pcs_lex::{tokenize, Tokenizer, TokenKind};
//! use pcs_util::Handler;
//!
//! // Just the texts
//! assert_eq!(tokenize("foo();"), vec!["foo", "(", ")", ";"]);
//!
//! // Or lexemes with spans and kinds, one at a time
//! let handler = Handler::new();
//! let mut tokenizer = Tokenizer::new("n = 42", &handler);
//! let first = tokenizer.next_lexeme().unwrap();
//! assert_eq!(first.text, "n");
//! assert_eq!(first.kind(), TokenKind::Identifier);
//! ```
//!
//! # Module Structure
//!
//! - [`char_class`] - Character classification
//! - [`state`] - The state machine and token buffer
//! - [`tokenizer`] - The scan driver
//! - [`token`] - Emitted lexemes and their kinds
//! - [`cursor`] - Character cursor with line/column tracking
//!
//! # Character Classes
//!
//! - **Whitespace**: space, tab, newline (separators, never emitted)
//! - **Digit**: `0`-`9`
//! - **Operator**: `+ - * / < > = ! | &`
//! - **Brace**: `{ } ( ) [ ]`
//! - **Quote**: `"`
//! - **Semicolon**: `;`
//! - **Other**: everything else, treated as identifier characters
//!
//! # Token Boundaries
//!
//! Each contiguous run of one class becomes one token, except that braces
//! are always single-character tokens and identifiers may contain digits
//! after their first character. Quoted strings are opaque: whitespace and
//! delimiters inside them do not split them. A string left open at end of
//! input is not emitted.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod char_class;
pub mod cursor;
pub mod error;
pub mod state;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use char_class::{classify, CharClass};
pub use cursor::{Cursor, Position};
pub use error::{LexError, LexResult};
pub use state::{LexState, TokenBuffer};
pub use token::{is_keyword, Lexeme, TokenKind, KEYWORDS};
pub use tokenizer::{tokenize, tokenize_lexemes, try_tokenize, Tokenizer};
