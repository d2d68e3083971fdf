//! The scanner's finite-state machine.
//!
//! [`step`] is the whole transition table: given the current [`LexState`],
//! one input character and the [`TokenBuffer`], it returns the next state
//! and the lexeme completed by this character, if any. The machine looks at
//! exactly one character and never backtracks.
//!
//! Boundary rules:
//! - a token is flushed *before* the character that ends it is appended,
//!   so that character starts the next token;
//! - whitespace outside a string ends the current token and is discarded;
//! - a closing quote is appended and flushes the string at once;
//! - braces are always single-character tokens, every other class munches
//!   maximally (`==`, `123`, `;;`).

use pcs_util::Span;

use crate::char_class::{classify, CharClass};
use crate::cursor::Position;
use crate::token::Lexeme;

/// The machine's current mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexState {
    /// Between tokens. Initial state, and the state after any flush.
    Idle,
    /// Accumulating identifier characters (digits allowed after the first).
    InIdentifier,
    /// Accumulating operator symbols.
    InOperator,
    /// Holding one brace character.
    InBrace,
    /// Accumulating semicolons.
    InSemicolon,
    /// Accumulating digits.
    InNumber,
    /// Inside a quoted string; everything is appended until the closing quote.
    InString,
}

impl LexState {
    /// True for the token-accumulating states: every state except `Idle`
    /// and `InString`.
    #[inline]
    pub fn is_accumulating(self) -> bool {
        !matches!(self, LexState::Idle | LexState::InString)
    }

    /// The state a non-whitespace character of `class` leads to from here.
    fn target(self, class: CharClass) -> LexState {
        match class {
            CharClass::Quote => LexState::InString,
            CharClass::Semicolon => LexState::InSemicolon,
            CharClass::OperatorSymbol => LexState::InOperator,
            CharClass::Brace => LexState::InBrace,
            CharClass::Digit if self == LexState::InIdentifier => LexState::InIdentifier,
            CharClass::Digit => LexState::InNumber,
            CharClass::Other | CharClass::Whitespace => LexState::InIdentifier,
        }
    }
}

/// Characters accumulated since the last emission.
#[derive(Debug, Default)]
pub struct TokenBuffer {
    text: String,
    start: Option<Position>,
    end: usize,
}

impl TokenBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `c`, read at `at`.
    pub fn push(&mut self, c: char, at: Position) {
        if self.start.is_none() {
            self.start = Some(at);
        }
        self.text.push(c);
        self.end = at.offset + c.len_utf8();
    }

    /// True if nothing has been accumulated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The accumulated text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Takes the accumulated text as a lexeme produced in `origin`, leaving
    /// the buffer empty. Returns `None` if the buffer was already empty.
    pub fn flush(&mut self, origin: LexState) -> Option<Lexeme> {
        let start = self.start.take()?;
        let text = std::mem::take(&mut self.text);
        Some(Lexeme {
            text,
            span: Span::new(start.offset, self.end, start.line, start.column),
            origin,
        })
    }

    /// Discards the accumulated text.
    pub fn clear(&mut self) {
        self.text.clear();
        self.start = None;
    }
}

/// Feeds one character to the machine.
///
/// Returns the next state and the lexeme this character completed, if any.
///
/// # Example
///
/// ```
/// use pcs_lex::cursor::Position;
/// use pcs_lex::state::{step, LexState, TokenBuffer};
///
/// let mut buffer = TokenBuffer::new();
/// let (state, flushed) = step(LexState::Idle, 'x', Position::START, &mut buffer);
/// assert_eq!(state, LexState::InIdentifier);
/// assert!(flushed.is_none());
///
/// let at = Position { offset: 1, line: 1, column: 2 };
/// let (state, flushed) = step(state, ';', at, &mut buffer);
/// assert_eq!(state, LexState::InSemicolon);
/// assert_eq!(flushed.unwrap().text, "x");
/// assert_eq!(buffer.as_str(), ";");
/// ```
pub fn step(
    state: LexState,
    c: char,
    at: Position,
    buffer: &mut TokenBuffer,
) -> (LexState, Option<Lexeme>) {
    let class = classify(c);
    match state {
        LexState::InString => {
            buffer.push(c, at);
            if class == CharClass::Quote {
                (LexState::Idle, buffer.flush(LexState::InString))
            } else {
                (LexState::InString, None)
            }
        },
        LexState::Idle => {
            if class == CharClass::Whitespace {
                return (LexState::Idle, None);
            }
            buffer.push(c, at);
            (state.target(class), None)
        },
        _ => {
            if class == CharClass::Whitespace {
                return (LexState::Idle, buffer.flush(state));
            }
            let next = state.target(class);
            let flushed = if next != state || next == LexState::InBrace {
                buffer.flush(state)
            } else {
                None
            };
            buffer.push(c, at);
            (next, flushed)
        },
    }
}

/// How the input ended, as reported by [`finish`].
#[derive(Debug, PartialEq, Eq)]
pub enum Finish {
    /// Nothing was pending, or a pending token was flushed.
    Complete(Option<Lexeme>),
    /// A string was still open; this is its partial text.
    UnterminatedString(Lexeme),
}

/// Ends the scan, flushing whatever the buffer holds.
///
/// A pending string is not a completed token and comes back as
/// [`Finish::UnterminatedString`] so the caller decides what to do with it.
pub fn finish(state: LexState, buffer: &mut TokenBuffer) -> Finish {
    match state {
        LexState::Idle => {
            buffer.clear();
            Finish::Complete(None)
        },
        LexState::InString => match buffer.flush(LexState::InString) {
            Some(partial) => Finish::UnterminatedString(partial),
            None => Finish::Complete(None),
        },
        _ => Finish::Complete(buffer.flush(state)),
    }
}
