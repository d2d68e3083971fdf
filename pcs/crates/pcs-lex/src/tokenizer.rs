//! The scan driver.
//!
//! [`Tokenizer`] owns the cursor, the current [`LexState`] and the
//! [`TokenBuffer`], and feeds every input character to [`step`] exactly
//! once. It can be drained lazily as an iterator or eagerly with
//! [`Tokenizer::scan_all`]; both produce the same lexemes in the same order.

use std::iter::FusedIterator;

use pcs_util::diagnostic::{DiagnosticBuilder, E_LEXER_UNTERMINATED_STRING};
use pcs_util::{FileId, Handler};
use tracing::{debug, trace, warn};

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::state::{finish, step, Finish, LexState, TokenBuffer};
use crate::token::Lexeme;

/// Single-pass scanner over one source text.
///
/// A string still open at end of input is not emitted. It is reported to
/// the handler as an error diagnostic and kept aside, see
/// [`Tokenizer::dropped`].
///
/// # Example
///
/// ```
/// use pcs_lex::Tokenizer;
/// use pcs_util::Handler;
///
/// let handler = Handler::new();
/// let mut tokenizer = Tokenizer::new("foo();", &handler);
///
/// let texts: Vec<_> = tokenizer.scan_all().into_iter().map(|l| l.text).collect();
/// assert_eq!(texts, vec!["foo", "(", ")", ";"]);
/// assert!(!handler.has_errors());
/// ```
pub struct Tokenizer<'a> {
    /// Character cursor for source traversal.
    cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    handler: &'a Handler,

    /// Current state of the machine.
    state: LexState,

    /// Characters accumulated since the last emission.
    buffer: TokenBuffer,

    /// File the emitted spans point into.
    file_id: FileId,

    /// Number of lexemes emitted so far.
    emitted: usize,

    /// The unterminated string discarded at end of input.
    dropped: Option<Lexeme>,

    /// Whether end of input has been processed.
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer for `source`, reporting into `handler`.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            state: LexState::Idle,
            buffer: TokenBuffer::new(),
            file_id: FileId::DUMMY,
            emitted: 0,
            dropped: None,
            finished: false,
        }
    }

    /// Tags every emitted span (and diagnostic) with `file_id`.
    pub fn with_file(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }

    /// The current state of the machine.
    pub fn state(&self) -> LexState {
        self.state
    }

    /// Returns the next completed lexeme, or `None` once the input is
    /// exhausted.
    pub fn next_lexeme(&mut self) -> Option<Lexeme> {
        while let Some((c, at)) = self.cursor.bump() {
            let (next, flushed) = step(self.state, c, at, &mut self.buffer);
            self.state = next;
            if let Some(lexeme) = flushed {
                return Some(self.emit(lexeme));
            }
        }

        if self.finished {
            return None;
        }
        self.finished = true;

        let state = std::mem::replace(&mut self.state, LexState::Idle);
        let last = match finish(state, &mut self.buffer) {
            Finish::Complete(pending) => pending.map(|lexeme| self.emit(lexeme)),
            Finish::UnterminatedString(partial) => {
                self.report_unterminated(partial);
                None
            },
        };
        debug!(
            tokens = self.emitted,
            bytes = self.cursor.offset(),
            "scan complete"
        );
        last
    }

    /// Drains the remaining input into a vector.
    pub fn scan_all(&mut self) -> Vec<Lexeme> {
        self.by_ref().collect()
    }

    /// The unterminated string that was left out of the output, if the
    /// input ended inside one. Only set once the input is exhausted.
    pub fn dropped(&self) -> Option<&Lexeme> {
        self.dropped.as_ref()
    }

    /// Takes the dropped unterminated string, if any.
    pub fn take_dropped(&mut self) -> Option<Lexeme> {
        self.dropped.take()
    }

    fn emit(&mut self, mut lexeme: Lexeme) -> Lexeme {
        lexeme.span = lexeme.span.with_file_id(self.file_id);
        self.emitted += 1;
        trace!(text = %lexeme.text, at = %lexeme.span, "emit");
        lexeme
    }

    fn report_unterminated(&mut self, mut partial: Lexeme) {
        partial.span = partial.span.with_file_id(self.file_id);
        warn!(at = %partial.span, "unterminated string literal dropped");
        DiagnosticBuilder::error("unterminated string literal")
            .code(E_LEXER_UNTERMINATED_STRING)
            .span(partial.span)
            .note("the partial string is not part of the token stream")
            .help("add a closing `\"`")
            .emit(self.handler);
        self.dropped = Some(partial);
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_lexeme()
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Scans `source` and returns the token texts in order.
///
/// An unterminated trailing string is silently left out.
///
/// # Example
///
/// ```
/// assert_eq!(pcs_lex::tokenize("12ab"), vec!["12", "ab"]);
/// assert_eq!(pcs_lex::tokenize("x = \"open"), vec!["x", "="]);
/// ```
pub fn tokenize(source: &str) -> Vec<String> {
    tokenize_lexemes(source)
        .into_iter()
        .map(|lexeme| lexeme.text)
        .collect()
}

/// Scans `source` and returns the lexemes with their spans.
///
/// An unterminated trailing string is silently left out.
pub fn tokenize_lexemes(source: &str) -> Vec<Lexeme> {
    let handler = Handler::new();
    Tokenizer::new(source, &handler).scan_all()
}

/// Scans `source`, failing if it ends inside a string literal.
///
/// # Example
///
/// ```
/// use pcs_lex::{try_tokenize, LexError};
///
/// assert_eq!(try_tokenize("a \"b\"").unwrap().len(), 2);
/// assert!(matches!(
///     try_tokenize("a \"b"),
///     Err(LexError::UnterminatedString { .. })
/// ));
/// ```
pub fn try_tokenize(source: &str) -> LexResult<Vec<Lexeme>> {
    let handler = Handler::new();
    let mut tokenizer = Tokenizer::new(source, &handler);
    let lexemes = tokenizer.scan_all();
    match tokenizer.take_dropped() {
        Some(partial) => Err(LexError::UnterminatedString {
            span: partial.span,
            partial: partial.text,
        }),
        None => Ok(lexemes),
    }
}
