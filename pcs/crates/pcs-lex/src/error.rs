//! Errors surfaced by the strict scanning entry point.

use pcs_util::Span;
use thiserror::Error;

/// Error type for [`try_tokenize`](crate::try_tokenize).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The input ended inside a string literal.
    #[error("unterminated string literal starting at {span}")]
    UnterminatedString {
        /// Location of the opening quote through end of input.
        span: Span,
        /// The string text read before the input ran out, opening quote included.
        partial: String,
    },
}

/// Result type alias for scanning operations
pub type LexResult<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unterminated_display() {
        let err = LexError::UnterminatedString {
            span: Span::new(8, 12, 2, 3),
            partial: "\"abc".to_string(),
        };
        assert_eq!(err.to_string(), "unterminated string literal starting at 2:3");
    }
}
