//! Character classification for the scanner.
//!
//! Every character maps to exactly one [`CharClass`]. Only a fixed ASCII set
//! is recognized; everything else, including all non-ASCII characters, is
//! an identifier constituent ([`CharClass::Other`]).

/// Coarse class of a single input character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Space, tab or newline
    Whitespace,
    /// `0`-`9`
    Digit,
    /// One of `+ - * / < > = ! | &`
    OperatorSymbol,
    /// One of `{ } ( ) [ ]`
    Brace,
    /// `"`
    Quote,
    /// `;`
    Semicolon,
    /// Anything else; treated as part of an identifier
    Other,
}

/// Classify a character.
///
/// Total and constant-time: there is no error case.
///
/// # Example
///
/// ```
/// use pcs_lex::char_class::{classify, CharClass};
///
/// assert_eq!(classify('('), CharClass::Brace);
/// assert_eq!(classify('='), CharClass::OperatorSymbol);
/// assert_eq!(classify('_'), CharClass::Other);
/// assert_eq!(classify('\r'), CharClass::Other);
/// ```
#[inline]
pub const fn classify(c: char) -> CharClass {
    match c {
        '{' | '}' | '(' | ')' | '[' | ']' => CharClass::Brace,
        '"' => CharClass::Quote,
        ';' => CharClass::Semicolon,
        ' ' | '\t' | '\n' => CharClass::Whitespace,
        '+' | '-' | '*' | '/' | '<' | '>' | '=' | '!' | '|' | '&' => CharClass::OperatorSymbol,
        '0'..='9' => CharClass::Digit,
        _ => CharClass::Other,
    }
}

/// Returns true for `{ } ( ) [ ]`.
#[inline]
pub const fn is_brace(c: char) -> bool {
    matches!(classify(c), CharClass::Brace)
}

/// Returns true for `+ - * / < > = ! | &`.
#[inline]
pub const fn is_operator_symbol(c: char) -> bool {
    matches!(classify(c), CharClass::OperatorSymbol)
}

/// Returns true for the separators the scanner discards: space, tab, newline.
#[inline]
pub const fn is_whitespace(c: char) -> bool {
    matches!(classify(c), CharClass::Whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braces() {
        for c in "{}()[]".chars() {
            assert_eq!(classify(c), CharClass::Brace, "{c:?}");
        }
    }

    #[test]
    fn test_operator_symbols() {
        for c in "+-*/<>=!|&".chars() {
            assert_eq!(classify(c), CharClass::OperatorSymbol, "{c:?}");
        }
        assert!(!is_operator_symbol('%'));
        assert!(!is_operator_symbol('^'));
    }

    #[test]
    fn test_whitespace_set_is_exact() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\n'));
        assert!(!is_whitespace('\r'));
        assert!(!is_whitespace('\u{a0}'));
    }

    #[test]
    fn test_digits_are_ascii_only() {
        for c in '0'..='9' {
            assert_eq!(classify(c), CharClass::Digit);
        }
        assert_eq!(classify('٣'), CharClass::Other);
    }

    #[test]
    fn test_quote_and_semicolon() {
        assert_eq!(classify('"'), CharClass::Quote);
        assert_eq!(classify('\''), CharClass::Other);
        assert_eq!(classify(';'), CharClass::Semicolon);
        assert_eq!(classify(','), CharClass::Other);
    }

    #[test]
    fn test_every_ascii_char_has_a_class() {
        let classes: Vec<_> = (0u8..=127).map(|b| classify(b as char)).collect();
        let others = classes.iter().filter(|&&c| c == CharClass::Other).count();
        // 6 braces, 1 quote, 1 semicolon, 3 whitespace, 10 operators, 10 digits
        assert_eq!(others, 128 - 31);
        assert!(is_brace(']'));
    }
}
