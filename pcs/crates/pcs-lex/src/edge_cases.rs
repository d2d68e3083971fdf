//! Edge case tests for pcs-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, tokenize_lexemes, try_tokenize, LexState, TokenKind};

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(tokenize("x"), vec!["x"]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = tokenize(&format!("{} = 1;", name));
        assert_eq!(t[0], name);
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn test_edge_adjacent_braces() {
        assert_eq!(tokenize("{[()]}"), vec!["{", "[", "(", ")", "]", "}"]);
    }

    #[test]
    fn test_edge_brace_then_semicolon() {
        assert_eq!(tokenize(");"), vec![")", ";"]);
    }

    #[test]
    fn test_edge_operator_runs_munch() {
        assert_eq!(tokenize("a<=b"), vec!["a", "<=", "b"]);
        assert_eq!(tokenize("x=-1"), vec!["x", "=-", "1"]);
        assert_eq!(tokenize("!!&&||"), vec!["!!&&||"]);
    }

    #[test]
    fn test_edge_semicolons_munch() {
        assert_eq!(tokenize("for(;;)"), vec!["for", "(", ";;", ")"]);
    }

    #[test]
    fn test_edge_identifier_with_digits() {
        assert_eq!(tokenize("x1y2 3z"), vec!["x1y2", "3", "z"]);
    }

    #[test]
    fn test_edge_unknown_ascii_is_identifier() {
        assert_eq!(tokenize("a.b,c#d"), vec!["a.b,c#d"]);
        assert_eq!(tokenize("%^"), vec!["%^"]);
    }

    #[test]
    fn test_edge_carriage_return_is_not_whitespace() {
        assert_eq!(tokenize("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn test_edge_non_ascii_is_identifier() {
        let lexemes = tokenize_lexemes("größe=λ");
        let texts: Vec<_> = lexemes.iter().map(|l| l.as_str()).collect();
        assert_eq!(texts, vec!["größe", "=", "λ"]);
        assert_eq!(lexemes[1].span.start, "größe".len());
        assert_eq!(lexemes[2].span.column, 7);
    }

    #[test]
    fn test_edge_empty_string() {
        let lexemes = tokenize_lexemes("\"\"");
        assert_eq!(lexemes.len(), 1);
        assert_eq!(lexemes[0].text, "\"\"");
        assert_eq!(lexemes[0].kind(), TokenKind::String);
    }

    #[test]
    fn test_edge_string_with_newline() {
        let lexemes = tokenize_lexemes("\"a\nb\" c");
        assert_eq!(lexemes[0].text, "\"a\nb\"");
        assert_eq!(lexemes[1].span.line, 2);
    }

    #[test]
    fn test_edge_adjacent_strings() {
        assert_eq!(tokenize("\"a\"\"b\""), vec!["\"a\"", "\"b\""]);
    }

    #[test]
    fn test_edge_string_glued_to_identifiers() {
        assert_eq!(tokenize("ab\"cd\"ef"), vec!["ab", "\"cd\"", "ef"]);
    }

    #[test]
    fn test_edge_lone_quote() {
        assert!(tokenize("\"").is_empty());
        let err = try_tokenize("\"").unwrap_err();
        assert_eq!(err.to_string(), "unterminated string literal starting at 1:1");
    }

    #[test]
    fn test_edge_unterminated_after_tokens() {
        assert_eq!(tokenize("x; \"rest of file\nmore"), vec!["x", ";"]);
    }

    #[test]
    fn test_edge_trailing_token_flushed_at_end() {
        let lexemes = tokenize_lexemes("a + 99");
        assert_eq!(lexemes.last().map(|l| l.origin), Some(LexState::InNumber));
        assert_eq!(lexemes.last().map(|l| l.as_str()), Some("99"));
    }

    #[test]
    fn test_edge_keyword_prefix_is_identifier() {
        let kinds: Vec<_> = tokenize_lexemes("iffy if").iter().map(|l| l.kind()).collect();
        assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::Keyword]);
    }

    #[test]
    fn test_edge_keyword_inside_string_is_string() {
        let kinds: Vec<_> = tokenize_lexemes("\"while\"").iter().map(|l| l.kind()).collect();
        assert_eq!(kinds, vec![TokenKind::String]);
    }
}
