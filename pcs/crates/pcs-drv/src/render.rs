//! Output formatting for scan results.

use pcs_util::{SourceFile, SourceMap};
use serde::Serialize;

use crate::error::Result;
use crate::session::ScannedFile;

/// One token as written by the JSON format.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TokenRecord<'a> {
    /// Lexeme text as it appeared in the source.
    pub text: &'a str,
    /// Lowercase kind name.
    pub kind: &'static str,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
    /// Start byte offset.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

/// One file as written by the JSON format.
#[derive(Debug, Serialize)]
pub struct FileRecord<'a> {
    /// Display name of the file.
    pub file: &'a str,
    /// Tokens in source order.
    pub tokens: Vec<TokenRecord<'a>>,
}

impl<'a> From<&'a ScannedFile> for FileRecord<'a> {
    fn from(scanned: &'a ScannedFile) -> Self {
        let tokens = scanned
            .lexemes
            .iter()
            .map(|lexeme| TokenRecord {
                text: lexeme.as_str(),
                kind: lexeme.kind().as_str(),
                line: lexeme.span.line,
                column: lexeme.span.column,
                start: lexeme.span.start,
                end: lexeme.span.end,
            })
            .collect();
        Self {
            file: &scanned.name,
            tokens,
        }
    }
}

/// List a file's lines, numbered from zero.
pub fn render_lines(file: &SourceFile) -> String {
    file.lines()
        .enumerate()
        .map(|(n, line)| format!("line {}: {}\n", n, line))
        .collect()
}

/// One lexeme per line.
///
/// With `show_kinds`, each line is `line:column<TAB>kind<TAB>text`.
/// Several files are separated by `==> name <==` headers.
pub fn render_text(results: &[ScannedFile], show_kinds: bool) -> String {
    let mut out = String::new();
    let headers = results.len() > 1;

    for (i, scanned) in results.iter().enumerate() {
        if headers {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("==> {} <==\n", scanned.name));
        }
        for lexeme in &scanned.lexemes {
            if show_kinds {
                out.push_str(&format!(
                    "{}\t{}\t{}\n",
                    lexeme.span,
                    lexeme.kind(),
                    lexeme.text
                ));
            } else {
                out.push_str(&lexeme.text);
                out.push('\n');
            }
        }
    }
    out
}

/// Pretty-printed JSON array of files and their tokens.
pub fn render_json(results: &[ScannedFile]) -> Result<String> {
    let records: Vec<FileRecord<'_>> = results.iter().map(FileRecord::from).collect();
    let mut json = serde_json::to_string_pretty(&records)?;
    json.push('\n');
    Ok(json)
}

/// All diagnostics of all files, rendered against their sources.
pub fn render_diagnostics(results: &[ScannedFile], sources: &SourceMap) -> String {
    results
        .iter()
        .flat_map(|scanned| &scanned.diagnostics)
        .map(|diag| diag.render(sources))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn scan(files: &[(&str, &str)]) -> (Session, Vec<ScannedFile>) {
        let mut session = Session::new();
        for (name, content) in files {
            session.add_source(*name, *content);
        }
        let results = session.tokenize(1).unwrap();
        (session, results)
    }

    #[test]
    fn test_render_lines_from_zero() {
        let file = SourceFile::new(0, "a.pcs", "first\nsecond\n");
        assert_eq!(render_lines(&file), "line 0: first\nline 1: second\n");
    }

    #[test]
    fn test_render_lines_empty_file() {
        let file = SourceFile::new(0, "empty.pcs", "");
        assert_eq!(render_lines(&file), "");
    }

    #[test]
    fn test_render_text_plain() {
        let (_, results) = scan(&[("a.pcs", "foo();")]);
        assert_eq!(render_text(&results, false), "foo\n(\n)\n;\n");
    }

    #[test]
    fn test_render_text_with_kinds() {
        let (_, results) = scan(&[("a.pcs", "let x\n= 42;")]);
        let text = render_text(&results, true);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "1:1\tkeyword\tlet");
        assert_eq!(lines[2], "2:1\toperator\t=");
        assert_eq!(lines[3], "2:3\tnumber\t42");
    }

    #[test]
    fn test_render_text_headers_for_many_files() {
        let (_, results) = scan(&[("a.pcs", "a"), ("b.pcs", "b")]);
        assert_eq!(
            render_text(&results, false),
            "==> a.pcs <==\na\n\n==> b.pcs <==\nb\n"
        );
    }

    #[test]
    fn test_render_json_shape() {
        let (_, results) = scan(&[("a.pcs", "x =\n  \"s\";")]);
        let json = render_json(&results).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["file"], "a.pcs");
        let tokens = value[0]["tokens"].as_array().unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2]["text"], "\"s\"");
        assert_eq!(tokens[2]["kind"], "string");
        assert_eq!(tokens[2]["line"], 2);
        assert_eq!(tokens[2]["column"], 3);
        assert_eq!(tokens[2]["start"], 6);
        assert_eq!(tokens[2]["end"], 9);
    }

    #[test]
    fn test_token_record_positions() {
        let (_, results) = scan(&[("a.pcs", "a\n\n   b")]);
        let record = FileRecord::from(&results[0]);
        assert_eq!(record.file, "a.pcs");
        assert_eq!(
            record.tokens[1],
            TokenRecord {
                text: "b",
                kind: "identifier",
                line: 3,
                column: 4,
                start: 6,
                end: 7,
            }
        );
    }

    #[test]
    fn test_render_diagnostics_for_unterminated_string() {
        let (session, results) = scan(&[("bad.pcs", "x = \"open")]);
        let rendered = render_diagnostics(&results, &session.sources);
        assert!(rendered.starts_with("error[E0101]: unterminated string literal"));
        assert!(rendered.contains("--> bad.pcs:1:5"));
    }

    #[test]
    fn test_render_diagnostics_empty_when_clean() {
        let (session, results) = scan(&[("ok.pcs", "x;")]);
        assert_eq!(render_diagnostics(&results, &session.sources), "");
    }
}
