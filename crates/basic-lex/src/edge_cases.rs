//! Edge case tests for basic-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize_with, LexerConfig, Token, TokenKind, Tokenizer, UnterminatedStringPolicy};
    use basic_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        tokenize_with(source, &mut handler)
    }

    fn pairs(source: &str) -> Vec<(TokenKind, String)> {
        lex_all(source)
            .into_iter()
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    fn pair(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all("  \t\r\n \x0B\x0C ").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(pairs("x"), vec![pair(TokenKind::Identifier, "x")]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&format!("LET {} = 1", name));
        assert_eq!(tokens[1].text(), name);
        assert_eq!(tokens[2].offset(), 10005);
    }

    #[test]
    fn test_edge_keyword_prefix_is_identifier() {
        assert_eq!(
            pairs("PRINT PRINTX IFFY ENDING"),
            vec![
                pair(TokenKind::Keyword, "PRINT"),
                pair(TokenKind::Identifier, "PRINTX"),
                pair(TokenKind::Identifier, "IFFY"),
                pair(TokenKind::Identifier, "ENDING"),
            ]
        );
    }

    #[test]
    fn test_edge_number_then_word() {
        assert_eq!(
            pairs("10PRINT"),
            vec![pair(TokenKind::Number, "10"), pair(TokenKind::Keyword, "PRINT")]
        );
    }

    #[test]
    fn test_edge_trailing_dot() {
        assert_eq!(
            pairs("3."),
            vec![pair(TokenKind::Number, "3"), pair(TokenKind::Unknown, ".")]
        );
    }

    #[test]
    fn test_edge_two_dots() {
        assert_eq!(
            pairs("3.1.4"),
            vec![
                pair(TokenKind::Number, "3.1"),
                pair(TokenKind::Unknown, "."),
                pair(TokenKind::Number, "4"),
            ]
        );
    }

    #[test]
    fn test_edge_leading_dot() {
        assert_eq!(
            pairs(".5"),
            vec![pair(TokenKind::Unknown, "."), pair(TokenKind::Number, "5")]
        );
    }

    #[test]
    fn test_edge_empty_string() {
        assert_eq!(pairs("\"\""), vec![pair(TokenKind::String, "\"\"")]);
    }

    #[test]
    fn test_edge_adjacent_strings() {
        assert_eq!(
            pairs("\"a\"\"b\""),
            vec![pair(TokenKind::String, "\"a\""), pair(TokenKind::String, "\"b\"")]
        );
    }

    #[test]
    fn test_edge_string_keeps_symbols() {
        assert_eq!(
            pairs("PRINT \"REM <> @\""),
            vec![
                pair(TokenKind::Keyword, "PRINT"),
                pair(TokenKind::String, "\"REM <> @\""),
            ]
        );
    }

    #[test]
    fn test_edge_string_never_spans_lines() {
        let tokens = lex_all("PRINT \"a\nb\"");
        assert!(tokens.iter().all(|t| !t.text().contains('\n')));
        assert_eq!(tokens[1], Token::new(TokenKind::Unknown, "\"", 6));
    }

    #[test]
    fn test_edge_extended_string_never_spans_lines() {
        let tokenizer = Tokenizer::new(
            LexerConfig::default().with_unterminated_strings(UnterminatedStringPolicy::ExtendToLineEnd),
        );
        let (tokens, diagnostics) = tokenizer.tokenize_collecting("PRINT \"a\r\nb\"");
        assert_eq!(tokens[1], Token::new(TokenKind::String, "\"a", 6));
        assert_eq!(tokens[2], Token::new(TokenKind::Identifier, "b", 10));
        assert_eq!(tokens[3], Token::new(TokenKind::String, "\"", 11));
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_edge_comment_at_end_without_newline() {
        assert_eq!(pairs("REM"), vec![pair(TokenKind::Comment, "REM")]);
    }

    #[test]
    fn test_edge_comment_swallows_line() {
        assert_eq!(
            pairs("REM LET X = \"1\" @\nLET"),
            vec![
                pair(TokenKind::Comment, "REM LET X = \"1\" @"),
                pair(TokenKind::Keyword, "LET"),
            ]
        );
    }

    #[test]
    fn test_edge_comment_mid_line() {
        assert_eq!(
            pairs("10 REM note"),
            vec![pair(TokenKind::Number, "10"), pair(TokenKind::Comment, "REM note")]
        );
    }

    #[test]
    fn test_edge_lowercase_rem() {
        assert_eq!(
            pairs("rem note"),
            vec![pair(TokenKind::Keyword, "REM"), pair(TokenKind::Identifier, "note")]
        );
    }

    #[test]
    fn test_edge_relational_split_by_space() {
        assert_eq!(
            pairs("< = > ="),
            vec![
                pair(TokenKind::Operator, "<"),
                pair(TokenKind::Operator, "="),
                pair(TokenKind::Operator, ">"),
                pair(TokenKind::Operator, "="),
            ]
        );
    }

    #[test]
    fn test_edge_reversed_relational() {
        assert_eq!(
            pairs("=<"),
            vec![pair(TokenKind::Operator, "="), pair(TokenKind::Operator, "<")]
        );
    }

    #[test]
    fn test_edge_all_operators() {
        let tokens = lex_all("<> <= >= = + - * / < >");
        assert_eq!(tokens.len(), 10);
        assert!(tokens.iter().all(|t| t.kind() == TokenKind::Operator));
    }

    #[test]
    fn test_edge_all_delimiters() {
        let tokens = lex_all("(,)");
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| t.kind() == TokenKind::Delimiter));
    }

    #[test]
    fn test_edge_unknown_characters() {
        let mut handler = Handler::new();
        let tokens = tokenize_with("X$ = 1; #", &mut handler);
        let unknown: Vec<&str> = tokens
            .iter()
            .filter(|t| t.is_unknown())
            .map(Token::text)
            .collect();
        assert_eq!(unknown, vec!["$", ";", "#"]);
        assert_eq!(handler.error_count(), 3);
    }

    #[test]
    fn test_edge_non_ascii_letters_are_unknown() {
        assert_eq!(
            pairs("Ä1"),
            vec![pair(TokenKind::Unknown, "Ä"), pair(TokenKind::Number, "1")]
        );
    }

    #[test]
    fn test_edge_offsets_after_multibyte() {
        let tokens = lex_all("PRINT \"日本\" X");
        assert_eq!(tokens[2].offset(), 11);
    }

    #[test]
    fn test_edge_crlf_program() {
        let tokens = lex_all("LET X = 1\r\nPRINT X\r\n");
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[4].offset(), 11);
    }

    #[test]
    fn test_edge_non_breaking_space_is_not_whitespace() {
        assert_eq!(
            pairs("X\u{A0}Y"),
            vec![
                pair(TokenKind::Identifier, "X"),
                pair(TokenKind::Unknown, "\u{A0}"),
                pair(TokenKind::Identifier, "Y"),
            ]
        );
    }
}
