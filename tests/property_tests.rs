//! Property-based tests for the TanglawPL front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use tanglaw::diagnostics::{LexError, ParseError};
use tanglaw::lexer::{self, Token, TokenCategory, TokenKind};
use tanglaw::parser::MAX_NESTING_DEPTH;
use tanglaw::{FrontendConfig, analyze};

fn categories(tokens: &[Token]) -> Vec<TokenCategory> {
    tokens.iter().map(Token::category).collect()
}

// =============================================================================
// Numeric literal properties
// =============================================================================

#[cfg(test)]
mod number_tests {
    use super::*;

    fn integer_strategy() -> impl Strategy<Value = String> {
        prop_oneof![Just("0".to_string()), "-?[1-9][0-9]{0,15}"]
    }

    proptest! {
        /// Property: an integer literal lexes to exactly one INTEGER token holding its value
        #[test]
        fn integers_round_trip(text in integer_strategy()) {
            let (tokens, errors) = lexer::tokenize("prop.lit", &text);
            prop_assert!(errors.is_empty(), "{:?}", errors);
            let expected: i64 = text.parse().unwrap();
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(&tokens[0].kind, &TokenKind::Integer(expected));
        }

        /// Property: a digit run with one dot is one REAL_NUMBER token
        #[test]
        fn one_dot_is_real(text in "[0-9]{1,6}\\.[0-9]{1,6}") {
            let (tokens, errors) = lexer::tokenize("prop.lit", &text);
            prop_assert!(errors.is_empty(), "{:?}", errors);
            prop_assert_eq!(categories(&tokens), vec![TokenCategory::RealNumber, TokenCategory::Eof]);
        }

        /// Property: two dots is an invalid number and yields no numeric token
        #[test]
        fn two_dots_is_invalid(text in "[0-9]{1,4}\\.[0-9]{1,4}\\.[0-9]{0,4}") {
            let (tokens, errors) = lexer::tokenize("prop.lit", &text);
            prop_assert!(matches!(errors[..], [LexError::InvalidNumber { .. }]), "{:?}", errors);
            prop_assert_eq!(categories(&tokens), vec![TokenCategory::Eof]);
        }
    }
}

// =============================================================================
// Token stream properties
// =============================================================================

#[cfg(test)]
mod token_stream_tests {
    use super::*;

    /// Source snippets without string/char literals or comments, whose lexemes survive re-joining.
    fn snippet_strategy() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "x", "total", "int", "double", "if", "while", "areaOf", "cm", "true", "false", "0", "42", "-7", "3.14",
            "+", "-", "*", "/", "**", "<=", "<<=", "==", "&&", "!", "++", "(", ")", "{", "}", ";", ",", "=", "+=",
        ])
    }

    fn source_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(snippet_strategy(), 0..40).prop_map(|parts| parts.join(" "))
    }

    proptest! {
        /// Property: re-tokenizing the space-joined lexemes yields the same categories
        #[test]
        fn retokenizing_lexemes_is_stable(source in source_strategy()) {
            let (tokens, errors) = lexer::tokenize("prop.lit", &source);
            prop_assert!(errors.is_empty(), "{:?}", errors);

            let joined = tokens
                .iter()
                .filter(|t| t.kind != TokenKind::Eof)
                .map(|t| t.lexeme.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let (again, errors) = lexer::tokenize("prop.lit", &joined);
            prop_assert!(errors.is_empty(), "{:?}", errors);
            prop_assert_eq!(categories(&tokens), categories(&again));
        }

        /// Property: the lexer terminates on any input, ends with exactly one EOF, and emits ordered in-bounds spans
        #[test]
        fn lexer_is_total(source in "\\PC{0,200}") {
            let (tokens, _) = lexer::tokenize("prop.lit", &source);
            prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
            prop_assert_eq!(&tokens.last().unwrap().kind, &TokenKind::Eof);

            let mut last_start = 0;
            for tok in &tokens {
                let range = tok.span.range();
                prop_assert!(range.start <= range.end && range.end <= source.len());
                prop_assert!(range.start >= last_start);
                last_start = range.start;
            }
        }

        /// Property: the parser never panics and always returns a (possibly partial) program
        #[test]
        fn parser_is_total(source in "\\PC{0,200}") {
            let analysis = analyze("prop.lit", &source, &FrontendConfig::default());
            prop_assert!(analysis.program.is_some());
        }

        /// Property: snippet soup exercises the parser's recovery without panicking
        #[test]
        fn parser_recovers_from_snippet_soup(source in source_strategy()) {
            let analysis = analyze("prop.lit", &source, &FrontendConfig::default());
            prop_assert!(analysis.program.is_some());
            prop_assert!(analysis.lex_errors.is_empty());
        }

        /// Property: nesting of any depth yields at most one depth error and never exhausts the stack
        #[test]
        fn nesting_of_any_depth_is_total(depth in 0usize..4_000, shape in 0usize..4) {
            let analysis = analyze("prop.lit", &nested_source(shape, depth), &FrontendConfig::default());
            prop_assert!(analysis.program.is_some());
            prop_assert!(analysis.lex_errors.is_empty());
            prop_assert!(analysis.parse_errors.len() <= 1, "{:?}", analysis.parse_errors);
            prop_assert!(
                analysis
                    .parse_errors
                    .iter()
                    .all(|e| matches!(e, ParseError::NestingTooDeep { .. })),
                "{:?}",
                analysis.parse_errors
            );
        }
    }

    /// Source nested `depth` levels deep in one of four shapes.
    fn nested_source(shape: usize, depth: usize) -> String {
        match shape {
            0 => format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth)),
            1 => format!("x = 2{};", "**2".repeat(depth)),
            2 => format!("b = {}x;", "!".repeat(depth)),
            _ => format!("{}{}", "if (1) {".repeat(depth), "}".repeat(depth)),
        }
    }

    #[test]
    fn deep_nesting_reports_error_instead_of_overflowing() {
        for shape in 0..4 {
            let analysis = analyze("deep.lit", &nested_source(shape, 200_000), &FrontendConfig::default());
            assert_eq!(analysis.parse_errors.len(), 1, "shape {shape}: {:?}", analysis.parse_errors);
            assert!(matches!(
                analysis.parse_errors[0],
                ParseError::NestingTooDeep { limit, .. } if limit == MAX_NESTING_DEPTH
            ));
        }
    }

    #[test]
    fn shallow_nesting_parses_cleanly() {
        for shape in 0..4 {
            let analysis = analyze("shallow.lit", &nested_source(shape, 16), &FrontendConfig::default());
            assert!(!analysis.has_errors(), "shape {shape}: {:?}", analysis.diagnostics());
        }
    }
}
