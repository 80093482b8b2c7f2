//! String and character literal scanning.
//!
//! Both literal forms share one escape table: `\n`, `\t`, `\"`, `\'`, `\\`. Any other escaped character stands for
//! itself (`\q` is `q`).

use super::{Lexer, TokenKind};
use crate::diagnostics::LexError;
use crate::source::Position;

fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        other => other,
    }
}

impl<'a> Lexer<'a> {
    /// Scan a `"`-delimited string. An unterminated string is reported from the opening quote to end of input and
    /// produces no token.
    pub(super) fn scan_string(&mut self, start: Position) {
        self.advance();
        let mut value = String::new();

        loop {
            match self.advance() {
                Some('"') => break,
                Some('\\') => match self.advance() {
                    Some(c) => value.push(unescape(c)),
                    None => return self.unclosed_string(start),
                },
                Some(c) => value.push(c),
                None => return self.unclosed_string(start),
            }
        }

        self.add_token_with_lexeme(TokenKind::StringLiteral(value.clone()), value, &start);
    }

    fn unclosed_string(&mut self, start: Position) {
        let err = LexError::UnclosedString {
            span: self.span_from(&start),
        };
        self.error(err);
    }

    /// Scan a `'`-delimited character literal holding exactly one (possibly escaped) character.
    pub(super) fn scan_char(&mut self, start: Position) {
        self.advance();

        let value = match self.peek() {
            None | Some('\'') => {
                self.match_char('\'');
                return self.bad_char(
                    start,
                    "Character literal is empty. A character literal must contain exactly one character.".to_string(),
                );
            }
            Some('\n') => {
                return self.bad_char(start, "Unclosed character literal.".to_string());
            }
            Some('\\') => {
                self.advance();
                match self.advance() {
                    Some(c) => unescape(c),
                    None => return self.bad_char(start, "Unclosed character literal starting with '\\'.".to_string()),
                }
            }
            Some(c) => {
                self.advance();
                c
            }
        };

        if self.match_char('\'') {
            self.add_token_with_lexeme(TokenKind::CharacterLiteral(value), value.to_string(), &start);
            return;
        }

        // Look for a closing quote on the same line to tell "too long" apart from "never closed".
        let mut content = value.to_string();
        let source = self.source;
        let rest = &source[self.pos.idx..];
        let line_end = rest.find('\n').unwrap_or(rest.len());
        if rest[..line_end].contains('\'') {
            while let Some(c) = self.advance() {
                if c == '\'' {
                    break;
                }
                content.push(c);
            }
            self.bad_char(
                start,
                format!(
                    "Character literal '{content}' is invalid. A character literal must contain exactly one character."
                ),
            );
        } else {
            self.bad_char(start, format!("Unclosed character literal starting with '{value}'."));
        }
    }

    fn bad_char(&mut self, start: Position, detail: String) {
        let err = LexError::UnclosedCharacterLiteral {
            detail,
            span: self.span_from(&start),
        };
        self.error(err);
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::LexError;
    use crate::lexer::{TokenKind, tokenize};

    #[test]
    fn test_strings_with_escapes() {
        let (tokens, errors) = tokenize("t.lit", r#""a\tb\"c\\" "x\qy""#);
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral("a\tb\"c\\".to_string()));
        assert_eq!(tokens[0].lexeme, "a\tb\"c\\");
        assert_eq!(tokens[1].kind, TokenKind::StringLiteral("xqy".to_string()));
    }

    #[test]
    fn test_unclosed_string_runs_to_end() {
        let (tokens, errors) = tokenize("t.lit", "\"abc");
        assert_eq!(tokens.len(), 1, "no STRING_LITERAL token expected");
        match errors.as_slice() {
            [LexError::UnclosedString { span }] => assert_eq!(span.range(), 0..4),
            other => panic!("expected one UnclosedString, got {other:?}"),
        }
    }

    #[test]
    fn test_char_literals() {
        let (tokens, errors) = tokenize("t.lit", r"'a' '\n' '\''");
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(tokens[0].kind, TokenKind::CharacterLiteral('a'));
        assert_eq!(tokens[1].kind, TokenKind::CharacterLiteral('\n'));
        assert_eq!(tokens[2].kind, TokenKind::CharacterLiteral('\''));
    }

    #[test]
    fn test_char_literal_errors() {
        let detail = |src: &str| {
            let (_, errors) = tokenize("t.lit", src);
            assert_eq!(errors.len(), 1, "{src:?}: {errors:?}");
            errors[0].to_string()
        };
        assert!(detail("''").contains("is empty"));
        assert!(detail("'").contains("is empty"));
        assert!(detail("'ab'").contains("exactly one character"));
        assert!(detail("'a\nx").starts_with("Unclosed character literal"));
    }

    #[test]
    fn test_overlong_char_consumes_through_quote() {
        let (tokens, _) = tokenize("t.lit", "'abc' x");
        assert_eq!(tokens[0].kind, TokenKind::Identifier("x".to_string()));
    }
}
