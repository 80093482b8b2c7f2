//! Numeric literal scanning.

use super::{Lexer, TokenKind, is_ident_continue};
use crate::diagnostics::LexError;
use crate::source::Position;

impl<'a> Lexer<'a> {
    /// Scan an integer or real literal, including a leading sign when the dispatcher decided it belongs to the number.
    ///
    /// ## Notes
    /// - The whole digit/dot run is consumed before validation, so `1.2.3` is one error rather than a number followed
    ///   by stray tokens. A trailing letter run (`12ab`) is likewise consumed into the error.
    pub(super) fn scan_number(&mut self, start: Position) {
        if matches!(self.peek(), Some('+' | '-')) {
            self.advance();
        }

        let mut dots = 0usize;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {}
                '.' => dots += 1,
                _ => break,
            }
            self.advance();
        }

        let mut has_letters = false;
        while self.peek().is_some_and(is_ident_continue) {
            has_letters = true;
            self.advance();
        }

        let text = self.text_from(&start);
        let detail = if dots > 1 {
            Some(format!("Invalid number '{text}'. Multiple decimal points detected."))
        } else if has_letters {
            Some(format!(
                "Invalid number '{text}'. Numbers cannot contain alphabetic characters."
            ))
        } else {
            None
        };
        if let Some(detail) = detail {
            let err = LexError::InvalidNumber {
                detail,
                span: self.span_from(&start),
            };
            self.error(err);
            return;
        }

        let kind = if dots == 0 {
            text.parse::<i64>().ok().map(TokenKind::Integer)
        } else {
            text.parse::<f64>().ok().filter(|v| v.is_finite()).map(TokenKind::RealNumber)
        };
        match kind {
            Some(kind) => self.add_token(kind, &start),
            None => {
                let err = LexError::InvalidNumber {
                    detail: format!("Invalid number '{text}'. Value is out of range."),
                    span: self.span_from(&start),
                };
                self.error(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::LexError;
    use crate::lexer::{TokenKind, tokenize};

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_numbers() {
        let (tokens, errors) = tokenize("t.lit", "42 3.14 .5 7.");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Integer(42));
        assert!(matches!(tokens[1].kind, TokenKind::RealNumber(f) if (f - 3.14).abs() < 0.001));
        assert_eq!(tokens[2].kind, TokenKind::RealNumber(0.5));
        assert_eq!(tokens[3].kind, TokenKind::RealNumber(7.0));
        assert_eq!(tokens[3].lexeme, "7.");
    }

    #[test]
    fn test_multiple_decimal_points() {
        let (tokens, errors) = tokenize("t.lit", "1.2.3;");
        assert_eq!(tokens.len(), 2, "only ';' and EOF remain: {tokens:?}");
        match errors.as_slice() {
            [LexError::InvalidNumber { detail, span }] => {
                assert!(detail.contains("Multiple decimal points detected"));
                assert_eq!(span.range(), 0..5);
            }
            other => panic!("expected one InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_letters_in_number() {
        let (tokens, errors) = tokenize("t.lit", "12abc");
        assert_eq!(tokens.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("cannot contain alphabetic"));
    }

    #[test]
    fn test_integer_out_of_range() {
        let (_, errors) = tokenize("t.lit", "99999999999999999999");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("out of range"));
    }

    #[test]
    fn test_extreme_integers() {
        let (tokens, errors) = tokenize("t.lit", "-9223372036854775808 9223372036854775807");
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(tokens[0].kind, TokenKind::Integer(i64::MIN));
        assert_eq!(tokens[1].kind, TokenKind::Integer(i64::MAX));
    }
}
