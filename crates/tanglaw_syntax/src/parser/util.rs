// Small shared parsing utilities.
//
// These helpers are used across multiple parser chunks.

impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// `'(' (expr (',' expr)*)? ')'`
    fn arguments(&mut self) -> Result<Vec<Spanned<Expr>>, ParseError> {
        self.expect_punct(PunctuationId::LParen, "'('")?;
        let mut args = Vec::new();

        if !self.check_punct(PunctuationId::RParen) {
            args.push(self.expression()?);
            while self.match_punct(PunctuationId::Comma) {
                args.push(self.expression()?);
            }
        }

        self.expect_closing_paren()?;
        Ok(args)
    }

    /// Return `true` if the current token can be a member-access segment.
    fn is_name(&self) -> bool {
        is_name_kind(&self.peek().kind)
    }

    /// Consume one member-access segment and return its spelling.
    fn name_segment(&mut self, expected: &str) -> Result<Ident, ParseError> {
        if self.is_name() {
            Ok(self.advance().lexeme.clone())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn string_literal(&mut self) -> Result<String, ParseError> {
        match &self.peek().kind {
            TokenKind::StringLiteral(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(self.unexpected("a string literal")),
        }
    }

    /// Literal value of the current token, without consuming it.
    fn literal_at_cursor(&self) -> Option<Literal> {
        match &self.peek().kind {
            TokenKind::Integer(v) => Some(Literal::Integer(*v)),
            TokenKind::RealNumber(v) => Some(Literal::Real(*v)),
            TokenKind::StringLiteral(s) => Some(Literal::String(s.clone())),
            TokenKind::CharacterLiteral(c) => Some(Literal::Character(*c)),
            TokenKind::Boolean(b) => Some(Literal::Boolean(*b)),
            _ => None,
        }
    }

    /// Look ahead over `name ('.' name)*` and report whether an assignment operator follows.
    fn path_is_assigned(&self) -> bool {
        let mut offset = 0;
        loop {
            if !is_name_kind(&self.peek_at(offset).kind) {
                return false;
            }
            offset += 1;
            if self.peek_at(offset).kind.is_punctuation(PunctuationId::Dot) {
                offset += 1;
            } else {
                break;
            }
        }
        self.peek_at(offset).kind.assignment_id().is_some()
    }
}

fn is_name_kind(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier(_) | TokenKind::Keyword(_) | TokenKind::ReservedWord(_)
    )
}
