/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `peek_at`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Error recovery (`synchronize`)
///
/// Most functions in this file are internal (`fn`) and are documented primarily
/// to aid maintenance and onboarding.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    /// Return the token `offset` positions ahead without consuming anything. `COMMENT` tokens are not counted.
    fn peek_at(&self, offset: usize) -> &Token {
        self.tokens
            .get(self.pos..)
            .unwrap_or_default()
            .iter()
            .filter(|t| !t.kind.is_comment())
            .nth(offset)
            .unwrap_or(&self.eof)
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// At `EOF` nothing is consumed and the `EOF` token is returned.
    fn advance(&mut self) -> &Token {
        if self.is_at_end() {
            return self.peek();
        }
        let consumed = self.pos;
        self.pos += 1;
        self.skip_comments();
        &self.tokens[consumed]
    }

    /// Move `pos` past any `COMMENT` tokens so it always rests on code or the end of the slice.
    fn skip_comments(&mut self) {
        while self.tokens.get(self.pos).is_some_and(|t| t.kind.is_comment()) {
            self.pos += 1;
        }
    }

    /// Return the most recently consumed token, if any.
    fn previous(&self) -> Option<&Token> {
        self.tokens
            .get(..self.pos)
            .unwrap_or_default()
            .iter()
            .rev()
            .find(|t| !t.kind.is_comment())
    }

    fn current_span(&self) -> Span {
        self.peek().span.clone()
    }

    /// Span from `start` to the end of the most recently consumed token.
    fn span_from(&self, start: &Span) -> Span {
        match self.previous() {
            Some(prev) if prev.span.end.idx >= start.start.idx => start.merge(&prev.span),
            _ => start.clone(),
        }
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<Span, ParseError> {
        if self.check_keyword(id) {
            Ok(self.advance().span.clone())
        } else {
            Err(self.unexpected(&format!("'{}'", keywords::as_str(id))))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, expected: &str) -> Result<Span, ParseError> {
        if self.check_punct(id) {
            Ok(self.advance().span.clone())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Expect the `)` that closes an already-opened parenthesis.
    fn expect_closing_paren(&mut self) -> Result<Span, ParseError> {
        if self.check_punct(PunctuationId::RParen) {
            Ok(self.advance().span.clone())
        } else {
            Err(ParseError::MissingClosingParenthesis {
                span: self.current_span(),
            })
        }
    }

    /// Build an [`ParseError::UnexpectedToken`] for the current token.
    fn unexpected(&self, expected: &str) -> ParseError {
        let found = self.peek();
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: found.describe(),
            span: found.span.clone(),
        }
    }

    /// Run `rule` one nesting level deeper.
    ///
    /// Past [`MAX_NESTING_DEPTH`] the rule is not entered and [`ParseError::NestingTooDeep`] is returned at the
    /// current token, so adversarial input cannot exhaust the stack.
    fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> Result<T, ParseError>) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                span: self.current_span(),
            });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Return `true` if the current token can begin a statement the parser has a rule for.
    fn is_at_statement_start(&self) -> bool {
        match &self.peek().kind {
            TokenKind::DataType(_) | TokenKind::Identifier(_) => true,
            TokenKind::Keyword(id) => keywords::starts_statement(*id),
            _ => false,
        }
    }

    /// Skip ahead to a statement boundary after an error.
    ///
    /// Stops just past a `;`, or before a `}` or a statement-start token. If the failed statement consumed nothing,
    /// one token is skipped first so the parser always makes progress. A `{` skipped here is skipped together with
    /// everything up to its matching `}`.
    fn synchronize(&mut self, statement_start: usize) {
        tracing::trace!(at = %self.peek().describe(), "synchronizing");
        let mut depth = 0usize;
        if self.pos == statement_start {
            self.skip_token(&mut depth);
        }
        while !self.is_at_end() {
            if depth == 0 {
                if self
                    .previous()
                    .is_some_and(|t| t.kind.is_punctuation(PunctuationId::Semicolon))
                {
                    return;
                }
                if self.check_punct(PunctuationId::RCurly) || self.is_at_statement_start() {
                    return;
                }
            }
            self.skip_token(&mut depth);
        }
    }

    fn skip_token(&mut self, depth: &mut usize) {
        if self.check_punct(PunctuationId::LCurly) {
            *depth += 1;
        } else if self.check_punct(PunctuationId::RCurly) {
            *depth = depth.saturating_sub(1);
        }
        self.advance();
    }
}
