/// Expression parsing methods.
///
/// Binary operators use precedence climbing driven by the operator registry. Precedence and associativity are looked
/// up by operator id, so a `-` the lexer classified as `UNARY` still parses as subtraction in binary position.
///
/// ```text
/// expr         := factor (BINOP factor)*
/// factor       := PREFIX_OP factor | literal | '(' expr ')' | reservedForm
///               | memberAccess ('(' args ')' | '++' | '--')?
/// memberAccess := name ('.' name)*
/// ```
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expr>, ParseError> {
        self.binary(1)
    }

    /// Parse a chain of binary operators whose precedence is at least `min_prec`.
    fn binary(&mut self, min_prec: u8) -> Result<Spanned<Expr>, ParseError> {
        self.nested(|p| p.binary_inner(min_prec))
    }

    fn binary_inner(&mut self, min_prec: u8) -> Result<Spanned<Expr>, ParseError> {
        let mut lhs = self.factor()?;

        while let Some((op, prec)) = self.binary_operator() {
            if prec < min_prec {
                break;
            }
            self.advance();

            let next_min = match operators::associativity(op) {
                Associativity::Left => prec + 1,
                Associativity::Right => prec,
            };
            let rhs = self.binary(next_min)?;
            let span = lhs.span.merge(&rhs.span);
            let node = if operators::class(op) == OperatorClass::Logical {
                Expr::Logical(Box::new(lhs), op, Box::new(rhs))
            } else {
                Expr::Binary(Box::new(lhs), op, Box::new(rhs))
            };
            lhs = Spanned::new(node, span);
        }

        Ok(lhs)
    }

    /// The current token's operator and binary precedence, if it can join two operands.
    fn binary_operator(&self) -> Option<(OperatorId, u8)> {
        let op = self.peek().kind.operator_id()?;
        operators::precedence(op).map(|prec| (op, prec))
    }

    fn factor(&mut self) -> Result<Spanned<Expr>, ParseError> {
        self.nested(Self::factor_inner)
    }

    fn factor_inner(&mut self) -> Result<Spanned<Expr>, ParseError> {
        let start = self.current_span();

        if let Some(operator) = self.prefix_operator() {
            self.advance();
            let operand = self.factor()?;
            return Ok(Spanned::new(
                Expr::Unary {
                    operator,
                    operand: Box::new(operand),
                    postfix: false,
                },
                self.span_from(&start),
            ));
        }

        if let Some(lit) = self.literal_at_cursor() {
            self.advance();
            return Ok(Spanned::new(Expr::Literal(lit), start));
        }

        if self.match_punct(PunctuationId::LParen) {
            let inner = self.expression()?;
            self.expect_closing_paren()?;
            return Ok(Spanned::new(Expr::Grouped(Box::new(inner)), self.span_from(&start)));
        }

        if let Some(word) = self.peek().kind.reserved_word_id() {
            if self.peek_at(1).kind.is_punctuation(PunctuationId::LParen) {
                return self.reserved_form(word);
            }
        }

        if self.is_name() {
            let path = self.member_access()?;
            return self.postfix(path);
        }

        Err(self.unexpected("an expression"))
    }

    /// Apply a call or a postfix `++`/`--` to a member-access path.
    fn postfix(&mut self, path: Spanned<Expr>) -> Result<Spanned<Expr>, ParseError> {
        let start = path.span.clone();

        if self.check_punct(PunctuationId::LParen) {
            let args = self.arguments()?;
            return Ok(Spanned::new(
                Expr::Call(FunctionCall {
                    callee: Box::new(path),
                    args,
                }),
                self.span_from(&start),
            ));
        }

        if let Some(operator) = self.increment_operator() {
            self.advance();
            return Ok(Spanned::new(
                Expr::Unary {
                    operator,
                    operand: Box::new(path),
                    postfix: true,
                },
                self.span_from(&start),
            ));
        }

        Ok(path)
    }

    /// `name ('.' name)*` where a name is an identifier, keyword, or reserved word.
    fn member_access(&mut self) -> Result<Spanned<Expr>, ParseError> {
        let start = self.current_span();
        let first = self.name_segment("an identifier")?;

        let mut rest = Vec::new();
        while self.match_punct(PunctuationId::Dot) {
            rest.push(self.name_segment("a member name after '.'")?);
        }

        let node = if rest.is_empty() {
            Expr::Identifier(first)
        } else {
            let mut segments = Vec::with_capacity(rest.len() + 1);
            segments.push(first);
            segments.extend(rest);
            Expr::MemberAccess(segments)
        };
        Ok(Spanned::new(node, self.span_from(&start)))
    }

    fn prefix_operator(&self) -> Option<OperatorId> {
        self.peek().kind.operator_id().filter(|op| operators::is_prefix(*op))
    }

    fn increment_operator(&self) -> Option<OperatorId> {
        self.peek()
            .kind
            .operator_id()
            .filter(|op| matches!(op, OperatorId::Increment | OperatorId::Decrement))
    }
}
