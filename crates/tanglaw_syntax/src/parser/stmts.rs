/// Statement parsing methods.
///
/// This chunk implements statement-level constructs:
/// - Control flow (`if`/`else`, `while`, `for`, `repeat ... times`)
/// - Output and input (`print`, `println`, `input`)
/// - Assignments, calls, and expression statements
/// - Blocks and in-block error recovery
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Spanned<Statement>, ParseError> {
        self.nested(Self::statement_inner)
    }

    fn statement_inner(&mut self) -> Result<Spanned<Statement>, ParseError> {
        match &self.peek().kind {
            TokenKind::DataType(_) => self.declaration(true),
            TokenKind::Keyword(KeywordId::If) => {
                let cond = self.conditional()?;
                let span = cond.span.clone();
                Ok(Spanned::new(Statement::Conditional(cond.node), span))
            }
            TokenKind::Keyword(KeywordId::While) => self.while_loop(),
            TokenKind::Keyword(KeywordId::For) => self.for_loop(),
            TokenKind::Keyword(KeywordId::Repeat) => self.repeat_loop(),
            TokenKind::Keyword(KeywordId::Print | KeywordId::Println) => self.output_statement(),
            TokenKind::Keyword(KeywordId::Input) => self.input_statement(),
            _ => {
                let stmt = self.simple_statement()?;
                self.expect_punct(PunctuationId::Semicolon, "';'")?;
                Ok(stmt)
            }
        }
    }

    /// Assignment, call or expression, without the trailing `;`.
    ///
    /// A member-access path followed by an assignment operator is an assignment; everything else is parsed as an
    /// expression, and a lone call expression becomes [`Statement::Call`].
    fn simple_statement(&mut self) -> Result<Spanned<Statement>, ParseError> {
        if self.path_is_assigned() {
            return self.assignment();
        }

        let expr = self.expression()?;
        let span = expr.span.clone();
        let stmt = match expr.node {
            Expr::Call(call) => Statement::Call(call),
            node => Statement::Expression(Spanned::new(node, span.clone())),
        };
        Ok(Spanned::new(stmt, span))
    }

    fn assignment(&mut self) -> Result<Spanned<Statement>, ParseError> {
        let target = self.member_access()?;
        let Some(operator) = self.peek().kind.assignment_id() else {
            return Err(self.unexpected("an assignment operator"));
        };
        self.advance();
        let value = self.expression()?;
        let span = target.span.merge(&value.span);
        Ok(Spanned::new(
            Statement::Assignment(Assignment {
                target,
                operator,
                value,
            }),
            span,
        ))
    }

    /// `if (cond) block (else (if ... | block))?`
    fn conditional(&mut self) -> Result<Spanned<ConditionalStatement>, ParseError> {
        self.nested(Self::conditional_inner)
    }

    fn conditional_inner(&mut self) -> Result<Spanned<ConditionalStatement>, ParseError> {
        let start = self.expect_keyword(KeywordId::If)?;
        self.expect_punct(PunctuationId::LParen, "'(' after 'if'")?;
        let condition = self.expression()?;
        self.expect_closing_paren()?;
        let block = self.block()?;
        let if_clause = Spanned::new(IfClause { condition, block }, self.span_from(&start));

        let else_branch = if self.match_keyword(KeywordId::Else) {
            if self.check_keyword(KeywordId::If) {
                Some(ElseBranch::If(Box::new(self.conditional()?)))
            } else {
                Some(ElseBranch::Block(self.block()?))
            }
        } else {
            None
        };

        Ok(Spanned::new(
            ConditionalStatement {
                if_clause,
                else_branch,
            },
            self.span_from(&start),
        ))
    }

    /// `while (cond) block`
    fn while_loop(&mut self) -> Result<Spanned<Statement>, ParseError> {
        let start = self.expect_keyword(KeywordId::While)?;
        self.expect_punct(PunctuationId::LParen, "'(' after 'while'")?;
        let condition = self.expression()?;
        self.expect_closing_paren()?;
        let body = self.block()?;
        Ok(Spanned::new(
            Statement::While(WhileLoop { condition, body }),
            self.span_from(&start),
        ))
    }

    /// `for (init; cond; update) block`
    fn for_loop(&mut self) -> Result<Spanned<Statement>, ParseError> {
        let start = self.expect_keyword(KeywordId::For)?;
        self.expect_punct(PunctuationId::LParen, "'(' after 'for'")?;

        let init = if matches!(self.peek().kind, TokenKind::DataType(_)) {
            self.declaration(false)?
        } else {
            self.simple_statement()?
        };
        self.expect_punct(PunctuationId::Semicolon, "';' after the loop initializer")?;

        let condition = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon, "';' after the loop condition")?;

        let update = self.update_statement()?;
        self.expect_closing_paren()?;
        let body = self.block()?;

        Ok(Spanned::new(
            Statement::For(ForLoop {
                init: Box::new(init),
                condition,
                update: Box::new(update),
                body,
            }),
            self.span_from(&start),
        ))
    }

    /// `++x`, `x--`, or `x op= expr` in a `for` header.
    fn update_statement(&mut self) -> Result<Spanned<Statement>, ParseError> {
        let start = self.current_span();

        if let Some(operator) = self.increment_operator() {
            self.advance();
            let operand = self.member_access()?;
            let span = self.span_from(&start);
            let expr = Expr::Unary {
                operator,
                operand: Box::new(operand),
                postfix: false,
            };
            return Ok(Spanned::new(
                Statement::Expression(Spanned::new(expr, span.clone())),
                span,
            ));
        }

        if self.path_is_assigned() {
            return self.assignment();
        }

        let operand = self.member_access()?;
        let Some(operator) = self.increment_operator() else {
            return Err(self.unexpected("'++', '--' or an assignment operator"));
        };
        self.advance();
        let span = self.span_from(&start);
        let expr = Expr::Unary {
            operator,
            operand: Box::new(operand),
            postfix: true,
        };
        Ok(Spanned::new(
            Statement::Expression(Spanned::new(expr, span.clone())),
            span,
        ))
    }

    /// `repeat count times block`
    fn repeat_loop(&mut self) -> Result<Spanned<Statement>, ParseError> {
        let start = self.expect_keyword(KeywordId::Repeat)?;
        let count = self.expression()?;
        self.expect_keyword(KeywordId::Times)?;
        let body = self.block()?;
        Ok(Spanned::new(
            Statement::Repeat(RepeatLoop { count, body }),
            self.span_from(&start),
        ))
    }

    /// `print("text" {a} {b.c});` / `println(...)`
    fn output_statement(&mut self) -> Result<Spanned<Statement>, ParseError> {
        let start = self.current_span();
        let newline = self.check_keyword(KeywordId::Println);
        self.advance();
        self.expect_punct(PunctuationId::LParen, "'(' after the output keyword")?;

        let template = self.string_literal()?;
        let mut placeholders = Vec::new();
        while self.match_punct(PunctuationId::LCurly) {
            placeholders.push(self.member_access()?);
            self.expect_punct(PunctuationId::RCurly, "'}' after the placeholder")?;
        }

        self.expect_closing_paren()?;
        self.expect_punct(PunctuationId::Semicolon, "';'")?;
        Ok(Spanned::new(
            Statement::Output(OutputStatement {
                newline,
                template,
                placeholders,
            }),
            self.span_from(&start),
        ))
    }

    /// `input();`
    fn input_statement(&mut self) -> Result<Spanned<Statement>, ParseError> {
        let start = self.expect_keyword(KeywordId::Input)?;
        self.expect_punct(PunctuationId::LParen, "'(' after 'input'")?;
        self.expect_closing_paren()?;
        self.expect_punct(PunctuationId::Semicolon, "';'")?;
        Ok(Spanned::new(Statement::Input, self.span_from(&start)))
    }

    /// `{ statement* }`, recovering from errors inside the block.
    fn block(&mut self) -> Result<Block, ParseError> {
        self.nested(Self::block_inner)
    }

    fn block_inner(&mut self) -> Result<Block, ParseError> {
        let start = self.expect_punct(PunctuationId::LCurly, "'{'")?;
        let mut statements = Vec::new();

        while !self.check_punct(PunctuationId::RCurly) && !self.is_at_end() {
            if let Some(stmt) = self.statement_or_recover() {
                statements.push(stmt);
            }
        }

        self.expect_punct(PunctuationId::RCurly, "'}' to close the block")?;
        Ok(Block {
            statements,
            span: self.span_from(&start),
        })
    }
}
