/// Variable declarations.
///
/// ```text
/// declaration   := DATA_TYPE declarator (',' declarator)* ';'?
/// declarator    := IDENTIFIER unitSpecifier? ('=' expr)?
/// unitSpecifier := 'sq'? UNIT
/// ```
///
/// ## Notes
/// - This is also where the parser's one static check lives: a literal initializer must fit the declared type
///   (see `tanglaw_core::lang::types::accepts`). A mismatch is recorded and parsing carries on.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// Parse a declaration. Inside a `for (...)` header the caller owns the `;`, so `consume_semicolon` is `false`.
    fn declaration(&mut self, consume_semicolon: bool) -> Result<Spanned<Statement>, ParseError> {
        let start = self.current_span();
        let Some(data_type) = self.peek().kind.data_type_id() else {
            return Err(self.unexpected("a data type"));
        };
        self.advance();

        let mut declarators = vec![self.declarator(data_type)?];
        while self.match_punct(PunctuationId::Comma) {
            declarators.push(self.declarator(data_type)?);
        }
        if consume_semicolon {
            self.match_punct(PunctuationId::Semicolon);
        }

        Ok(Spanned::new(
            Statement::VariableDeclaration(VariableDeclaration {
                data_type,
                declarators,
            }),
            self.span_from(&start),
        ))
    }

    fn declarator(&mut self, data_type: types::DataTypeId) -> Result<Spanned<Declarator>, ParseError> {
        let start = self.current_span();
        let name = match &self.peek().kind {
            TokenKind::Identifier(name) => name.clone(),
            _ => return Err(self.unexpected("an identifier")),
        };
        self.advance();

        let unit = self.unit_specifier()?;

        let initializer = if self.check_op(OperatorId::Assign) {
            self.advance();
            let init = self.expression()?;
            self.check_initializer_type(data_type, &init);
            Some(init)
        } else {
            None
        };

        Ok(Spanned::new(
            Declarator {
                name,
                unit,
                initializer,
            },
            self.span_from(&start),
        ))
    }

    /// Parse an optional `cm` / `sq cm` after a declarator name.
    fn unit_specifier(&mut self) -> Result<Option<Spanned<UnitSpecifier>>, ParseError> {
        let start = self.current_span();
        let squared = self.peek().kind.reserved_word_id() == Some(ReservedWordId::Sq);
        if squared {
            self.advance();
        }

        match self.peek().kind.reserved_word_id() {
            Some(unit) if reserved::is_unit(unit) => {
                self.advance();
                Ok(Some(Spanned::new(
                    UnitSpecifier { unit, squared },
                    self.span_from(&start),
                )))
            }
            _ if squared => Err(self.unexpected("a unit after 'sq'")),
            _ => Ok(None),
        }
    }

    /// Record a [`ParseError::TypeMismatch`] if a literal initializer does not fit `declared`.
    fn check_initializer_type(&mut self, declared: types::DataTypeId, init: &Spanned<Expr>) {
        let Expr::Literal(lit) = &init.node else {
            return;
        };
        let found = lit.kind();
        if !types::accepts(declared, found) {
            self.record(ParseError::TypeMismatch {
                declared,
                found,
                span: init.span.clone(),
            });
        }
    }
}
