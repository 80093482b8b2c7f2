// Parser core type and entrypoint.
//
// This file is `include!`'d into `crate::parser` to keep all parser methods in a single module while avoiding a
// single “god file”.

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers from errors by synchronizing at statement boundaries.
/// - Token access is bounds-checked: a slice that does not end in `EOF` behaves as if it did.
/// - `COMMENT` tokens are skipped, so the output of `tokenize_with` can be passed in unfiltered.
/// - Recursion through statements, blocks, `else if` chains, groups, unary operators and right-associative chains
///   is capped at [`MAX_NESTING_DEPTH`] levels.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<ParseError>,
    /// Returned by `peek` once `pos` runs past the slice.
    eof: Token,
    /// Current recursion depth of the nested rules.
    depth: usize,
}

/// Deepest nesting the parser accepts before reporting [`ParseError::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 128;

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Errors
    /// - [`ParseError::NoTokens`] if `tokens` is empty.
    pub fn new(tokens: &'a [Token]) -> Result<Self, ParseError> {
        let last = tokens.last().ok_or(ParseError::NoTokens)?;
        let end = last.span.end.clone();
        let mut parser = Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
            eof: Token::new(TokenKind::Eof, "", Span::new(end.clone(), end)),
            depth: 0,
        };
        parser.skip_comments();
        Ok(parser)
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Returns
    /// - The program (partial when errors were found) and every error, in source order.
    pub fn parse(mut self) -> (Option<Program>, Vec<ParseError>) {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.statement_or_recover() {
                statements.push(stmt);
            }
        }

        (Some(Program { statements }), self.errors)
    }

    /// Parse one statement; on failure record the error, synchronize and return `None`.
    fn statement_or_recover(&mut self) -> Option<Spanned<Statement>> {
        let start = self.pos;
        match self.statement() {
            Ok(stmt) => Some(stmt),
            Err(err) => {
                self.record(err);
                self.synchronize(start);
                None
            }
        }
    }

    /// Record an error without interrupting the current rule.
    fn record(&mut self, err: ParseError) {
        tracing::debug!(kind = err.name(), error = %err, "parse error");
        self.errors.push(err);
    }
}
