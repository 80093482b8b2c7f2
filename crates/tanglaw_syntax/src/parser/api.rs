/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `tanglaw_syntax::lexer`.
///
/// ## Returns
/// - `(None, [NoTokens])` for an empty slice.
/// - Otherwise `Some(program)` plus every error found. A non-empty error list means the program is partial.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), error_count = tracing::field::Empty))]
pub fn parse(tokens: &[Token]) -> (Option<Program>, Vec<ParseError>) {
    let (program, errors) = match Parser::new(tokens) {
        Ok(parser) => parser.parse(),
        Err(err) => (None, vec![err]),
    };
    tracing::Span::current().record("error_count", errors.len());
    (program, errors)
}
