/// Reserved-word call forms.
///
/// A reserved word followed by `(` is a call to one of the built-in geometry, unit, or I/O forms. The word decides
/// the node (see [`ReservedForm::of`]) and the registry decides how many arguments it takes.
impl<'a> Parser<'a> {
    // ========================================================================
    // Reserved forms
    // ========================================================================

    /// Parse `word(args)`. A wrong argument count is recorded but the node is still returned.
    fn reserved_form(&mut self, word: ReservedWordId) -> Result<Spanned<Expr>, ParseError> {
        let start = self.current_span();
        self.advance();
        let args = self.arguments()?;
        let span = self.span_from(&start);

        let (min, max) = reserved::arity(word);
        if args.len() < min || args.len() > max {
            let expected = if min == max {
                min.to_string()
            } else {
                format!("{min} to {max}")
            };
            self.record(ParseError::ArgumentCount {
                form: word,
                expected,
                found: args.len(),
                span: span.clone(),
            });
        }

        Ok(Spanned::new(
            Expr::Reserved(ReservedCall {
                form: ReservedForm::of(word),
                word,
                args,
            }),
            span,
        ))
    }
}
