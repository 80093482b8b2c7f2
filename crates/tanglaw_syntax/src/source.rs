//! Source text and positions within it.
//!
//! A [`SourceFile`] is created once per `tokenize` call and shared by every [`Position`] taken from it, so tokens,
//! AST nodes and errors can always say which file they came from without copying the text.
//!
//! ## Notes
//! - `idx` is a **byte** offset, so a [`Span`] converts directly into a `miette::SourceSpan`.
//! - `ln` and `col` are 0-based; rendering adds 1.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use miette::{MietteError, MietteSpanContents, SourceCode, SourceSpan, SpanContents};

/// Named, immutable source text.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    text: String,
}

impl SourceFile {
    /// Create a shared source file.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            text: text.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.text.len())
            .finish()
    }
}

impl SourceCode for SourceFile {
    fn read_span<'a>(
        &'a self,
        span: &SourceSpan,
        context_lines_before: usize,
        context_lines_after: usize,
    ) -> Result<Box<dyn SpanContents<'a> + 'a>, MietteError> {
        let contents = self.text.read_span(span, context_lines_before, context_lines_after)?;
        Ok(Box::new(MietteSpanContents::new_named(
            self.name.clone(),
            contents.data(),
            *contents.span(),
            contents.line(),
            contents.column(),
            contents.line_count(),
        )))
    }
}

/// A point in a source file.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    /// Byte offset into the source text.
    pub idx: usize,
    /// 0-based line.
    pub ln: usize,
    /// 0-based column, counted in characters.
    pub col: usize,
    pub file: Arc<SourceFile>,
}

impl Position {
    /// Position of the first character of `file`.
    pub fn start_of(file: Arc<SourceFile>) -> Self {
        Self {
            idx: 0,
            ln: 0,
            col: 0,
            file,
        }
    }

    /// Move past `c`, which must be the character at `idx`.
    pub fn advance(&mut self, c: char) {
        self.idx += c.len_utf8();
        self.col += 1;
        if c == '\n' {
            self.ln += 1;
            self.col = 0;
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}@{}", self.file.name(), self.ln + 1, self.col + 1, self.idx)
    }
}

/// Half-open source range `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start.idx <= end.idx, "span start after end");
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn merge(&self, other: &Span) -> Span {
        let start = if other.start.idx < self.start.idx {
            other.start.clone()
        } else {
            self.start.clone()
        };
        let end = if other.end.idx > self.end.idx {
            other.end.clone()
        } else {
            self.end.clone()
        };
        Span { start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start.idx..self.end.idx
    }

    pub fn file(&self) -> &SourceFile {
        &self.start.file
    }

    /// Source text covered by this span.
    pub fn text(&self) -> &str {
        self.file().text().get(self.range()).unwrap_or("")
    }
}

impl From<&Span> for SourceSpan {
    fn from(span: &Span) -> Self {
        SourceSpan::from(span.range())
    }
}
