//! Error types for markup parsing.
//!
//! Every user-facing error carries the source string and the offending
//! span(s), so `Display` can point a caret at the failure site:
//!
//! ```text
//! unknown tag '<oops>'
//!   some <oops>text
//!        ^~~~~^
//! ```

use std::fmt;

use thiserror::Error;

use crate::parser::lexer::Span;

/// A convenient alias for parse results.
pub type Result<T> = std::result::Result<T, ParseError>;

/// What went wrong during a parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A syntactically valid tag had no matching resolver (strict mode only;
    /// lenient mode emits the literal span instead).
    #[error("unknown tag '<{name}>'")]
    UnknownTag { name: String },

    /// A name-only tag was given arguments.
    #[error("tag '<{name}>' does not accept any arguments")]
    UnexpectedArguments { name: String },

    /// A tag handler rejected its arguments.
    #[error("invalid tag argument: {0}")]
    InvalidArgument(String),

    /// Macro expansion or render recursion exceeded the configured bound.
    #[error("expansion depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },

    /// Strict mode: the input ended while tags were still open.
    #[error("all tags must be explicitly closed in strict mode; end of input reached with open tags: {names}")]
    UnclosedTags { names: String },

    /// Strict mode: a tag was closed while an inner tag was still open.
    #[error("unclosed tag: '<{open}>' is not closed before '</{close}>' closes its parent")]
    MismatchedCloseTag { open: String, close: String },

    /// An internal invariant was violated; this is a bug in the engine or a
    /// misbehaving resolver, not bad input.
    #[error("internal parser error: {0}")]
    Internal(String),
}

/// An error produced while parsing markup, with enough context to point at
/// the failure site in the source string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    kind: ErrorKind,
    text: Option<String>,
    spans: Vec<Span>,
}

impl ParseError {
    /// Create an error with no source context yet.
    pub(crate) fn new(kind: ErrorKind) -> Self {
        ParseError {
            kind,
            text: None,
            spans: Vec::new(),
        }
    }

    /// Attach the source string and offending spans, unless an inner error
    /// already carries more precise context.
    pub(crate) fn with_context(mut self, text: &str, spans: Vec<Span>) -> Self {
        if self.text.is_none() {
            self.text = Some(text.to_string());
            self.spans = spans;
        }
        self
    }

    /// The kind of failure.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The source string this error points into, if attached.
    pub fn source_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The offending spans, in ascending source order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The caret/tilde line pointing at the offending spans.
    fn arrow(text: &str, spans: &[Span]) -> String {
        let mut out = String::new();
        for (offset, c) in text.char_indices() {
            let mut mark = ' ';
            for span in spans {
                if offset >= span.start && offset < span.end {
                    let is_first = offset == span.start;
                    let is_last = offset + c.len_utf8() >= span.end;
                    mark = if is_first || is_last { '^' } else { '~' };
                    break;
                }
            }
            out.push(mark);
        }
        out.truncate(out.trim_end().len());
        out
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(text) = &self.text {
            write!(f, "\n  {}", text)?;
            if !self.spans.is_empty() {
                write!(f, "\n  {}", Self::arrow(text, &self.spans))?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
