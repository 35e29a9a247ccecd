//! Pure escaping and quoting helpers shared by both parse phases.

use crate::parser::lexer::Span;
use crate::syntax::Syntax;

/// Strips the escape character in front of any character for which
/// `is_escapable` holds, over `span` of `text`.
///
/// An escape character followed by anything else (including end of input)
/// is kept as-is.
pub fn unescape(
    text: &str,
    span: Span,
    escape: char,
    is_escapable: impl Fn(char) -> bool,
) -> String {
    let region = span.slice(text);
    if !region.contains(escape) {
        return region.to_string();
    }

    let mut out = String::with_capacity(region.len());
    let mut chars = region.chars().peekable();
    while let Some(c) = chars.next() {
        if c == escape {
            if let Some(&next) = chars.peek() {
                if is_escapable(next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Strips one layer of matching leading/trailing quotes from `span` of
/// `text`, then unescapes the quote and escape characters inside.
///
/// Unquoted spans are returned verbatim; a span consisting of a single
/// unterminated quote character is returned unmodified; an empty span
/// yields the empty string.
pub fn unquote_and_escape(text: &str, span: Span, syntax: &Syntax) -> String {
    if span.is_empty() {
        return String::new();
    }

    let region = span.slice(text);
    let first = match region.chars().next() {
        Some(c) => c,
        None => return String::new(),
    };

    if !syntax.is_quote(first) {
        return region.to_string();
    }

    let mut inner = span;
    let last = region.chars().next_back();
    if region.chars().nth(1).is_some() && last == Some(first) {
        inner = Span::new(
            span.start + first.len_utf8(),
            span.end - first.len_utf8(),
        );
    }

    let escape = syntax.escape;
    unescape(text, inner, escape, |c| c == first || c == escape)
}
