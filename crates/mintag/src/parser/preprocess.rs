//! The macro pre-processor.
//!
//! Before any tree is built, pre-process tags are expanded textually: each
//! top-level open-tag span whose name resolves to a [`Tag::PreProcess`]
//! value is replaced, verbatim, by that value. Passes repeat until the
//! string stops changing; a substitution that keeps producing new tags
//! (for example one that expands to itself) runs into the depth limit and
//! is reported as a parse error.

use crate::context::Context;
use crate::error::{ErrorKind, ParseError, Result};
use crate::parser::lexer::{scan, tokenize, Token, TokenKind};
use crate::parser::node::TagPart;
use crate::syntax::{is_valid_tag_name, sanitize_name};
use crate::tag::Tag;
use crate::MAX_DEPTH;

/// Expands all pre-process tags in `input`, to a fixpoint.
pub(crate) fn expand(input: &str, ctx: &Context<'_>) -> Result<String> {
    let mut result = input.to_string();
    for pass in 0..MAX_DEPTH {
        let next = expand_once(&result, ctx)?;
        if next == result {
            if pass > 0 {
                log::trace!("macro expansion settled after {} pass(es)", pass);
            }
            return Ok(result);
        }
        result = next;
    }
    Err(
        ParseError::new(ErrorKind::DepthLimitExceeded { limit: MAX_DEPTH })
            .with_context(ctx.source(), Vec::new()),
    )
}

/// One substitution pass over the top-level open-tag spans of `input`.
fn expand_once(input: &str, ctx: &Context<'_>) -> Result<String> {
    let syntax = ctx.syntax();
    let mut regions = Vec::new();
    scan(input, syntax, |start, end, kind| {
        regions.push((start, end, kind));
    });

    let mut out = String::with_capacity(input.len());
    for (start, end, kind) in regions {
        let span_text = &input[start..end];

        // Only plain open tags take part in macro expansion; text, close
        // tags and self-closing tags pass through for the structural phase.
        if kind != TokenKind::OpenTag {
            out.push_str(span_text);
            continue;
        }

        let inner = &input
            [start + syntax.tag_start.len_utf8()..end - syntax.tag_end.len_utf8()];
        let name = match inner.find(syntax.separator) {
            Some(idx) => &inner[..idx],
            None => inner,
        };
        let name = sanitize_name(name);
        if !is_valid_tag_name(&name) {
            out.push_str(span_text);
            continue;
        }

        // Re-tokenize just this span to pick up its argument parts.
        let tokens = tokenize(span_text, syntax);
        let parts = match tokens.first() {
            Some(token) if token.kind() == TokenKind::OpenTag => {
                let mut parts = Vec::new();
                for child in token.children().iter().skip(1) {
                    parts.push(TagPart::new(span_text, child.clone(), ctx)?);
                }
                parts
            }
            _ => {
                out.push_str(span_text);
                continue;
            }
        };

        // Diagnostics for this span point into the full input.
        let span_token = Token::new(start, end, TokenKind::OpenTag);
        match ctx.resolve(&name, &parts, &span_token)? {
            Some(Tag::PreProcess(value)) => out.push_str(&value),
            // Inserting tags and misses are left for the structural pass.
            _ => out.push_str(span_text),
        }
    }

    Ok(out)
}
