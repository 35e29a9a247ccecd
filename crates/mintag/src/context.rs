//! Per-parse context handed to resolvers and tag handlers.

use richtext::Component;

use crate::error::{ErrorKind, ParseError, Result};
use crate::parser::lexer::Token;
use crate::parser::node::TagPart;
use crate::resolver::TagResolver;
use crate::syntax::Syntax;
use crate::tag::{Arguments, Tag};
use crate::{MiniTag, MAX_DEPTH};

/// The context of one parse call.
///
/// Carries the engine configuration, the string being parsed (for error
/// reporting) and the current expansion depth. Tag handlers receive a
/// reference to this and may run recursive sub-parses through
/// [`Context::parse_inner`].
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    engine: &'a MiniTag,
    source: &'a str,
    depth: usize,
}

impl<'a> Context<'a> {
    pub(crate) fn new(engine: &'a MiniTag, source: &'a str, depth: usize) -> Self {
        Context {
            engine,
            source,
            depth,
        }
    }

    /// The string being parsed.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Whether the parse runs in strict mode.
    pub fn strict(&self) -> bool {
        self.engine.strict()
    }

    /// The markup character set in effect.
    pub fn syntax(&self) -> &'a Syntax {
        self.engine.syntax()
    }

    /// The resolver chain in effect.
    pub fn resolver(&self) -> &'a TagResolver {
        self.engine.resolver()
    }

    /// The current expansion depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// A context one expansion level deeper, or a depth-limit error.
    pub(crate) fn deeper(&self) -> Result<Context<'a>> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::new(ErrorKind::DepthLimitExceeded { limit: MAX_DEPTH })
                .with_context(self.source, Vec::new()));
        }
        Ok(Context {
            engine: self.engine,
            source: self.source,
            depth: self.depth + 1,
        })
    }

    /// Parse `input` as markup with the same engine configuration, one
    /// recursion level deeper. Used by tags whose arguments contain markup
    /// of their own, such as hover tooltips.
    pub fn parse_inner(&self, input: &str) -> Result<Component> {
        self.engine.parse_at_depth(input, self.depth + 1)
    }

    /// An error for handlers rejecting their arguments; the parser attaches
    /// the offending tag's span before reporting it.
    pub fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Resolve a tag through the chain, applying the lenient/strict policy
    /// for resolver errors: lenient parses degrade the tag to literal text
    /// (by returning `None`), strict parses report the error with the tag's
    /// source span. Depth-limit errors always propagate.
    pub(crate) fn resolve(
        &self,
        name: &str,
        args: &[TagPart],
        token: &Token,
    ) -> Result<Option<Tag>> {
        let mut args = Arguments::new(args);
        match self.resolver().resolve(name, &mut args, self) {
            Ok(tag) => Ok(tag),
            Err(err) if matches!(err.kind(), ErrorKind::DepthLimitExceeded { .. }) => {
                Err(err.with_context(self.source, vec![token.span()]))
            }
            Err(err) => {
                if self.strict() {
                    Err(err.with_context(self.source, vec![token.span()]))
                } else {
                    log::debug!(
                        "tag '<{}>' failed to resolve, treating it as literal text: {}",
                        name,
                        err.kind()
                    );
                    Ok(None)
                }
            }
        }
    }
}
