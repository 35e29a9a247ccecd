//! Tag markup parsing and resolution engine.
//!
//! This crate turns a flat string containing `<tag:arg>...</tag>` markup
//! into a [`richtext::Component`] tree, by way of a pluggable,
//! priority-ordered resolver chain:
//!
//! - `<red>Hello</red>` — apply a color
//! - `<click:open_url:https://example.com>here</click>` — attach a click
//!   action
//! - `<hover:show_text:'<red>tip'>term</hover>` — tooltips whose arguments
//!   are themselves markup
//!
//! Parsing happens in two phases sharing one tokenizer: a textual macro
//! pass substitutes [pre-process tags](Tag::PreProcess) (placeholders),
//! then the structural pass builds a node tree and resolves every tag
//! through the same chain. Malformed tag-like spans never fail — a stray
//! `<` is just text. Whether *unresolved* (but well-formed) tags fail
//! depends on the engine's lenient/strict mode.
//!
//! # Usage
//!
//! ```
//! use mintag::{placeholder, MiniTag};
//!
//! // The default engine: standard tags, lenient mode.
//! let component = mintag::parse("<red>Hello</red> world").unwrap();
//! assert_eq!(component.plain_text(), "Hello world");
//!
//! // A custom engine with a placeholder.
//! let engine = MiniTag::builder()
//!     .resolver(placeholder::parsed("pack_url", "https://example.com"))
//!     .build();
//! let component = engine.parse("get it at <pack_url>!").unwrap();
//! assert_eq!(component.plain_text(), "get it at https://example.com!");
//! ```
//!
//! Resolver chains are immutable once built; one engine can serve any
//! number of concurrent parses.

pub mod context;
pub mod error;
pub mod parser;
pub mod placeholder;
mod render;
pub mod resolver;
pub mod standard;
pub mod syntax;
pub mod tag;

// Re-export main types at crate root
pub use context::Context;
pub use error::{ErrorKind, ParseError, Result};
pub use parser::{Node, RootNode, Span, TagNode, TagPart, TextNode, Token, TokenKind};
pub use resolver::{TagResolver, TagResolverBuilder};
pub use syntax::{is_valid_tag_name, sanitize_name, Syntax};
pub use tag::{Arguments, Inserting, Tag};

use richtext::Component;

/// Bound on macro-expansion passes, argument expansion nesting and
/// render-time sub-parses. Exceeding it is a parse error, never a hang.
pub const MAX_DEPTH: usize = 16;

/// The markup engine: a resolver chain, a strictness flag and a character
/// set, bundled for reuse across parses.
#[derive(Clone, Debug)]
pub struct MiniTag {
    resolver: TagResolver,
    strict: bool,
    syntax: Syntax,
}

impl Default for MiniTag {
    fn default() -> Self {
        MiniTag::new()
    }
}

impl MiniTag {
    /// The default engine: standard tags, lenient mode, default syntax.
    pub fn new() -> Self {
        MiniTag {
            resolver: standard::defaults(),
            strict: false,
            syntax: Syntax::default(),
        }
    }

    /// A builder for a customized engine.
    pub fn builder() -> MiniTagBuilder {
        MiniTagBuilder::default()
    }

    /// The resolver chain in effect.
    pub fn resolver(&self) -> &TagResolver {
        &self.resolver
    }

    /// Whether unresolved-but-valid tags are parse errors rather than
    /// literal text.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// The markup character set in effect.
    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Parse markup into a component.
    pub fn parse(&self, input: &str) -> Result<Component> {
        self.parse_at_depth(input, 0)
    }

    /// Parse markup into its element tree, for inspection and debugging.
    pub fn parse_tree(&self, input: &str) -> Result<RootNode> {
        self.tree_at_depth(input, 0)
    }

    pub(crate) fn parse_at_depth(&self, input: &str, depth: usize) -> Result<Component> {
        let root = self.tree_at_depth(input, depth)?;
        render::render_tree(&root)
    }

    fn tree_at_depth(&self, input: &str, depth: usize) -> Result<RootNode> {
        if depth > MAX_DEPTH {
            return Err(ParseError::new(ErrorKind::DepthLimitExceeded { limit: MAX_DEPTH })
                .with_context(input, Vec::new()));
        }

        let pre_ctx = Context::new(self, input, depth);
        let expanded = parser::preprocess::expand(input, &pre_ctx)?;

        let tokens = parser::tokenize(&expanded, &self.syntax);
        let build_ctx = Context::new(self, &expanded, depth);
        parser::treebuilder::build_tree(tokens, &expanded, input, &build_ctx)
    }

    /// Expand pre-process tags only, returning the substituted string. No
    /// tree is built and no inserting tag is rendered.
    pub fn preprocess(&self, input: &str) -> Result<String> {
        let ctx = Context::new(self, input, 0);
        parser::preprocess::expand(input, &ctx)
    }

    /// Remove every span that would parse as a tag under this engine's
    /// resolver chain. Tags are recognized by name only, never resolved to
    /// their values; text, including tag-like spans no resolver knows,
    /// passes through unchanged.
    pub fn strip(&self, input: &str) -> String {
        let tokens = parser::tokenize(input, &self.syntax);
        let mut out = String::new();
        for token in &tokens {
            if token.kind().is_tag() && self.recognizes(input, token) {
                continue;
            }
            out.push_str(token.value(input));
        }
        out
    }

    /// Escape every span that would parse as a tag under this engine's
    /// resolver chain, so the result parses back as the literal input.
    /// Like [`strip`](MiniTag::strip), tags are recognized but never
    /// resolved.
    pub fn escape(&self, input: &str) -> String {
        let tokens = parser::tokenize(input, &self.syntax);
        let mut out = String::new();
        for token in &tokens {
            if token.kind().is_tag() && self.recognizes(input, token) {
                out.push(self.syntax.escape);
            }
            out.push_str(token.value(input));
        }
        out
    }

    /// Whether a tag token names something the resolver chain knows.
    fn recognizes(&self, source: &str, token: &Token) -> bool {
        let name_token = match token.children().first() {
            Some(name_token) => name_token,
            None => return false,
        };
        let name = sanitize_name(name_token.value(source));
        is_valid_tag_name(&name) && self.resolver.has(&name)
    }
}

/// Builds a [`MiniTag`] engine.
#[derive(Debug)]
pub struct MiniTagBuilder {
    resolvers: Vec<TagResolver>,
    include_standard: bool,
    strict: bool,
    syntax: Syntax,
}

impl Default for MiniTagBuilder {
    fn default() -> Self {
        MiniTagBuilder {
            resolvers: Vec::new(),
            include_standard: true,
            strict: false,
            syntax: Syntax::default(),
        }
    }
}

impl MiniTagBuilder {
    /// Add a resolver. Resolvers added earlier take precedence, and all of
    /// them take precedence over the standard tags (when included).
    pub fn resolver(mut self, resolver: TagResolver) -> Self {
        self.resolvers.push(resolver);
        self
    }

    /// Include or exclude the standard tag set (included by default).
    pub fn standard_tags(mut self, include: bool) -> Self {
        self.include_standard = include;
        self
    }

    /// Strict mode: unresolved-but-valid tags, wrongly ordered close tags
    /// and unclosed tags become parse errors instead of degrading to
    /// literal text.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Use a custom markup character set.
    pub fn syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Build the engine.
    pub fn build(self) -> MiniTag {
        let mut resolvers = self.resolvers;
        if self.include_standard {
            resolvers.push(standard::defaults());
        }
        MiniTag {
            resolver: TagResolver::combining(resolvers),
            strict: self.strict,
            syntax: self.syntax,
        }
    }
}

/// Parse markup with the default engine (standard tags, lenient mode).
pub fn parse(input: &str) -> Result<Component> {
    MiniTag::new().parse(input)
}
