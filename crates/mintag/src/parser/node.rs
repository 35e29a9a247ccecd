//! The element tree produced by the structural parse.

use crate::context::Context;
use crate::error::{ErrorKind, ParseError, Result};
use crate::parser::escape::{unescape, unquote_and_escape};
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::preprocess;
use crate::syntax::Syntax;
use crate::tag::Tag;

/// One delimiter-separated piece of a tag: the name (part 0) or an
/// argument.
///
/// The value is fully unquoted and unescaped, with nested macro tags
/// already expanded, so it never contains an unescaped delimiter.
#[derive(Clone, Debug, PartialEq)]
pub struct TagPart {
    value: String,
    token: Token,
}

impl TagPart {
    /// Build a part from its token: unquote and unescape the span, then run
    /// macro expansion over the result so placeholders reach inside quoted
    /// and nested arguments.
    pub(crate) fn new(source: &str, token: Token, ctx: &Context<'_>) -> Result<TagPart> {
        let unquoted = unquote_and_escape(source, token.span(), ctx.syntax());
        let deeper = ctx.deeper()?;
        let value = preprocess::expand(&unquoted, &deeper)?;
        Ok(TagPart { value, token })
    }

    #[cfg(test)]
    pub(crate) fn synthetic(
        value: &str,
        span: crate::parser::lexer::Span,
        kind: TokenKind,
    ) -> TagPart {
        TagPart {
            value: value.to_string(),
            token: Token::new(span.start, span.end, kind),
        }
    }

    /// The unescaped, expanded value of this part.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The token this part came from.
    pub fn token(&self) -> &Token {
        &self.token
    }
}

/// A node in the element tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Text(TextNode),
    Tag(TagNode),
}

/// A literal text leaf, already unescaped.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    value: String,
    token: Token,
}

impl TextNode {
    pub(crate) fn new(token: Token, source: &str, syntax: &Syntax) -> TextNode {
        let tag_start = syntax.tag_start;
        let escape = syntax.escape;
        let value = unescape(source, token.span(), escape, |c| {
            c == tag_start || c == escape
        });
        TextNode { value, token }
    }

    /// The unescaped text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The token this node came from.
    pub fn token(&self) -> &Token {
        &self.token
    }
}

/// A tag node: its parts (name first) and, once the builder has resolved
/// it, the tag logic it stands for.
#[derive(Clone, Debug, PartialEq)]
pub struct TagNode {
    token: Token,
    parts: Vec<TagPart>,
    tag: Option<Tag>,
    children: Vec<Node>,
}

impl TagNode {
    pub(crate) fn new(token: Token, source: &str, ctx: &Context<'_>) -> Result<TagNode> {
        let mut parts = Vec::with_capacity(token.children().len());
        for child in token.children() {
            parts.push(TagPart::new(source, child.clone(), ctx)?);
        }

        if parts.is_empty() {
            // The tokenizer guarantees a name child; this is a bug, not bad
            // input.
            return Err(ParseError::new(ErrorKind::Internal(
                "tag token has no parts".into(),
            ))
            .with_context(source, vec![token.span()]));
        }

        Ok(TagNode {
            token,
            parts,
            tag: None,
            children: Vec::new(),
        })
    }

    /// The name of this tag, in its original spelling.
    pub fn name(&self) -> &str {
        self.parts[0].value()
    }

    /// All parts of this tag; part 0 is the name.
    pub fn parts(&self) -> &[TagPart] {
        &self.parts
    }

    /// The arguments of this tag (everything after the name).
    pub fn args(&self) -> &[TagPart] {
        &self.parts[1..]
    }

    /// The children of this tag, in source order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// The token this node came from.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The resolved tag.
    ///
    /// # Panics
    ///
    /// Panics if the builder has not resolved this node yet; reading the
    /// tag before assignment is a programmer error, not a data error.
    pub fn tag(&self) -> &Tag {
        match &self.tag {
            Some(tag) => tag,
            None => panic!("tag node '<{}>' read before resolution", self.name()),
        }
    }

    pub(crate) fn set_tag(&mut self, tag: Tag) {
        self.tag = Some(tag);
    }
}

/// The root of a parsed tree.
///
/// Holds both the string the tree's spans point into (after macro
/// expansion) and the original input before expansion.
#[derive(Clone, Debug, PartialEq)]
pub struct RootNode {
    source: String,
    original: String,
    children: Vec<Node>,
}

impl RootNode {
    pub(crate) fn new(source: String, original: String, children: Vec<Node>) -> RootNode {
        RootNode {
            source,
            original,
            children,
        }
    }

    /// The macro-expanded source string the tree was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The original input, before macro expansion.
    pub fn original_source(&self) -> &str {
        &self.original
    }

    /// The top-level nodes, in source order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// An indented rendering of the tree shape, for debugging and tests.
    pub fn debug_tree(&self) -> String {
        let mut out = String::new();
        out.push_str("Root {\n");
        for child in &self.children {
            write_node(child, &mut out, 1);
        }
        out.push_str("}\n");
        out
    }
}

fn write_node(node: &Node, out: &mut String, indent: usize) {
    let pad = "  ".repeat(indent);
    match node {
        Node::Text(text) => {
            out.push_str(&pad);
            out.push_str("Text('");
            out.push_str(text.value());
            out.push_str("')\n");
        }
        Node::Tag(tag) => {
            let parts: Vec<String> = tag
                .parts()
                .iter()
                .map(|p| format!("'{}'", p.value()))
                .collect();
            out.push_str(&pad);
            out.push_str("Tag(");
            out.push_str(&parts.join(", "));
            if tag.children().is_empty() {
                out.push_str(")\n");
            } else {
                out.push_str(") {\n");
                for child in tag.children() {
                    write_node(child, out, indent + 1);
                }
                out.push_str(&pad);
                out.push_str("}\n");
            }
        }
    }
}

/// Appends `node` to `children`, joining adjacent text nodes whose spans
/// touch so runs of degraded tag spans read back as one literal.
pub(crate) fn push_child(children: &mut Vec<Node>, node: Node, source: &str, syntax: &Syntax) {
    if let Node::Text(incoming) = &node {
        if let Some(Node::Text(last)) = children.last() {
            if last.token().span().end == incoming.token().span().start {
                let joined = Token::new(
                    last.token().span().start,
                    incoming.token().span().end,
                    TokenKind::Text,
                );
                let merged = TextNode::new(joined, source, syntax);
                children.pop();
                children.push(Node::Text(merged));
                return;
            }
        }
    }
    children.push(node);
}
