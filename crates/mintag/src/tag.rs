//! Tag values and the argument cursor handed to tag handlers.

use richtext::{Component, Style};

use crate::error::{ErrorKind, ParseError, Result};
use crate::parser::node::TagPart;

/// A resolved tag.
///
/// This is a closed union: a tag either inserts content into the output
/// tree, or substitutes a raw string during macro pre-processing. There is
/// no other kind; built-in and user-supplied tags alike are produced by
/// resolvers and dispatched by pattern match.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
    /// Inserts a component; the tag's children are appended to it.
    Inserting(Inserting),
    /// Substituted verbatim at macro pre-processing time. Encountering this
    /// variant during the render walk is an internal-consistency fault.
    PreProcess(String),
}

impl Tag {
    /// A tag inserting `content`, with following siblings as children until
    /// the tag is closed.
    pub fn inserting(content: Component) -> Tag {
        Tag::Inserting(Inserting {
            content,
            allows_children: true,
        })
    }

    /// A tag inserting `content` that never takes children; it behaves as
    /// if self-closing.
    pub fn self_closing_inserting(content: Component) -> Tag {
        Tag::Inserting(Inserting {
            content,
            allows_children: false,
        })
    }

    /// A tag applying `style` to its children.
    pub fn styling(style: Style) -> Tag {
        Tag::inserting(Component::styled(style))
    }

    /// A tag whose raw value replaces the tag span before structural
    /// parsing.
    pub fn pre_process(value: impl Into<String>) -> Tag {
        Tag::PreProcess(value.into())
    }
}

/// The content-inserting arm of [`Tag`].
#[derive(Clone, Debug, PartialEq)]
pub struct Inserting {
    content: Component,
    allows_children: bool,
}

impl Inserting {
    /// The component this tag inserts.
    pub fn content(&self) -> &Component {
        &self.content
    }

    /// Whether following siblings become children of this tag. When false
    /// the tag is auto-closing and should not be closed explicitly.
    pub fn allows_children(&self) -> bool {
        self.allows_children
    }
}

/// A cursor over a tag's arguments (everything after the name).
///
/// Handlers pop arguments in order; whatever is not consumed simply stays
/// unread. Name-only resolvers reject tags that carry any arguments at all.
#[derive(Debug)]
pub struct Arguments<'a> {
    parts: &'a [TagPart],
    cursor: usize,
}

impl<'a> Arguments<'a> {
    pub(crate) fn new(parts: &'a [TagPart]) -> Self {
        Arguments { parts, cursor: 0 }
    }

    /// Whether any arguments remain.
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.parts.len()
    }

    /// How many arguments remain.
    pub fn remaining(&self) -> usize {
        self.parts.len().saturating_sub(self.cursor)
    }

    /// Look at the next argument without consuming it.
    pub fn peek(&self) -> Option<&'a TagPart> {
        self.parts.get(self.cursor)
    }

    /// Consume and return the next argument.
    pub fn pop(&mut self) -> Option<&'a TagPart> {
        let part = self.parts.get(self.cursor);
        if part.is_some() {
            self.cursor += 1;
        }
        part
    }

    /// Consume the next argument, or fail describing what was expected.
    pub fn pop_or(&mut self, expected: &str) -> Result<&'a TagPart> {
        self.pop().ok_or_else(|| {
            ParseError::new(ErrorKind::InvalidArgument(format!(
                "missing argument, expected {expected}"
            )))
        })
    }

    /// Rewind the cursor to the first argument.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
