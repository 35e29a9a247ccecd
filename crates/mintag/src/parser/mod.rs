//! The parsing pipeline: scanner, escaping helpers, macro pre-processor and
//! tree builder.

pub mod escape;
pub mod lexer;
pub mod node;
pub(crate) mod preprocess;
pub(crate) mod treebuilder;

pub use escape::{unescape, unquote_and_escape};
pub use lexer::{tokenize, Span, Token, TokenKind};
pub use node::{Node, RootNode, TagNode, TagPart, TextNode};
