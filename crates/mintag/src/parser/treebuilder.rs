//! Builds the element tree from the token stream and resolves each tag.
//!
//! The tree itself has no notion of which tags pair up; a close tag simply
//! folds the matching open tag's pending children under it. What a tag
//! means for its children is the resolved tag's concern, not the tree's.

use crate::context::Context;
use crate::error::{ErrorKind, ParseError, Result};
use crate::parser::escape::unquote_and_escape;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::node::{push_child, Node, RootNode, TagNode, TagPart, TextNode};
use crate::syntax::{is_valid_tag_name, sanitize_name};
use crate::tag::Tag;

pub(crate) fn build_tree(
    tokens: Vec<Token>,
    message: &str,
    original: &str,
    ctx: &Context<'_>,
) -> Result<RootNode> {
    let syntax = ctx.syntax();
    let mut root_children: Vec<Node> = Vec::new();
    // Open tags, outermost first; nodes attach to their parent when closed.
    let mut stack: Vec<TagNode> = Vec::new();

    macro_rules! current_children {
        () => {
            match stack.last_mut() {
                Some(open) => open.children_mut(),
                None => &mut root_children,
            }
        };
    }

    for token in tokens {
        match token.kind() {
            TokenKind::Text => {
                let node = Node::Text(TextNode::new(token, message, syntax));
                push_child(current_children!(), node, message, syntax);
            }

            TokenKind::OpenTag | TokenKind::OpenCloseTag => {
                let name_token = match token.children().first() {
                    Some(name_token) => name_token,
                    None => {
                        return Err(ParseError::new(ErrorKind::Internal(
                            "open tag token has no name child".into(),
                        ))
                        .with_context(message, vec![token.span()]))
                    }
                };

                // Validity is checked on the raw span; if it fails, the
                // whole span is just text.
                let raw_name = sanitize_name(name_token.value(message));
                if !is_valid_tag_name(&raw_name) {
                    let node = Node::Text(TextNode::new(token, message, syntax));
                    push_child(current_children!(), node, message, syntax);
                    continue;
                }

                let kind = token.kind();
                let mut tag_node = TagNode::new(token, message, ctx)?;
                let name = sanitize_name(tag_node.name());

                match ctx.resolve(&name, tag_node.args(), tag_node.token())? {
                    None => {
                        if ctx.strict() {
                            return Err(ParseError::new(ErrorKind::UnknownTag { name })
                                .with_context(message, vec![tag_node.token().span()]));
                        }
                        log::debug!(
                            "no resolver matched tag '<{}>', emitting it as literal text",
                            tag_node.name()
                        );
                        let node =
                            Node::Text(TextNode::new(tag_node.token().clone(), message, syntax));
                        push_child(current_children!(), node, message, syntax);
                    }
                    Some(tag) => {
                        let descends = kind != TokenKind::OpenCloseTag
                            && match &tag {
                                Tag::Inserting(inserting) => inserting.allows_children(),
                                Tag::PreProcess(_) => true,
                            };
                        tag_node.set_tag(tag);
                        if descends {
                            stack.push(tag_node);
                        } else {
                            push_child(current_children!(), Node::Tag(tag_node), message, syntax);
                        }
                    }
                }
            }

            TokenKind::CloseTag => {
                let close_values: Vec<String> = token
                    .children()
                    .iter()
                    .map(|child| unquote_and_escape(message, child.span(), syntax))
                    .collect();
                let close_name = match close_values.first() {
                    Some(name) => sanitize_name(name),
                    None => {
                        return Err(ParseError::new(ErrorKind::Internal(
                            "close tag token has no name child".into(),
                        ))
                        .with_context(message, vec![token.span()]))
                    }
                };

                // A close tag for something that could never open is text.
                if !is_valid_tag_name(&close_name) || !ctx.resolver().has(&close_name) {
                    let node = Node::Text(TextNode::new(token, message, syntax));
                    push_child(current_children!(), node, message, syntax);
                    continue;
                }

                let matched = stack
                    .iter()
                    .rposition(|open| tag_closes(&close_values, open.parts()));
                match matched {
                    None => {
                        // Unmatched close tags are never an error, just like
                        // unmatched open tags.
                        let node = Node::Text(TextNode::new(token, message, syntax));
                        push_child(current_children!(), node, message, syntax);
                    }
                    Some(idx) => {
                        if idx != stack.len() - 1 && ctx.strict() {
                            let innermost = &stack[stack.len() - 1];
                            let spans = vec![
                                stack[idx].token().span(),
                                innermost.token().span(),
                                token.span(),
                            ];
                            return Err(ParseError::new(ErrorKind::MismatchedCloseTag {
                                open: innermost.name().to_string(),
                                close: close_name,
                            })
                            .with_context(message, spans));
                        }
                        // Fold everything above the match into its parent;
                        // inner unclosed tags stay nested where they opened.
                        while stack.len() > idx {
                            let node = match stack.pop() {
                                Some(node) => node,
                                None => break,
                            };
                            let parent = match stack.last_mut() {
                                Some(open) => open.children_mut(),
                                None => &mut root_children,
                            };
                            push_child(parent, Node::Tag(node), message, syntax);
                        }
                    }
                }
            }

            TokenKind::TagPart => {
                // Part tokens only occur as children of tag tokens.
            }
        }
    }

    if ctx.strict() && !stack.is_empty() {
        let names: Vec<&str> = stack.iter().map(|open| open.name()).collect();
        let spans = stack.iter().map(|open| open.token().span()).collect();
        return Err(ParseError::new(ErrorKind::UnclosedTags {
            names: names.join(", "),
        })
        .with_context(message, spans));
    }

    // Lenient mode: unclosed tags close at end of input.
    while let Some(node) = stack.pop() {
        let parent = match stack.last_mut() {
            Some(open) => open.children_mut(),
            None => &mut root_children,
        };
        push_child(parent, Node::Tag(node), message, syntax);
    }

    Ok(RootNode::new(
        message.to_string(),
        original.to_string(),
        root_children,
    ))
}

/// Whether a close tag's parts close an open tag's parts: the name matches
/// case-insensitively and any further close parts match the open tag's
/// leading arguments exactly.
fn tag_closes(close_parts: &[String], open_parts: &[TagPart]) -> bool {
    if close_parts.len() > open_parts.len() {
        return false;
    }
    match (close_parts.first(), open_parts.first()) {
        (Some(close_name), Some(open_name)) => {
            if !close_name.eq_ignore_ascii_case(open_name.value()) {
                return false;
            }
        }
        _ => return false,
    }
    close_parts
        .iter()
        .zip(open_parts)
        .skip(1)
        .all(|(close, open)| close.as_str() == open.value())
}
