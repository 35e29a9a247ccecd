//! Folds a parsed tree into a rich-text component.

use richtext::Component;

use crate::error::{ErrorKind, ParseError, Result};
use crate::parser::node::{Node, RootNode};
use crate::tag::Tag;

/// Depth-first fold of the tree into the content model: every tag node
/// contributes the component its resolved tag inserts, with rendered
/// children appended in order; text leaves become unstyled literals. Style
/// inheritance is the content model's concern, applied when the component
/// tree is flattened.
pub(crate) fn render_tree(root: &RootNode) -> Result<Component> {
    let mut out = Component::empty();
    for child in root.children() {
        out = out.append(render_node(child, root.source())?);
    }
    Ok(out)
}

fn render_node(node: &Node, source: &str) -> Result<Component> {
    match node {
        Node::Text(text) => Ok(Component::text(text.value())),
        Node::Tag(tag_node) => {
            let mut out = match tag_node.tag() {
                Tag::Inserting(inserting) => inserting.content().clone(),
                Tag::PreProcess(_) => {
                    // Pre-process tags are consumed before the tree is
                    // built; one surviving to this point means the two
                    // phases disagreed about what counts as a tag.
                    return Err(ParseError::new(ErrorKind::Internal(format!(
                        "pre-process tag '<{}>' survived into the render phase",
                        tag_node.name()
                    )))
                    .with_context(source, vec![tag_node.token().span()]));
                }
            };
            for child in tag_node.children() {
                out = out.append(render_node(child, source)?);
            }
            Ok(out)
        }
    }
}
