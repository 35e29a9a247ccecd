//! The rich-text component tree.
//!
//! A [`Component`] is an immutable tree of content nodes, each carrying its
//! own [`Style`]. Children inherit unset style fields from their ancestors;
//! that inheritance is applied when the tree is flattened into styled runs.

use crate::style::Style;

/// The content carried by a single component node.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// No content of its own; acts as a styled grouping node.
    Empty,
    /// A literal text leaf.
    Text(String),
}

/// A node in the rich-text tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Component {
    content: Content,
    style: Style,
    children: Vec<Component>,
}

impl Component {
    /// A component with no content and no style.
    pub fn empty() -> Self {
        Component {
            content: Content::Empty,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// A text leaf with no style of its own.
    pub fn text(text: impl Into<String>) -> Self {
        Component {
            content: Content::Text(text.into()),
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// An empty component carrying the given style.
    pub fn styled(style: Style) -> Self {
        Component {
            content: Content::Empty,
            style,
            children: Vec::new(),
        }
    }

    /// Replace the style of this component.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Append a child, preserving insertion order.
    pub fn append(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    /// The content of this node.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The style of this node (not including inherited fields).
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The children of this node, in append order.
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Returns true if this node has no content, style or children.
    pub fn is_empty(&self) -> bool {
        matches!(self.content, Content::Empty) && self.style.is_empty() && self.children.is_empty()
    }

    /// The concatenated text of this tree, depth first, styles ignored.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Content::Text(text) = &self.content {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Flatten this tree into styled runs, applying style inheritance.
    ///
    /// Each run carries the fully merged style of the text leaf it came
    /// from. Empty text leaves produce no runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use richtext::{Color, Component, NamedColor, Style};
    ///
    /// let tree = Component::styled(Style::color(Color::Named(NamedColor::Red)))
    ///     .append(Component::text("hi"));
    ///
    /// let runs = tree.flatten();
    /// assert_eq!(runs.len(), 1);
    /// assert_eq!(runs[0].text, "hi");
    /// assert_eq!(runs[0].style.color, Some(Color::Named(NamedColor::Red)));
    /// ```
    pub fn flatten(&self) -> Vec<StyledRun> {
        let mut runs = Vec::new();
        self.flatten_into(&Style::default(), &mut runs);
        runs
    }

    fn flatten_into(&self, inherited: &Style, runs: &mut Vec<StyledRun>) {
        let effective = self.style.merge(inherited);
        if let Content::Text(text) = &self.content {
            if !text.is_empty() {
                runs.push(StyledRun {
                    text: text.clone(),
                    style: effective.clone(),
                });
            }
        }
        for child in &self.children {
            child.flatten_into(&effective, runs);
        }
    }
}

/// A contiguous piece of text with its fully resolved style.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRun {
    pub text: String,
    pub style: Style,
}
