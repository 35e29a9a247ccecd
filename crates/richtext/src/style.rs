//! Style types for rich-text components.
//!
//! A `Style` combines a color, decoration flags and interaction events.
//! Styles are never mutated in place; merging produces a new value.

use bitflags::bitflags;

use crate::color::Color;
use crate::event::{ClickEvent, HoverEvent};

bitflags! {
    /// Text decoration flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Decorations: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINED = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const OBFUSCATED = 1 << 4;
    }
}

impl Default for Decorations {
    fn default() -> Self {
        Decorations::empty()
    }
}

/// Complete style specification for a component.
///
/// Every field is optional; an unset field inherits from the ancestor style
/// when merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Text color.
    pub color: Option<Color>,
    /// Decoration flags.
    pub decorations: Decorations,
    /// Click handler.
    pub click: Option<ClickEvent>,
    /// Hover handler.
    pub hover: Option<HoverEvent>,
    /// Text inserted into the prompt on shift-click.
    pub insertion: Option<String>,
    /// Font identifier.
    pub font: Option<String>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// A style carrying only a color.
    pub fn color(color: Color) -> Self {
        Style {
            color: Some(color),
            ..Style::default()
        }
    }

    /// A style carrying only decoration flags.
    pub fn decorated(decorations: Decorations) -> Self {
        Style {
            decorations,
            ..Style::default()
        }
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.decorations.is_empty()
            && self.click.is_none()
            && self.hover.is_none()
            && self.insertion.is_none()
            && self.font.is_none()
    }

    /// Merge this style with an ancestor style, without mutating either.
    ///
    /// Local values win; fields unset here are inherited from `ancestor`.
    /// Decoration flags are unioned.
    ///
    /// # Examples
    ///
    /// ```
    /// use richtext::{Color, Decorations, NamedColor, Style};
    ///
    /// let ancestor = Style::color(Color::Named(NamedColor::Red));
    /// let local = Style::decorated(Decorations::BOLD);
    ///
    /// let merged = local.merge(&ancestor);
    /// assert_eq!(merged.color, Some(Color::Named(NamedColor::Red)));
    /// assert!(merged.decorations.contains(Decorations::BOLD));
    /// ```
    pub fn merge(&self, ancestor: &Style) -> Style {
        Style {
            color: self.color.or(ancestor.color),
            decorations: self.decorations | ancestor.decorations,
            click: self.click.clone().or_else(|| ancestor.click.clone()),
            hover: self.hover.clone().or_else(|| ancestor.hover.clone()),
            insertion: self
                .insertion
                .clone()
                .or_else(|| ancestor.insertion.clone()),
            font: self.font.clone().or_else(|| ancestor.font.clone()),
        }
    }
}
