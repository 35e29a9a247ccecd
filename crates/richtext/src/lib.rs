//! Immutable rich-text component model.
//!
//! This crate provides the document tree that markup engines render into:
//! a [`Component`] tree where every node carries a [`Style`] (color,
//! decorations, click/hover events) and children inherit unset style fields
//! from their ancestors.
//!
//! # Overview
//!
//! - [`Component`] — the tree itself, built through `text`/`empty`/`styled`
//!   constructors and an order-preserving [`Component::append`].
//! - [`Style`] — per-node styling, combined with [`Style::merge`], which
//!   never mutates and lets local fields win over ancestor fields.
//! - [`Color`] — sixteen named colors plus RGB.
//! - [`ClickEvent`] / [`HoverEvent`] — interaction handlers carried by
//!   styles; hover tooltips are themselves components.
//!
//! # Usage
//!
//! ```
//! use richtext::{Color, Component, NamedColor, Style};
//!
//! let tree = Component::empty()
//!     .append(Component::text("Hello "))
//!     .append(
//!         Component::styled(Style::color(Color::Named(NamedColor::Red)))
//!             .append(Component::text("World")),
//!     );
//!
//! assert_eq!(tree.plain_text(), "Hello World");
//! ```

pub mod color;
pub mod component;
pub mod error;
pub mod event;
pub mod style;

// Re-export main types at crate root
pub use color::{Color, NamedColor};
pub use component::{Component, Content, StyledRun};
pub use error::ColorParseError;
pub use event::{ClickAction, ClickEvent, HoverEvent};
pub use style::{Decorations, Style};
