//! Convenience umbrella crate for the mintag workspace.
//!
//! Most users should depend on [`mintag`] (the tag-markup engine) directly;
//! [`richtext`] holds the rich-text component model the engine renders into.
//!
//! ```
//! let component = mintag::parse("<red>Hello</red> world").unwrap();
//! assert_eq!(component.plain_text(), "Hello world");
//! ```

pub use mintag;
pub use richtext;
