//! Placeholder helpers: single-tag resolvers for common substitutions.

use richtext::Component;

use crate::resolver::TagResolver;
use crate::tag::Tag;

/// A placeholder whose value is itself parsed as markup. The raw value is
/// substituted textually before structural parsing, so it may contain tags
/// and may be used anywhere a tag could appear, including inside other
/// tags' arguments.
///
/// # Panics
///
/// Panics if `name` is not a valid tag name.
pub fn parsed(name: &str, value: impl Into<String>) -> TagResolver {
    TagResolver::single(name, Tag::pre_process(value))
}

/// A placeholder inserting a literal string; the value is never parsed as
/// markup.
///
/// # Panics
///
/// Panics if `name` is not a valid tag name.
pub fn unparsed(name: &str, value: impl Into<String>) -> TagResolver {
    TagResolver::single(name, Tag::inserting(Component::text(value.into())))
}

/// A placeholder inserting a pre-built component.
///
/// # Panics
///
/// Panics if `name` is not a valid tag name.
pub fn component(name: &str, value: Component) -> TagResolver {
    TagResolver::single(name, Tag::inserting(value))
}
