//! Resolver combinators: the name → tag lookup chain.
//!
//! A [`TagResolver`] maps a tag name and its arguments to a [`Tag`].
//! Resolvers compose: sequences try each member in order and take the first
//! match, filters suppress resolved tags, and the builder merges individual
//! registrations with bulk collections under a fixed precedence rule.
//!
//! Resolvers are immutable once built and may be shared freely across
//! threads; building one is not itself thread-safe.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use crate::context::Context;
use crate::error::Result;
use crate::syntax::{is_valid_tag_name, sanitize_name};
use crate::tag::{Arguments, Tag};

/// An argumented tag handler.
pub type TagHandler = Arc<dyn Fn(&mut Arguments<'_>, &Context<'_>) -> Result<Tag> + Send + Sync>;

/// A name-only dynamic lookup.
pub type DynamicFn = Arc<dyn Fn(&str) -> Option<Tag> + Send + Sync>;

/// A predicate over resolved tags; `true` keeps the tag.
pub type TagPredicate = Arc<dyn Fn(&Tag) -> bool + Send + Sync>;

/// A lookup strategy, or combinator over strategies, from tag name and
/// arguments to a [`Tag`].
///
/// All lookups receive names already lower-cased; construction lower-cases
/// registered names to match.
#[derive(Clone)]
pub enum TagResolver {
    /// Resolves nothing.
    Empty,
    /// A single name bound to a fixed tag.
    Single { name: String, tag: Tag },
    /// A bulk collection of name → tag bindings.
    Map(Arc<HashMap<String, Tag>>),
    /// Named tags whose value is computed from arguments and context.
    Handler {
        names: Arc<HashSet<String>>,
        handler: TagHandler,
    },
    /// Computes a tag from the name alone.
    Dynamic(DynamicFn),
    /// Delegates to `inner`, then suppresses any resolved tag the predicate
    /// rejects — the key itself stays visible to `has`.
    Filtering {
        inner: Arc<TagResolver>,
        keep: TagPredicate,
    },
    /// Tries each resolver in order; the first non-miss wins.
    Sequence(Arc<Vec<TagResolver>>),
}

impl TagResolver {
    /// A resolver that resolves nothing.
    pub fn empty() -> TagResolver {
        TagResolver::Empty
    }

    /// Resolve a single tag by name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid tag name.
    pub fn single(name: &str, tag: Tag) -> TagResolver {
        TagResolver::Single {
            name: checked_name(name),
            tag,
        }
    }

    /// A bulk collection of name → tag bindings.
    ///
    /// # Panics
    ///
    /// Panics if any key is not a valid tag name.
    pub fn map<K: AsRef<str>>(entries: impl IntoIterator<Item = (K, Tag)>) -> TagResolver {
        let map: HashMap<String, Tag> = entries
            .into_iter()
            .map(|(name, tag)| (checked_name(name.as_ref()), tag))
            .collect();
        TagResolver::Map(Arc::new(map))
    }

    /// Tags answering to `names`, resolved by `handler` from arguments and
    /// context.
    ///
    /// # Panics
    ///
    /// Panics if any name is not a valid tag name.
    pub fn handler<I, S, F>(names: I, handler: F) -> TagResolver
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&mut Arguments<'_>, &Context<'_>) -> Result<Tag> + Send + Sync + 'static,
    {
        let names: HashSet<String> = names
            .into_iter()
            .map(|n| checked_name(n.as_ref()))
            .collect();
        TagResolver::Handler {
            names: Arc::new(names),
            handler: Arc::new(handler),
        }
    }

    /// A resolver computing argument-less tags from the name alone.
    pub fn dynamic<F>(f: F) -> TagResolver
    where
        F: Fn(&str) -> Option<Tag> + Send + Sync + 'static,
    {
        TagResolver::Dynamic(Arc::new(f))
    }

    /// Wraps `inner`, keeping only resolved tags for which `keep` returns
    /// true. A rejected tag is suppressed entirely, not merely renamed or
    /// hidden from lookup.
    pub fn filtering<F>(inner: TagResolver, keep: F) -> TagResolver
    where
        F: Fn(&Tag) -> bool + Send + Sync + 'static,
    {
        TagResolver::Filtering {
            inner: Arc::new(inner),
            keep: Arc::new(keep),
        }
    }

    /// Combines resolvers; each is tried in order and the first non-miss
    /// wins. Nested sequences are flattened, a single element is returned
    /// unchanged, and no elements at all collapse to [`TagResolver::empty`].
    pub fn combining(resolvers: impl IntoIterator<Item = TagResolver>) -> TagResolver {
        let mut flat = Vec::new();
        for resolver in resolvers {
            match resolver {
                TagResolver::Sequence(inner) => flat.extend(inner.iter().cloned()),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => TagResolver::Empty,
            1 => flat.into_iter().next().unwrap_or(TagResolver::Empty),
            _ => TagResolver::Sequence(Arc::new(flat)),
        }
    }

    /// A new builder for gradually constructing a resolver chain.
    pub fn builder() -> TagResolverBuilder {
        TagResolverBuilder::default()
    }

    /// The standard tag set.
    pub fn standard() -> TagResolver {
        crate::standard::defaults()
    }

    /// Whether this resolver handles tags with the given (sanitized) name.
    /// This does not validate arguments.
    pub fn has(&self, name: &str) -> bool {
        match self {
            TagResolver::Empty => false,
            TagResolver::Single { name: key, .. } => key == name,
            TagResolver::Map(map) => map.contains_key(name),
            TagResolver::Handler { names, .. } => names.contains(name),
            TagResolver::Dynamic(f) => f(name).is_some(),
            TagResolver::Filtering { inner, .. } => inner.has(name),
            TagResolver::Sequence(resolvers) => resolvers.iter().any(|r| r.has(name)),
        }
    }

    /// Resolve a tag by (sanitized) name and arguments.
    ///
    /// Returns `Ok(None)` on a miss; errors are raised by handlers for
    /// invalid arguments, and by name-only strategies when arguments are
    /// present at all.
    pub fn resolve(
        &self,
        name: &str,
        args: &mut Arguments<'_>,
        ctx: &Context<'_>,
    ) -> Result<Option<Tag>> {
        match self {
            TagResolver::Empty => Ok(None),
            TagResolver::Single { name: key, tag } => {
                if key == name {
                    no_arguments(name, args)?;
                    Ok(Some(tag.clone()))
                } else {
                    Ok(None)
                }
            }
            TagResolver::Map(map) => match map.get(name) {
                Some(tag) => {
                    no_arguments(name, args)?;
                    Ok(Some(tag.clone()))
                }
                None => Ok(None),
            },
            TagResolver::Handler { names, handler } => {
                if names.contains(name) {
                    handler(args, ctx).map(Some)
                } else {
                    Ok(None)
                }
            }
            TagResolver::Dynamic(f) => match f(name) {
                Some(tag) => {
                    no_arguments(name, args)?;
                    Ok(Some(tag))
                }
                None => Ok(None),
            },
            TagResolver::Filtering { inner, keep } => {
                Ok(inner.resolve(name, args, ctx)?.filter(|tag| keep(tag)))
            }
            TagResolver::Sequence(resolvers) => {
                for resolver in resolvers.iter() {
                    match resolver.resolve(name, args, ctx)? {
                        Some(tag) => return Ok(Some(tag)),
                        None => args.reset(),
                    }
                }
                Ok(None)
            }
        }
    }
}

impl fmt::Debug for TagResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagResolver::Empty => f.write_str("Empty"),
            TagResolver::Single { name, .. } => f.debug_struct("Single").field("name", name).finish(),
            TagResolver::Map(map) => {
                let mut names: Vec<_> = map.keys().collect();
                names.sort();
                f.debug_struct("Map").field("names", &names).finish()
            }
            TagResolver::Handler { names, .. } => {
                let mut names: Vec<_> = names.iter().collect();
                names.sort();
                f.debug_struct("Handler").field("names", &names).finish()
            }
            TagResolver::Dynamic(_) => f.write_str("Dynamic"),
            TagResolver::Filtering { inner, .. } => {
                f.debug_struct("Filtering").field("inner", inner).finish()
            }
            TagResolver::Sequence(resolvers) => f.debug_list().entries(resolvers.iter()).finish(),
        }
    }
}

fn checked_name(name: &str) -> String {
    let sanitized = sanitize_name(name);
    assert!(
        is_valid_tag_name(&sanitized),
        "invalid tag name: {name:?}"
    );
    sanitized
}

fn no_arguments(name: &str, args: &Arguments<'_>) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(crate::error::ParseError::new(
            crate::error::ErrorKind::UnexpectedArguments {
                name: name.to_string(),
            },
        ))
    }
}

/// Gradually constructs a resolver chain.
///
/// Individually registered tags — via [`tag`](TagResolverBuilder::tag) or a
/// [`TagResolver::Single`] passed to
/// [`resolver`](TagResolverBuilder::resolver) — always take precedence over
/// bindings supplied through bulk collections, regardless of registration
/// order. Bulk resolvers keep their registration order among themselves.
#[derive(Debug, Default)]
pub struct TagResolverBuilder {
    tags: HashMap<String, Tag>,
    bulk: Vec<TagResolver>,
}

impl TagResolverBuilder {
    /// Register a single tag individually.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid tag name.
    pub fn tag(mut self, name: &str, tag: Tag) -> Self {
        self.tags.insert(checked_name(name), tag);
        self
    }

    /// Add a resolver to the chain. Single-tag resolvers count as
    /// individual registrations; sequences are flattened.
    pub fn resolver(mut self, resolver: TagResolver) -> Self {
        match resolver {
            TagResolver::Single { name, tag } => {
                self.tags.insert(name, tag);
            }
            TagResolver::Sequence(resolvers) => {
                for resolver in resolvers.iter().cloned() {
                    self = self.resolver(resolver);
                }
            }
            other => self.bulk.push(other),
        }
        self
    }

    /// Add several resolvers in order.
    pub fn resolvers(mut self, resolvers: impl IntoIterator<Item = TagResolver>) -> Self {
        for resolver in resolvers {
            self = self.resolver(resolver);
        }
        self
    }

    /// Build the chain. With nothing registered this returns
    /// [`TagResolver::empty`].
    pub fn build(self) -> TagResolver {
        let mut list = Vec::new();
        if !self.tags.is_empty() {
            list.push(TagResolver::Map(Arc::new(self.tags)));
        }
        list.extend(self.bulk);
        TagResolver::combining(list)
    }
}
