//! The standard tag set.
//!
//! A small built-in vocabulary — colors, decorations, click and hover —
//! registered through the same resolver mechanism as user tags. Nothing
//! here is privileged: any of these can be overridden or left out entirely
//! by building an engine without them.

use once_cell::sync::Lazy;
use richtext::{ClickAction, ClickEvent, Color, Decorations, HoverEvent, Style};

use crate::resolver::TagResolver;
use crate::tag::Tag;

static DEFAULTS: Lazy<TagResolver> =
    Lazy::new(|| TagResolver::combining([color(), decorations(), click(), hover()]));

/// The full standard tag set, built once and shared.
pub fn defaults() -> TagResolver {
    DEFAULTS.clone()
}

/// Color tags: bare names (`<red>`), hex values (`<#ff5733>`), and the
/// argumented form (`<color:red>`, also answering to `colour` and `c`).
pub fn color() -> TagResolver {
    TagResolver::combining([
        TagResolver::dynamic(|name| {
            Color::parse(name)
                .ok()
                .map(|color| Tag::styling(Style::color(color)))
        }),
        TagResolver::handler(["color", "colour", "c"], |args, ctx| {
            let value = args.pop_or("a color name or hex value")?;
            let color = Color::parse(value.value()).map_err(|err| ctx.error(err.to_string()))?;
            Ok(Tag::styling(Style::color(color)))
        }),
    ])
}

/// Decoration tags: `bold`/`b`, `italic`/`i`/`em`, `underlined`/`u`,
/// `strikethrough`/`st`, `obfuscated`/`obf`.
pub fn decorations() -> TagResolver {
    let entries: &[(&[&str], Decorations)] = &[
        (&["bold", "b"][..], Decorations::BOLD),
        (&["italic", "i", "em"][..], Decorations::ITALIC),
        (&["underlined", "u"][..], Decorations::UNDERLINED),
        (&["strikethrough", "st"][..], Decorations::STRIKETHROUGH),
        (&["obfuscated", "obf"][..], Decorations::OBFUSCATED),
    ];

    let mut map = Vec::new();
    for (names, decoration) in entries {
        for name in *names {
            map.push((*name, Tag::styling(Style::decorated(*decoration))));
        }
    }
    TagResolver::map(map)
}

/// Click tags: `<click:ACTION:value>`.
pub fn click() -> TagResolver {
    TagResolver::handler(["click"], |args, ctx| {
        let action_arg = args.pop_or("a click action")?;
        let action = ClickAction::by_name(&action_arg.value().to_ascii_lowercase())
            .ok_or_else(|| ctx.error(format!("unknown click action: {}", action_arg.value())))?;
        let value = args.pop_or("a click value")?;

        Ok(Tag::styling(Style {
            click: Some(ClickEvent::new(action, value.value())),
            ..Style::default()
        }))
    })
}

/// Hover tags: `<hover:show_text:VALUE>`, where VALUE is itself markup and
/// is parsed through the context.
pub fn hover() -> TagResolver {
    TagResolver::handler(["hover"], |args, ctx| {
        let action = args.pop_or("a hover action")?;
        match action.value().to_ascii_lowercase().as_str() {
            "show_text" => {
                let value = args.pop_or("the text to show")?;
                let tooltip = ctx.parse_inner(value.value())?;
                Ok(Tag::styling(Style {
                    hover: Some(HoverEvent::show_text(tooltip)),
                    ..Style::default()
                }))
            }
            other => Err(ctx.error(format!("unknown hover action: {other}"))),
        }
    })
}
