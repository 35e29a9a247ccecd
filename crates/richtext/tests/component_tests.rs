//! Integration tests for the component tree contract consumed by markup
//! engines: order-preserving append, non-mutating style merge, and leaf
//! construction from plain strings.

use richtext::{
    ClickEvent, Color, Component, Decorations, HoverEvent, NamedColor, Style,
};

// ============================================================================
// APPEND
// ============================================================================

#[test]
fn append_is_order_preserving() {
    let tree = Component::empty()
        .append(Component::text("1"))
        .append(Component::text("2"))
        .append(Component::text("3"));
    assert_eq!(tree.plain_text(), "123");
}

#[test]
fn append_is_associative_over_plain_text() {
    let a = Component::text("a");
    let b = Component::text("b");
    let c = Component::text("c");

    let left = Component::empty()
        .append(Component::empty().append(a.clone()).append(b.clone()))
        .append(c.clone());
    let right = Component::empty()
        .append(a)
        .append(Component::empty().append(b).append(c));

    assert_eq!(left.plain_text(), right.plain_text());
    let left_runs: Vec<_> = left.flatten().into_iter().map(|r| r.text).collect();
    let right_runs: Vec<_> = right.flatten().into_iter().map(|r| r.text).collect();
    assert_eq!(left_runs, right_runs);
}

// ============================================================================
// STYLE MERGE
// ============================================================================

#[test]
fn nested_styles_accumulate() {
    let tree = Component::styled(Style::color(Color::Named(NamedColor::Gold))).append(
        Component::styled(Style::decorated(Decorations::BOLD | Decorations::ITALIC))
            .append(Component::text("fancy")),
    );

    let runs = tree.flatten();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].style.color, Some(Color::Named(NamedColor::Gold)));
    assert_eq!(
        runs[0].style.decorations,
        Decorations::BOLD | Decorations::ITALIC
    );
}

#[test]
fn click_event_is_inherited() {
    let click = ClickEvent::open_url("https://example.com");
    let tree = Component::styled(Style {
        click: Some(click.clone()),
        ..Style::default()
    })
    .append(Component::text("link"));

    let runs = tree.flatten();
    assert_eq!(runs[0].style.click, Some(click));
}

#[test]
fn hover_tooltip_is_a_component() {
    let tooltip = Component::styled(Style::color(Color::Named(NamedColor::Red)))
        .append(Component::text("hi"));
    let hover = HoverEvent::show_text(tooltip.clone());

    let tree = Component::styled(Style {
        hover: Some(hover),
        ..Style::default()
    })
    .append(Component::text("hover me"));

    let runs = tree.flatten();
    match &runs[0].style.hover {
        Some(HoverEvent::ShowText(inner)) => assert_eq!(**inner, tooltip),
        None => panic!("hover event lost during flatten"),
    }
}

// ============================================================================
// LEAVES
// ============================================================================

#[test]
fn text_leaf_has_no_style_of_its_own() {
    let leaf = Component::text("plain");
    assert!(leaf.style().is_empty());
    assert_eq!(leaf.plain_text(), "plain");
}

#[test]
fn unicode_text_survives() {
    let tree = Component::empty().append(Component::text("日本語テキスト"));
    assert_eq!(tree.plain_text(), "日本語テキスト");
}
