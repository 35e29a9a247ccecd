//! The escape/strip pair and its algebra.
//!
//! Both operations tokenize but never build a tree and never resolve a tag
//! to its value; a span only counts as a tag when its name is well formed
//! and the resolver chain knows it.

use mintag::MiniTag;

fn engine() -> MiniTag {
    MiniTag::new()
}

// Inputs containing no tag the standard resolver chain recognizes.
const UNRESOLVABLE: &[&str] = &[
    "",
    "hello world",
    "<unknownTag>hi",
    "<3>",
    "1 < 2 > 3",
    "a <thing> b",
    "</nothing>",
    r"stray \ backslash",
    "日本語 <かな> text",
];

// ============================================================================
// STRIP
// ============================================================================

#[test]
fn strip_removes_resolvable_tags() {
    assert_eq!(engine().strip("<red>hi</red>"), "hi");
    assert_eq!(engine().strip("a<bold>b"), "ab");
    assert_eq!(engine().strip("<red/>x"), "x");
}

#[test]
fn strip_keeps_unresolvable_tags() {
    assert_eq!(engine().strip("<red><nope>"), "<nope>");
}

#[test]
fn strip_handles_quoted_arguments() {
    assert_eq!(
        engine().strip("<hover:show_text:'<red>x'>y</hover>"),
        "y"
    );
}

#[test]
fn strip_is_the_identity_on_unresolvable_input() {
    let engine = engine();
    for input in UNRESOLVABLE {
        assert_eq!(engine.strip(input), *input, "strip changed {input:?}");
    }
}

#[test]
fn strip_is_idempotent() {
    let engine = engine();
    let inputs = [
        "<red>hi</red>",
        "a<bold>b",
        "<hover:show_text:'<red>x'>y</hover>",
        "<red><nope></red>",
        "plain text",
        "<click:open_url:https://example.com>go</click>",
    ];
    for input in inputs {
        let once = engine.strip(input);
        assert_eq!(engine.strip(&once), once, "strip not idempotent on {input:?}");
    }
}

// ============================================================================
// ESCAPE
// ============================================================================

#[test]
fn escape_prefixes_resolvable_tags() {
    assert_eq!(engine().escape("<red>hi</red>"), r"\<red>hi\</red>");
}

#[test]
fn escape_is_the_identity_on_unresolvable_input() {
    let engine = engine();
    for input in UNRESOLVABLE {
        assert_eq!(engine.escape(input), *input, "escape changed {input:?}");
    }
}

#[test]
fn escaped_output_parses_back_to_the_literal_input() {
    let engine = engine();
    for input in ["<red>hi</red>", "<bold>x", "a <italic>b</italic> c"] {
        let escaped = engine.escape(input);
        let component = engine.parse(&escaped).unwrap();
        assert_eq!(component.plain_text(), input, "round trip failed for {input:?}");
        for run in component.flatten() {
            assert!(run.style.is_empty(), "escaped tag still styled in {input:?}");
        }
    }
}

// ============================================================================
// THE PAIR
// ============================================================================

#[test]
fn strip_of_escape_is_the_identity_without_resolvable_tags() {
    let engine = engine();
    for input in UNRESOLVABLE {
        assert_eq!(
            engine.strip(&engine.escape(input)),
            *input,
            "strip(escape(s)) != s for {input:?}"
        );
    }
}

#[test]
fn escape_and_strip_respect_the_resolver_chain() {
    // A chain that knows nothing treats everything as text.
    let bare = MiniTag::builder().standard_tags(false).build();
    assert_eq!(bare.strip("<red>hi</red>"), "<red>hi</red>");
    assert_eq!(bare.escape("<red>hi</red>"), "<red>hi</red>");
}
