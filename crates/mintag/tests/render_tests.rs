//! End-to-end tests: markup in, rendered components out.

use mintag::{placeholder, ErrorKind, MiniTag};
use richtext::{ClickAction, Color, Decorations, HoverEvent, NamedColor};

fn red() -> Color {
    Color::Named(NamedColor::Red)
}

// ============================================================================
// PLAIN TEXT AND DEGRADATION
// ============================================================================

#[test]
fn plain_text_passes_through() {
    let component = mintag::parse("Hello World").unwrap();
    assert_eq!(component.plain_text(), "Hello World");
    assert!(component.flatten()[0].style.is_empty());
}

#[test]
fn empty_input_renders_empty() {
    let component = mintag::parse("").unwrap();
    assert_eq!(component.plain_text(), "");
    assert!(component.flatten().is_empty());
}

#[test]
fn leading_digit_tag_name_is_literal_text() {
    let component = mintag::parse("<3>").unwrap();
    assert_eq!(component.plain_text(), "<3>");
    assert!(component.flatten()[0].style.is_empty());
}

#[test]
fn unknown_tag_is_literal_text_in_lenient_mode() {
    let component = mintag::parse("<unknownTag>hi").unwrap();
    // Original spelling preserved, case intact.
    assert_eq!(component.plain_text(), "<unknownTag>hi");
    let runs = component.flatten();
    assert_eq!(runs.len(), 1);
    assert!(runs[0].style.is_empty());
}

#[test]
fn unterminated_tag_is_literal_text() {
    let component = mintag::parse("oops <red").unwrap();
    assert_eq!(component.plain_text(), "oops <red");
}

#[test]
fn escaped_tag_is_literal_text() {
    let component = mintag::parse(r"\<red>hi").unwrap();
    assert_eq!(component.plain_text(), "<red>hi");
    assert!(component.flatten()[0].style.is_empty());
}

#[test]
fn unmatched_close_tag_is_literal_text() {
    let component = mintag::parse("hi</red>").unwrap();
    assert_eq!(component.plain_text(), "hi</red>");
}

// ============================================================================
// STYLES
// ============================================================================

#[test]
fn color_tag_styles_its_children() {
    let component = mintag::parse("<red>hi</red> world").unwrap();
    let runs = component.flatten();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].text, "hi");
    assert_eq!(runs[0].style.color, Some(red()));
    assert_eq!(runs[1].text, " world");
    assert_eq!(runs[1].style.color, None);
}

#[test]
fn unclosed_tag_styles_the_rest_of_the_input() {
    let component = mintag::parse("<red>hi").unwrap();
    let runs = component.flatten();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].style.color, Some(red()));
}

#[test]
fn hex_color_tag() {
    let component = mintag::parse("<#ff5733>hi").unwrap();
    let runs = component.flatten();
    assert_eq!(runs[0].style.color, Some(Color::Rgb(255, 87, 51)));
}

#[test]
fn argumented_color_tag() {
    let component = mintag::parse("<color:red>hi").unwrap();
    assert_eq!(component.flatten()[0].style.color, Some(red()));
}

#[test]
fn tag_names_resolve_case_insensitively() {
    let component = mintag::parse("<RED>hi</red>").unwrap();
    assert_eq!(component.flatten()[0].style.color, Some(red()));
}

#[test]
fn nested_decorations_accumulate() {
    let component = mintag::parse("<bold><italic>x</italic></bold>").unwrap();
    let runs = component.flatten();
    assert_eq!(
        runs[0].style.decorations,
        Decorations::BOLD | Decorations::ITALIC
    );
}

#[test]
fn inner_color_overrides_outer() {
    let component = mintag::parse("<red>a<blue>b</blue>c</red>").unwrap();
    let runs = component.flatten();
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0].style.color, Some(red()));
    assert_eq!(runs[1].style.color, Some(Color::Named(NamedColor::Blue)));
    assert_eq!(runs[2].style.color, Some(red()));
}

#[test]
fn self_closing_tag_takes_no_children() {
    let component = mintag::parse("<red/>x").unwrap();
    let runs = component.flatten();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "x");
    assert_eq!(runs[0].style.color, None);
}

#[test]
fn closing_an_outer_tag_keeps_inner_tags_nested() {
    // </red> closes the outer tag; the still-open <bold> stays nested.
    let component = mintag::parse("<red><bold>hi</red>").unwrap();
    let runs = component.flatten();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].style.color, Some(red()));
    assert!(runs[0].style.decorations.contains(Decorations::BOLD));
}

// ============================================================================
// CLICK AND HOVER
// ============================================================================

#[test]
fn click_tag_attaches_an_action() {
    let component = mintag::parse("<click:open_url:https://example.com>go</click>").unwrap();
    let runs = component.flatten();
    let click = runs[0].style.click.as_ref().unwrap();
    assert_eq!(click.action, ClickAction::OpenUrl);
    assert_eq!(click.value, "https://example.com");
}

#[test]
fn hover_argument_renders_as_markup() {
    let component = mintag::parse("<hover:show_text:'<red>hi'>term</hover>").unwrap();
    let runs = component.flatten();
    assert_eq!(runs[0].text, "term");

    let hover = runs[0].style.hover.as_ref().unwrap();
    let HoverEvent::ShowText(tooltip) = hover;
    let tooltip_runs = tooltip.flatten();
    assert_eq!(tooltip_runs.len(), 1);
    assert_eq!(tooltip_runs[0].text, "hi");
    assert_eq!(tooltip_runs[0].style.color, Some(red()));
}

#[test]
fn pre_process_placeholder_inside_click_argument() {
    let engine = MiniTag::builder()
        .resolver(placeholder::parsed("pack_url", "https://example.com/pack"))
        .build();

    let with_placeholder = engine
        .parse("<click:open_url:<pack_url>>get it</click>")
        .unwrap();
    let literal = engine
        .parse("<click:open_url:https://example.com/pack>get it</click>")
        .unwrap();

    assert_eq!(with_placeholder, literal);
    let click = with_placeholder.flatten()[0].style.click.clone().unwrap();
    assert_eq!(click.value, "https://example.com/pack");
}

#[test]
fn pre_process_placeholder_inside_quoted_click_argument() {
    let engine = MiniTag::builder()
        .resolver(placeholder::parsed("pack_url", "https://example.com/pack"))
        .build();

    let component = engine
        .parse("<click:open_url:'<pack_url>'>get it</click>")
        .unwrap();
    let click = component.flatten()[0].style.click.clone().unwrap();
    assert_eq!(click.value, "https://example.com/pack");
}

// ============================================================================
// PLACEHOLDERS AND PRE-PROCESSING
// ============================================================================

#[test]
fn parsed_placeholder_expands_as_markup() {
    let engine = MiniTag::builder()
        .resolver(placeholder::parsed("greeting", "<red>hello</red>"))
        .build();
    let component = engine.parse("<greeting> world").unwrap();
    let runs = component.flatten();
    assert_eq!(runs[0].text, "hello");
    assert_eq!(runs[0].style.color, Some(red()));
    assert_eq!(runs[1].text, " world");
}

#[test]
fn unparsed_placeholder_stays_literal() {
    let engine = MiniTag::builder()
        .resolver(placeholder::unparsed("value", "<red>raw"))
        .build();
    let component = engine.parse("<value>").unwrap();
    assert_eq!(component.plain_text(), "<red>raw");
}

#[test]
fn preprocess_substitutes_without_rendering() {
    let engine = MiniTag::builder()
        .resolver(placeholder::parsed("who", "world"))
        .build();
    assert_eq!(engine.preprocess("Hello <who>!").unwrap(), "Hello world!");
    // Inserting tags are not touched by the pre-processor.
    assert_eq!(engine.preprocess("<red>x").unwrap(), "<red>x");
}

#[test]
fn self_referential_placeholder_hits_the_depth_limit() {
    let engine = MiniTag::builder()
        .resolver(placeholder::parsed("boom", "a<boom>b"))
        .build();
    let err = engine.parse("<boom>").unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::DepthLimitExceeded { .. }
    ));
}

#[test]
fn exact_self_replacement_is_an_internal_fault() {
    // `<echo>` expands to itself, so expansion settles immediately and the
    // pre-process tag survives into the render walk. That phase reports it
    // loudly instead of swallowing it.
    let engine = MiniTag::builder()
        .resolver(placeholder::parsed("echo", "<echo>"))
        .build();
    let err = engine.parse("<echo>").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Internal(_)));
}

// ============================================================================
// STRICT MODE
// ============================================================================

#[test]
fn strict_mode_rejects_unknown_tags_with_a_caret() {
    let engine = MiniTag::builder().strict(true).build();
    let err = engine.parse("<nope>x").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnknownTag {
            name: "nope".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "unknown tag '<nope>'\n  <nope>x\n  ^~~~~^"
    );
}

#[test]
fn strict_mode_rejects_unclosed_tags() {
    let engine = MiniTag::builder().strict(true).build();
    let err = engine.parse("<red>hi").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnclosedTags {
            names: "red".into()
        }
    );
    assert_eq!(err.spans(), &[mintag::Span::new(0, 5)]);
}

#[test]
fn strict_mode_rejects_wrongly_ordered_close_tags() {
    let engine = MiniTag::builder().strict(true).build();
    let err = engine.parse("<red><bold>hi</red></bold>").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::MismatchedCloseTag {
            open: "bold".into(),
            close: "red".into()
        }
    );
}

#[test]
fn strict_mode_reports_bad_tag_arguments() {
    let engine = MiniTag::builder().strict(true).build();
    let err = engine.parse("<color:notacolor>x</color>").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument(_)));
    assert!(err.source_text().is_some());
}

#[test]
fn lenient_mode_degrades_bad_tag_arguments_to_text() {
    let component = mintag::parse("<color:notacolor>x").unwrap();
    assert_eq!(component.plain_text(), "<color:notacolor>x");
}

#[test]
fn lenient_mode_degrades_unexpected_arguments_to_text() {
    let component = mintag::parse("<red:bogus>x").unwrap();
    assert_eq!(component.plain_text(), "<red:bogus>x");
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[test]
fn one_engine_serves_concurrent_parses() {
    let engine = MiniTag::builder()
        .resolver(placeholder::parsed("who", "<red>world</red>"))
        .build();
    let expected = engine.parse("hello <who>").unwrap();

    std::thread::scope(|scope| {
        let mut handles = Vec::new();
        for _ in 0..8 {
            let engine = &engine;
            handles.push(scope.spawn(move || engine.parse("hello <who>").unwrap()));
        }
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
