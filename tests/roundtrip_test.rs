//! Round-trip and graceful-degradation tests.

use mdhtml::{to_html, to_html_with_options, to_markdown, ConvertOptions, MarkdownConverter};

#[test]
fn header_round_trip_all_levels() {
    for level in 1..=6 {
        let markdown = format!("{} X", "#".repeat(level));
        let html = to_html(&markdown).unwrap();
        assert_eq!(to_markdown(&html).unwrap(), markdown);
    }
}

#[test]
fn bold_italic_idempotent_unwrap() {
    assert_eq!(to_markdown("<strong>X</strong>").unwrap(), "**X**");
    assert_eq!(to_markdown("<em>X</em>").unwrap(), "*X*");
}

#[test]
fn nesting_round_trip() {
    let markdown = "This is **bold with *italic* inside**";
    let html = to_html(markdown).unwrap();
    assert_eq!(
        html,
        "This is <strong>bold with <em>italic</em> inside</strong>"
    );
    assert_eq!(to_markdown(&html).unwrap(), markdown);
}

#[test]
fn nesting_round_trip_with_paragraphs() {
    let options = ConvertOptions::new().with_paragraphs(true);
    let html = to_html_with_options("This is **bold with *italic* inside**", &options).unwrap();
    assert_eq!(
        html,
        "<p>This is <strong>bold with <em>italic</em> inside</strong></p>"
    );
}

#[test]
fn paragraph_wrapping_toggle() {
    let plain = to_html("A **b**").unwrap();
    assert!(!plain.contains("<p>"));

    let options = ConvertOptions::new().with_paragraphs(true);
    let wrapped = to_html_with_options("A **b**", &options).unwrap();
    assert_eq!(wrapped.matches("<p>").count(), 1);
    assert!(wrapped.starts_with("<p>"));
    assert!(wrapped.ends_with("</p>"));
}

#[test]
fn line_break() {
    let options = ConvertOptions::new().with_paragraphs(true);
    let html = to_html_with_options("Line 1  \nLine 2", &options).unwrap();
    assert_eq!(html.trim(), "<p>Line 1<br>Line 2</p>");
}

#[test]
fn blank_line_paragraph_split() {
    let options = ConvertOptions::new().with_paragraphs(true);
    let html = to_html_with_options("Paragraph 1\n\nParagraph 2", &options).unwrap();
    assert_eq!(html.trim(), "<p>Paragraph 1</p><p>Paragraph 2</p>");
}

#[test]
fn flat_list_round_trip() {
    let markdown = "- Item 1\n- Item 2";
    let html = to_html(markdown).unwrap();
    assert_eq!(html, "<ul><li>Item 1</li><li>Item 2</li></ul>");
    assert_eq!(to_markdown(&html).unwrap(), markdown);
}

#[test]
fn ordered_list_round_trip() {
    let markdown = "1. First\n2. Second";
    let html = to_html(markdown).unwrap();
    assert_eq!(html, "<ol><li>First</li><li>Second</li></ol>");
    assert_eq!(to_markdown(&html).unwrap(), markdown);
}

#[test]
fn empty_input_produces_empty_output() {
    assert_eq!(to_html("").unwrap(), "");
    assert_eq!(to_markdown("").unwrap(), "");
}

#[test]
fn unmatched_delimiters_stay_literal() {
    assert_eq!(to_html("2 * 3 is 6").unwrap(), "2 * 3 is 6");
    assert_eq!(to_html("unclosed *italic").unwrap(), "unclosed *italic");
}

#[test]
fn empty_spans_resolve_to_empty_tags() {
    assert_eq!(to_html("****").unwrap(), "<strong></strong>");
}

#[test]
fn malformed_list_lines_are_dropped() {
    let html = to_html("- Item 1\nstray prose line\n- Item 2").unwrap();
    assert_eq!(html, "<ul><li>Item 1</li><li>Item 2</li></ul>");
}

#[test]
fn unknown_html_passes_through() {
    assert_eq!(
        to_markdown("<code>let x = 1;</code>").unwrap(),
        "<code>let x = 1;</code>"
    );
}

#[test]
fn converter_is_reusable_across_calls() {
    let converter = MarkdownConverter::new().unwrap();
    let options = ConvertOptions::new();
    let first = converter.to_html("# A", &options);
    let second = converter.to_html("# A", &options);
    assert_eq!(first, second);
    assert_eq!(first, "<h1>A</h1>");
}

#[test]
fn converter_is_shareable_across_threads() {
    let converter = std::sync::Arc::new(MarkdownConverter::new().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let converter = converter.clone();
            std::thread::spawn(move || {
                converter.to_html("- a\n  - b\n- c", &ConvertOptions::new())
            })
        })
        .collect();
    for handle in handles {
        let html = handle.join().unwrap();
        assert_eq!(html, "<ul><li>a<ul><li>b</li></ul></li><li>c</li></ul>");
    }
}
