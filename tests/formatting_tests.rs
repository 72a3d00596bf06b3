mod common;

use common::digest_item;
use tg_digest::core::models::DigestItem;
use tg_digest::digest::{
    EMPTY_REPORT_PLACEHOLDER, NO_UNREAD_MESSAGE, build_digest_message, render_report,
};

/// Tests for the report and notification formatting
/// These verify the output shape the Telegram bot and the HTML export rely on.

fn items_across_two_titles(count: i64) -> Vec<DigestItem> {
    (0..count)
        .map(|i| {
            let title = if i % 2 == 0 { "Markets" } else { "Weather" };
            digest_item(title, i % 2, i, &format!("• summary {i}"))
        })
        .collect()
}

#[test]
fn test_notification_overflow_note() {
    let items = items_across_two_titles(25);
    let message = build_digest_message(&items, 20);

    assert!(
        message.ends_with("\n…and 5 more. See the HTML/JSON report for the rest."),
        "Actual: {message}"
    );
    assert_eq!(message.matches("🔗").count(), 20);
    // The 21st item and later are not rendered.
    assert!(!message.contains("• summary 20"));
    assert!(message.contains("• summary 19"));
}

#[test]
fn test_notification_escapes_summary_and_link() {
    let mut item = digest_item("Sec & Ops", 1, 1, "• <script>alert(1)</script>");
    item.message_link = "https://t.me/c/1/1?a=1&b=\"2\"".to_string();

    let message = build_digest_message(&[item], 20);

    assert!(message.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!message.contains("<script>"));
    assert!(message.contains("<b>Sec &amp; Ops</b>"));
    assert!(message.contains("href=\"https://t.me/c/1/1?a=1&amp;b=&quot;2&quot;\""));
}

#[test]
fn test_notification_empty_sentinel() {
    assert_eq!(build_digest_message(&[], 20), NO_UNREAD_MESSAGE);
}

#[test]
fn test_notification_keeps_incoming_order_before_capping() {
    // The cap applies to incoming order; grouping happens afterwards.
    let items = vec![
        digest_item("B", 2, 1, "• b1"),
        digest_item("A", 1, 1, "• a1"),
        digest_item("B", 2, 2, "• b2"),
        digest_item("A", 1, 2, "• a2"),
    ];
    let message = build_digest_message(&items, 3);

    assert!(message.find("<b>B</b>").unwrap() < message.find("<b>A</b>").unwrap());
    assert!(message.contains("2) • b2"));
    assert!(!message.contains("• a2"));
    assert!(message.contains("…and 1 more."));
}

#[test]
fn test_report_renders_every_item() {
    let items = items_across_two_titles(3);
    let html = render_report(&items);

    assert_eq!(html.matches("<article class=\"card\">").count(), 3);
    assert!(html.contains("<details>"));
    assert!(!html.contains(EMPTY_REPORT_PLACEHOLDER));
}

#[test]
fn test_report_placeholder_for_empty_digest() {
    let html = render_report(&[]);
    assert!(html.contains(EMPTY_REPORT_PLACEHOLDER));
    assert!(!html.contains("<article"));
}
