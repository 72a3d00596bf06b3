//! Full HTML report: one card per digest item.

use chrono::{DateTime, Local, TimeZone};

use crate::core::models::DigestItem;
use crate::utils::html::escape_html;

pub const EMPTY_REPORT_PLACEHOLDER: &str = "<p>No unread channel messages.</p>";

const REPORT_STYLE: &str = "\
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 2rem; background:#f5f7fb; }
    .grid { display:grid; gap:1rem; }
    .card { background:#fff; border-radius:12px; padding:1rem 1.2rem; box-shadow:0 2px 6px rgba(0,0,0,0.08); }
    h1 { margin-top:0; }
    pre { white-space: pre-wrap; word-wrap: break-word; background:#fafafa; padding:0.7rem; border-radius:8px; }
    a { color:#0b6bcb; text-decoration:none; }";

/// Render the report stamped with the current local time.
#[must_use]
pub fn render_report(items: &[DigestItem]) -> String {
    render_report_at(items, &Local::now())
}

#[must_use]
pub fn render_report_at<Tz>(items: &[DigestItem], generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let cards: Vec<String> = items.iter().map(render_card).collect();
    let body = if cards.is_empty() {
        EMPTY_REPORT_PLACEHOLDER.to_string()
    } else {
        cards.join("\n")
    };
    let generated = generated_at.format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Telegram Unread Digest</title>
  <style>
{REPORT_STYLE}
  </style>
</head>
<body>
  <h1>Unread Telegram channel digest</h1>
  <p>Generated at: {generated}</p>
  <section class="grid">{body}</section>
</body>
</html>"#
    )
}

fn render_card(item: &DigestItem) -> String {
    format!(
        r#"<article class="card">
  <header>
    <h3>{title}</h3>
    <p>{date}</p>
  </header>
  <p><strong>Summary</strong><br>{summary}</p>
  <details>
    <summary>Show original</summary>
    <pre>{text}</pre>
  </details>
  <a href="{link}" target="_blank">Open original</a>
</article>"#,
        title = escape_html(&item.channel_title),
        date = escape_html(&item.date),
        summary = escape_html(&item.summary).replace('\n', "<br>"),
        text = escape_html(&item.text),
        link = escape_html(&item.message_link),
    )
}
