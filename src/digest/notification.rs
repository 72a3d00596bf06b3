//! Condensed notification message for Telegram's `HTML` parse mode.

use std::collections::HashMap;

use crate::core::models::DigestItem;
use crate::utils::html::escape_html;

pub const DEFAULT_MAX_ITEMS: usize = 20;

pub const NO_UNREAD_MESSAGE: &str = "📭 No unread channel messages.";

const HEADER: &str = "🧾 <b>Unread channel digest</b>";

/// Build the notification for at most `max_items` items.
///
/// Items are grouped by channel title in order of first appearance; two
/// channels sharing a title end up in the same group.
#[must_use]
pub fn build_digest_message(items: &[DigestItem], max_items: usize) -> String {
    if items.is_empty() {
        return NO_UNREAD_MESSAGE.to_string();
    }

    let capped = &items[..items.len().min(max_items)];

    let mut lines = vec![HEADER.to_string()];
    for (channel, channel_items) in group_by_title(capped) {
        lines.push(format!("\n📌 <b>{}</b>", escape_html(channel)));
        for (idx, item) in channel_items.iter().enumerate() {
            lines.push(format!("{}) {}", idx + 1, escape_html(&item.summary)));
            lines.push(format!(
                "🔗 <a href=\"{}\">Original message</a>",
                escape_html(&item.message_link)
            ));
        }
    }

    let omitted = items.len() - capped.len();
    if omitted > 0 {
        lines.push(format!(
            "\n…and {} more. See the HTML/JSON report for the rest.",
            omitted
        ));
    }

    lines.join("\n")
}

/// Group items by `channel_title`, keeping first-seen group order and the
/// incoming order inside each group.
#[must_use]
pub fn group_by_title(items: &[DigestItem]) -> Vec<(&str, Vec<&DigestItem>)> {
    let mut groups: Vec<(&str, Vec<&DigestItem>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let title = item.channel_title.as_str();
        match index.get(title).copied() {
            Some(pos) => groups[pos].1.push(item),
            None => {
                index.insert(title, groups.len());
                groups.push((title, vec![item]));
            }
        }
    }

    groups
}
