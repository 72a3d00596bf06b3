use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use tracing::{debug, info};

use crate::ai::Summarizer;
use crate::core::models::{ChannelInfo, DigestItem, SourceMessage};
use crate::errors::DigestError;
use crate::telegram::{MessageSource, build_message_link};
use crate::utils::text::normalize_text;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Collect and summarize the unread messages of every subscribed channel.
///
/// Channels keep the order the source lists them in; messages within a
/// channel come out oldest first. Messages are summarized one at a time.
pub async fn collect_unread(
    source: &dyn MessageSource,
    summarizer: &Summarizer,
    limit: usize,
    timezone: Option<Tz>,
) -> Result<Vec<DigestItem>, DigestError> {
    let mut result: Vec<DigestItem> = Vec::new();

    for channel in source.channels().await? {
        if !channel.is_channel || channel.unread_count == 0 {
            continue;
        }

        info!("{} unread={}", channel.title, channel.unread_count);
        let count = (channel.unread_count as usize).min(limit);
        let messages = unread_with_text(source.recent_messages(&channel, count).await?);
        debug!("{}: {} messages to summarize", channel.title, messages.len());

        for msg in messages {
            result.push(build_item(&channel, &msg, summarizer, timezone).await);
        }
    }

    Ok(result)
}

/// Keep unread messages that carry text, oldest first.
fn unread_with_text(mut newest_first: Vec<SourceMessage>) -> Vec<SourceMessage> {
    newest_first.retain(|msg| msg.unread && msg.body().is_some());
    newest_first.reverse();
    newest_first
}

async fn build_item(
    channel: &ChannelInfo,
    msg: &SourceMessage,
    summarizer: &Summarizer,
    timezone: Option<Tz>,
) -> DigestItem {
    let raw = msg.body().unwrap_or_default();
    let summary = summarizer.summarize(raw).await;

    DigestItem {
        channel_title: channel.title.clone(),
        channel_id: channel.id,
        message_id: msg.id,
        date: format_message_date(&msg.date, timezone),
        text: normalize_text(raw),
        summary,
        message_link: build_message_link(channel, msg.id),
    }
}

/// Render a message timestamp in `timezone`, or the system zone when unset.
#[must_use]
pub fn format_message_date(date: &DateTime<Utc>, timezone: Option<Tz>) -> String {
    match timezone {
        Some(tz) => date.with_timezone(&tz).format(DATE_FORMAT).to_string(),
        None => date.with_timezone(&Local).format(DATE_FORMAT).to_string(),
    }
}
