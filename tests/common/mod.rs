//! Shared helpers for integration tests.
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use tg_digest::core::models::{ChannelInfo, DigestItem, SourceMessage};

pub fn channel(id: i64, title: &str, username: Option<&str>, unread_count: u32) -> ChannelInfo {
    ChannelInfo {
        id,
        title: title.to_string(),
        username: username.map(str::to_string),
        is_channel: true,
        unread_count,
    }
}

/// Unread message posted `minute` minutes after midnight UTC on 2026-01-01.
pub fn message(id: i64, minute: u32, text: &str) -> SourceMessage {
    SourceMessage {
        id,
        text: Some(text.to_string()),
        date: Utc.with_ymd_and_hms(2026, 1, 1, 0, minute, 0).unwrap(),
        unread: true,
    }
}

pub fn digest_item(title: &str, channel_id: i64, message_id: i64, summary: &str) -> DigestItem {
    DigestItem {
        channel_title: title.to_string(),
        channel_id,
        message_id,
        date: "2026-01-01 09:00".to_string(),
        text: format!("Original text of message {message_id}"),
        summary: summary.to_string(),
        message_link: format!("https://t.me/c/{channel_id}/{message_id}"),
    }
}
