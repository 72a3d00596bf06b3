use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One summarized channel message.
///
/// Created once per qualifying message per run and never mutated afterwards.
/// `channel_id` + `message_id` identify an item within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestItem {
    pub channel_title: String,
    pub channel_id: i64,
    pub message_id: i64,
    pub date: String,
    pub text: String,
    pub summary: String,
    pub message_link: String,
}

/// A dialog as reported by the messaging platform, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub username: Option<String>,
    /// Only broadcast channels (and supergroups) take part in the digest.
    #[serde(default = "default_true")]
    pub is_channel: bool,
    #[serde(default)]
    pub unread_count: u32,
}

/// A raw message as returned by the messaging platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMessage {
    pub id: i64,
    #[serde(default)]
    pub text: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub unread: bool,
}

impl SourceMessage {
    /// Message body, or `None` when the message carries no text at all.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

fn default_true() -> bool {
    true
}
