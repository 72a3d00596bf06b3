//! Upstream message source.
//!
//! The live MTProto session lives outside this crate; it exports the dialogs
//! with unread messages as `<session>.json`, which [`SnapshotSource`] serves.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::core::models::{ChannelInfo, SourceMessage};
use crate::errors::DigestError;

#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Dialogs in the order the platform lists them.
    async fn channels(&self) -> Result<Vec<ChannelInfo>, DigestError>;

    /// Up to `limit` most recent messages of `channel`, newest first.
    async fn recent_messages(
        &self,
        channel: &ChannelInfo,
        limit: usize,
    ) -> Result<Vec<SourceMessage>, DigestError>;
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    channels: Vec<SnapshotChannel>,
}

#[derive(Debug, Deserialize)]
struct SnapshotChannel {
    #[serde(flatten)]
    info: ChannelInfo,
    #[serde(default)]
    messages: Vec<SourceMessage>,
}

/// In-memory source backed by a snapshot of the account's dialogs.
#[derive(Debug, Default)]
pub struct SnapshotSource {
    channels: Vec<(ChannelInfo, Vec<SourceMessage>)>,
}

impl SnapshotSource {
    #[must_use]
    pub fn new(channels: Vec<(ChannelInfo, Vec<SourceMessage>)>) -> Self {
        Self { channels }
    }

    pub fn from_json(raw: &str) -> Result<Self, DigestError> {
        let snapshot: Snapshot = serde_json::from_str(raw)
            .map_err(|e| DigestError::Source(format!("invalid snapshot: {}", e)))?;
        Ok(Self::new(
            snapshot
                .channels
                .into_iter()
                .map(|c| (c.info, c.messages))
                .collect(),
        ))
    }

    /// Open the export of the user session `session`.
    ///
    /// The session's application credentials are checked before anything is
    /// read, so a missing `TG_API_ID`/`TG_API_HASH` is reported as a
    /// configuration error.
    pub fn for_session(config: &AppConfig, session: &str) -> Result<Self, DigestError> {
        let (api_id, _) = config.require_platform()?;
        let path = session_snapshot_path(session);
        info!("Reading session {} (api_id {})", session, api_id);
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> Result<Self, DigestError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DigestError::Source(format!("cannot read snapshot {}: {}", path.display(), e))
        })?;
        let source = Self::from_json(&raw)?;
        debug!(
            "Loaded snapshot {} with {} dialogs",
            path.display(),
            source.channels.len()
        );
        Ok(source)
    }
}

/// `<session>.json`, next to the session itself.
#[must_use]
pub fn session_snapshot_path(session: &str) -> PathBuf {
    PathBuf::from(format!("{}.json", session))
}

#[async_trait]
impl MessageSource for SnapshotSource {
    async fn channels(&self) -> Result<Vec<ChannelInfo>, DigestError> {
        Ok(self.channels.iter().map(|(info, _)| info.clone()).collect())
    }

    async fn recent_messages(
        &self,
        channel: &ChannelInfo,
        limit: usize,
    ) -> Result<Vec<SourceMessage>, DigestError> {
        let messages = self
            .channels
            .iter()
            .find(|(info, _)| info.id == channel.id)
            .map(|(_, messages)| messages.as_slice())
            .ok_or_else(|| DigestError::Source(format!("unknown channel {}", channel.id)))?;

        let mut newest_first = messages.to_vec();
        newest_first.sort_by(|a, b| b.id.cmp(&a.id));
        newest_first.truncate(limit);
        Ok(newest_first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "channels": [
            {
                "id": 1001234,
                "title": "Alpha",
                "username": "alpha_news",
                "unread_count": 2,
                "messages": [
                    {"id": 1, "text": "old", "date": "2026-01-01T08:00:00Z", "unread": false},
                    {"id": 3, "text": "newest", "date": "2026-01-01T10:00:00Z"},
                    {"id": 2, "text": "middle", "date": "2026-01-01T09:00:00Z"}
                ]
            },
            {"id": 42, "title": "Friend", "is_channel": false, "unread_count": 1}
        ]
    }"#;

    #[tokio::test]
    async fn parses_snapshot_with_defaults() {
        let source = SnapshotSource::from_json(SNAPSHOT).unwrap();
        let channels = source.channels().await.unwrap();
        assert_eq!(channels.len(), 2);
        assert!(channels[0].is_channel);
        assert_eq!(channels[0].username.as_deref(), Some("alpha_news"));
        assert!(!channels[1].is_channel);
        assert!(channels[1].username.is_none());
    }

    #[tokio::test]
    async fn recent_messages_are_newest_first_and_capped() {
        let source = SnapshotSource::from_json(SNAPSHOT).unwrap();
        let channels = source.channels().await.unwrap();
        let messages = source.recent_messages(&channels[0], 2).await.unwrap();
        let ids: Vec<i64> = messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert!(messages[0].unread);
    }

    #[test]
    fn invalid_json_is_a_source_error() {
        assert!(matches!(
            SnapshotSource::from_json("{\"channels\": 3}"),
            Err(DigestError::Source(_))
        ));
    }

    #[test]
    fn session_without_credentials_is_a_configuration_error() {
        let err = SnapshotSource::for_session(&AppConfig::default(), "/nonexistent/session")
            .unwrap_err();
        assert!(matches!(err, DigestError::Configuration(_)), "got: {err:?}");
    }

    #[test]
    fn session_with_credentials_reads_its_export() {
        let dir = tempfile::tempdir().unwrap();
        let session = dir.path().join("digest").display().to_string();
        std::fs::write(session_snapshot_path(&session), SNAPSHOT).unwrap();

        let config = AppConfig {
            api_id: Some("12345".to_string()),
            api_hash: Some("0123abcd".to_string()),
            ..AppConfig::default()
        };
        let source = SnapshotSource::for_session(&config, &session).unwrap();
        assert_eq!(source.channels.len(), 2);

        let missing = dir.path().join("other").display().to_string();
        assert!(matches!(
            SnapshotSource::for_session(&config, &missing),
            Err(DigestError::Source(_))
        ));
    }

    #[test]
    fn missing_file_is_a_source_error() {
        assert!(matches!(
            SnapshotSource::from_path(Path::new("/nonexistent/snapshot.json")),
            Err(DigestError::Source(_))
        ));
    }
}
