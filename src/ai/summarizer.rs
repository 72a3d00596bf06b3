use tracing::warn;

use super::client::{LlmClient, RemoteSummarizer};
use crate::core::config::AppConfig;
use crate::errors::DigestError;
use crate::utils::text::{normalize_text, summarize_locally};

/// Returned for messages whose text is empty after normalization.
pub const EMPTY_TEXT_SUMMARY: &str = "(no text)";

/// Per-message summarizer: remote service first, local heuristic as fallback.
///
/// Each tier is tried at most once per call; a remote failure is logged and
/// never reaches the caller.
pub struct Summarizer {
    remote: Option<Box<dyn RemoteSummarizer>>,
    max_sentences: usize,
}

impl Summarizer {
    #[must_use]
    pub fn new(remote: Option<Box<dyn RemoteSummarizer>>, max_sentences: usize) -> Self {
        Self {
            remote,
            max_sentences,
        }
    }

    /// Summarizer with no remote backend.
    #[must_use]
    pub fn local_only(max_sentences: usize) -> Self {
        Self::new(None, max_sentences)
    }

    /// Wire up the remote client when an API key is configured.
    pub fn from_config(config: &AppConfig) -> Result<Self, DigestError> {
        let remote = LlmClient::from_config(config)?
            .map(|client| Box::new(client) as Box<dyn RemoteSummarizer>);
        Ok(Self::new(remote, config.max_sentences_local))
    }

    #[must_use]
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn summarize(&self, raw_text: &str) -> String {
        let cleaned = normalize_text(raw_text);
        if cleaned.is_empty() {
            return EMPTY_TEXT_SUMMARY.to_string();
        }

        if let Some(remote) = &self.remote {
            match remote.summarize_remote(&cleaned).await {
                Ok(summary) => return summary,
                Err(e) => warn!("Remote summary failed ({}), fallback summarizer used", e),
            }
        }

        summarize_locally(&cleaned, self.max_sentences)
    }
}
