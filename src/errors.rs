use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Remote summary failed: {0}")]
    RemoteSummary(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to deliver notification: {0}")]
    NotificationDelivery(String),

    #[error("Failed to read messages: {0}")]
    Source(String),

    #[error("Failed to write output: {0}")]
    Output(String),
}

impl From<std::io::Error> for DigestError {
    fn from(error: std::io::Error) -> Self {
        DigestError::Output(error.to_string())
    }
}

impl From<serde_json::Error> for DigestError {
    fn from(error: serde_json::Error) -> Self {
        DigestError::Output(format!("JSON serialization error: {}", error))
    }
}
