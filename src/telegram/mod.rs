//! All Telegram-specific functionality

pub mod links;
pub mod notifier;
pub mod source;

// Re-export main types for convenience
pub use links::build_message_link;
pub use notifier::TelegramNotifier;
pub use source::{MessageSource, SnapshotSource, session_snapshot_path};
