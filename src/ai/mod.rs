//! All summarization functionality

pub mod client;
pub mod prompt_builder;
pub mod summarizer;

// Re-export main types for convenience
pub use client::{LlmClient, RemoteSummarizer};
pub use summarizer::{EMPTY_TEXT_SUMMARY, Summarizer};
