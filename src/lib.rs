/// tg-digest - Summarizes unread Telegram channel messages into a report and a short digest.
///
/// A run reads the unread messages of every subscribed channel, summarizes each
/// message, writes an HTML report plus a JSON export, and can push a condensed
/// digest back to Telegram through a bot.
///
/// # Architecture
///
/// - `telegram::source` supplies dialogs and messages from an exported session snapshot
/// - `ai` summarizes each message with an OpenAI-compatible service, falling back
///   to a local sentence-picking heuristic
/// - `digest` renders the full report and the capped notification
/// - `features` wires collection, export and delivery together
///
/// # Example
///
/// ```no_run
/// use tg_digest::ai::Summarizer;
/// use tg_digest::core::config::AppConfig;
/// use tg_digest::features::{collect::collect_unread, export::write_outputs};
/// use tg_digest::telegram::SnapshotSource;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     tg_digest::setup_logging("info");
///
///     let config = AppConfig::from_env()?;
///     let summarizer = Summarizer::from_config(&config)?;
///     let source = SnapshotSource::from_path(std::path::Path::new("tg_digest.json"))?;
///
///     let items = collect_unread(&source, &summarizer, 50, config.timezone).await?;
///     let (html, json) = write_outputs(std::path::Path::new("output"), &items)?;
///     println!("{} / {}", html.display(), json.display());
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod digest;
pub mod errors;
pub mod features;
pub mod telegram;
pub mod utils;

pub use errors::DigestError;

/// Configure structured JSON logging at the given level.
///
/// `RUST_LOG`, when set, overrides the level. Unknown levels fall back to
/// `info`. Calling this more than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// tg_digest::setup_logging("debug");
/// ```
pub fn setup_logging(level: &str) {
    use tracing_subscriber::prelude::*;

    let overrides = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(log_filter(level, overrides.as_deref()))
        .with(fmt_layer)
        .try_init();
}

/// Filter for `level`, replaced by `overrides` directives when any of them parse.
#[must_use]
pub fn log_filter(level: &str, overrides: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::filter::LevelFilter;

    let level = level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(overrides.unwrap_or_default())
}
