use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tg_digest::ai::Summarizer;
use tg_digest::core::config::AppConfig;
use tg_digest::features::{collect::collect_unread, deliver::deliver_digest, export::write_outputs};
use tg_digest::telegram::{SnapshotSource, TelegramNotifier};

/// Collect unread Telegram channel messages, summarize them, export HTML/JSON and
/// optionally post a digest.
#[derive(Parser, Debug)]
#[command(name = "tg-digest", version, about)]
struct Args {
    /// Session name; its export is read from `<session>.json`
    #[arg(long, env = "TG_SESSION", default_value = "tg_digest")]
    session: String,

    /// Replay a saved export instead of the session (no TG_API_ID/TG_API_HASH needed)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Folder to save html/json files
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Max unread messages per channel
    #[arg(long, default_value_t = 50)]
    limit: usize,

    /// Post digest to Telegram via bot
    #[arg(long)]
    post: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    tg_digest::setup_logging(&args.log_level);

    let config = AppConfig::from_env()?;

    // Missing credentials must stop the run before anything is read or written.
    let notifier = if args.post {
        Some(TelegramNotifier::from_config(&config)?)
    } else {
        None
    };
    let source = match &args.source {
        Some(path) => SnapshotSource::from_path(path)?,
        None => SnapshotSource::for_session(&config, &args.session)?,
    };

    let summarizer = Summarizer::from_config(&config)?;
    if !summarizer.has_remote() {
        info!("OPENAI_API_KEY not set, using local summarizer only");
    }

    let items = collect_unread(&source, &summarizer, args.limit, config.timezone).await?;
    let (html_path, json_path) = write_outputs(&args.output_dir, &items)?;
    info!("Saved HTML: {}", html_path.display());
    info!("Saved JSON: {}", json_path.display());

    if let Some(notifier) = notifier {
        deliver_digest(&notifier, &items, config.notification_max_items)
            .await
            .context("digest files were written but the notification was not delivered")?;
    }

    Ok(())
}
