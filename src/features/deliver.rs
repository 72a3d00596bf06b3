use crate::core::models::DigestItem;
use crate::digest::build_digest_message;
use crate::errors::DigestError;
use crate::telegram::TelegramNotifier;

/// Render the capped notification and push it through the bot.
pub async fn deliver_digest(
    notifier: &TelegramNotifier,
    items: &[DigestItem],
    max_items: usize,
) -> Result<(), DigestError> {
    let message = build_digest_message(items, max_items);
    notifier.send_message(&message).await
}
