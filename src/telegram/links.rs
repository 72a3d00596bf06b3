use crate::core::models::ChannelInfo;

/// Deep link to a message.
///
/// Public channels use `t.me/<username>/<id>`. Private channels and
/// supergroups use `t.me/c/<internal id>/<id>`, where the internal id is the
/// channel id without the `-100` marked-peer prefix.
#[must_use]
pub fn build_message_link(channel: &ChannelInfo, message_id: i64) -> String {
    if let Some(username) = channel.username.as_deref().filter(|u| !u.is_empty()) {
        return format!("https://t.me/{}/{}", username, message_id);
    }

    let id = channel.id.unsigned_abs().to_string();
    let internal_id = id.strip_prefix("100").unwrap_or(&id);
    format!("https://t.me/c/{}/{}", internal_id, message_id)
}
