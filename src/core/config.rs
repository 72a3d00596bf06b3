use std::env;

use chrono_tz::Tz;

use crate::errors::DigestError;

pub const DEFAULT_REMOTE_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_REMOTE_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_SENTENCES: usize = 3;
pub const DEFAULT_NOTIFICATION_MAX_ITEMS: usize = crate::digest::notification::DEFAULT_MAX_ITEMS;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub remote_endpoint: String,
    pub remote_model: String,
    pub remote_api_key: Option<String>,
    pub max_sentences_local: usize,
    pub notification_max_items: usize,
    pub bot_token: Option<String>,
    pub target_chat_id: Option<String>,
    /// Application credentials of the user session (`TG_API_ID` / `TG_API_HASH`).
    pub api_id: Option<String>,
    pub api_hash: Option<String>,
    /// Zone used to render message dates. `None` means the system local zone.
    pub timezone: Option<Tz>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote_endpoint: DEFAULT_REMOTE_ENDPOINT.to_string(),
            remote_model: DEFAULT_REMOTE_MODEL.to_string(),
            remote_api_key: None,
            max_sentences_local: DEFAULT_MAX_SENTENCES,
            notification_max_items: DEFAULT_NOTIFICATION_MAX_ITEMS,
            bot_token: None,
            target_chat_id: None,
            api_id: None,
            api_hash: None,
            timezone: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, DigestError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DigestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let max_sentences_local = match get("DIGEST_MAX_SENTENCES") {
            Some(raw) => parse_count("DIGEST_MAX_SENTENCES", &raw)?,
            None => DEFAULT_MAX_SENTENCES,
        };
        let notification_max_items = match get("DIGEST_NOTIFY_MAX_ITEMS") {
            Some(raw) => parse_count("DIGEST_NOTIFY_MAX_ITEMS", &raw)?,
            None => DEFAULT_NOTIFICATION_MAX_ITEMS,
        };
        let timezone = get("DIGEST_TIMEZONE")
            .map(|raw| {
                raw.trim().parse::<Tz>().map_err(|e| {
                    DigestError::Configuration(format!("DIGEST_TIMEZONE: {}", e))
                })
            })
            .transpose()?;

        Ok(Self {
            remote_endpoint: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_REMOTE_ENDPOINT.to_string()),
            remote_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_REMOTE_MODEL.to_string()),
            remote_api_key: get("OPENAI_API_KEY"),
            max_sentences_local,
            notification_max_items,
            bot_token: get("TG_BOT_TOKEN"),
            target_chat_id: get("TG_TARGET_CHAT_ID"),
            api_id: get("TG_API_ID"),
            api_hash: get("TG_API_HASH"),
            timezone,
        })
    }

    /// Credentials of the user session, as `(api_id, api_hash)`.
    pub fn require_platform(&self) -> Result<(i32, &str), DigestError> {
        let (Some(raw_id), Some(api_hash)) = (self.api_id.as_deref(), self.api_hash.as_deref())
        else {
            return Err(DigestError::Configuration(
                "TG_API_ID and TG_API_HASH are required".to_string(),
            ));
        };
        let api_id = raw_id
            .trim()
            .parse::<i32>()
            .map_err(|e| DigestError::Configuration(format!("TG_API_ID: {}", e)))?;
        Ok((api_id, api_hash))
    }

    /// Credentials needed to push the notification, as `(bot_token, chat_id)`.
    pub fn require_notification(&self) -> Result<(&str, &str), DigestError> {
        match (self.bot_token.as_deref(), self.target_chat_id.as_deref()) {
            (Some(token), Some(chat_id)) => Ok((token, chat_id)),
            _ => Err(DigestError::Configuration(
                "TG_BOT_TOKEN and TG_TARGET_CHAT_ID are required for --post".to_string(),
            )),
        }
    }
}

fn parse_count(key: &str, raw: &str) -> Result<usize, DigestError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(DigestError::Configuration(format!(
            "{}: must be greater than zero",
            key
        ))),
        Ok(n) => Ok(n),
        Err(e) => Err(DigestError::Configuration(format!("{}: {}", key, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.remote_endpoint, DEFAULT_REMOTE_ENDPOINT);
        assert_eq!(config.remote_model, DEFAULT_REMOTE_MODEL);
        assert!(config.remote_api_key.is_none());
        assert_eq!(config.max_sentences_local, 3);
        assert_eq!(config.notification_max_items, 20);
        assert!(config.timezone.is_none());
    }

    #[test]
    fn empty_values_count_as_missing() {
        let config =
            AppConfig::from_lookup(lookup(&[("OPENAI_API_KEY", ""), ("TG_BOT_TOKEN", "  ")]))
                .unwrap();
        assert!(config.remote_api_key.is_none());
        assert!(config.bot_token.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("OPENAI_BASE_URL", "http://localhost:8080/v1"),
            ("OPENAI_MODEL", "local-model"),
            ("OPENAI_API_KEY", "sk-test"),
            ("DIGEST_NOTIFY_MAX_ITEMS", "5"),
            ("DIGEST_TIMEZONE", "Asia/Seoul"),
        ]))
        .unwrap();
        assert_eq!(config.remote_endpoint, "http://localhost:8080/v1");
        assert_eq!(config.remote_model, "local-model");
        assert_eq!(config.remote_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.notification_max_items, 5);
        assert_eq!(config.timezone, Some(chrono_tz::Asia::Seoul));
    }

    #[test]
    fn rejects_bad_numbers_and_zones() {
        let err = AppConfig::from_lookup(lookup(&[("DIGEST_MAX_SENTENCES", "three")]))
            .unwrap_err();
        assert!(matches!(err, DigestError::Configuration(_)));

        let err = AppConfig::from_lookup(lookup(&[("DIGEST_NOTIFY_MAX_ITEMS", "0")])).unwrap_err();
        assert!(matches!(err, DigestError::Configuration(_)));

        let err = AppConfig::from_lookup(lookup(&[("DIGEST_TIMEZONE", "Mars/Base")])).unwrap_err();
        assert!(matches!(err, DigestError::Configuration(_)));
    }

    #[test]
    fn platform_credentials_are_required_together() {
        for pairs in [
            &[][..],
            &[("TG_API_ID", "12345")][..],
            &[("TG_API_HASH", "0123abcd")][..],
            &[("TG_API_ID", ""), ("TG_API_HASH", "0123abcd")][..],
        ] {
            let config = AppConfig::from_lookup(lookup(pairs)).unwrap();
            assert!(matches!(
                config.require_platform(),
                Err(DigestError::Configuration(_))
            ));
        }

        let config =
            AppConfig::from_lookup(lookup(&[("TG_API_ID", "12345"), ("TG_API_HASH", "0123abcd")]))
                .unwrap();
        assert_eq!(config.require_platform().unwrap(), (12345, "0123abcd"));
    }

    #[test]
    fn non_numeric_api_id_is_a_configuration_error() {
        let config =
            AppConfig::from_lookup(lookup(&[("TG_API_ID", "abc"), ("TG_API_HASH", "0123abcd")]))
                .unwrap();
        assert!(matches!(
            config.require_platform(),
            Err(DigestError::Configuration(_))
        ));
    }

    #[test]
    fn notification_requires_both_credentials() {
        let mut config = AppConfig {
            bot_token: Some("123:abc".to_string()),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.require_notification(),
            Err(DigestError::Configuration(_))
        ));

        config.target_chat_id = Some("-10042".to_string());
        assert_eq!(config.require_notification().unwrap(), ("123:abc", "-10042"));
    }
}
