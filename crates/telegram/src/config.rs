//! Process configuration read from the environment

use crate::error::ConfigError;
use std::fmt;
use teloxide::types::{ChatId, Recipient};
use url::Url;

pub const API_TOKEN: &str = "API_TOKEN";
pub const MANDATORY_CHANNEL_ID: &str = "MANDATORY_CHANNEL_ID";
pub const MANDATORY_CHANNEL_URL: &str = "MANDATORY_CHANNEL_URL";
pub const OPTIONAL_CHANNEL_ID: &str = "OPTIONAL_CHANNEL_ID";
pub const OPTIONAL_CHANNEL_URL: &str = "OPTIONAL_CHANNEL_URL";
pub const FILE_CHANNEL_ID: &str = "FILE_CHANNEL_ID";
pub const SUPPORT_CONTACT: &str = "SUPPORT_CONTACT";

/// Invite links used when neither an explicit URL nor an `@username` is set
pub const DEFAULT_MANDATORY_LINK: &str = "https://t.me/+QuF5rK2K6UE3Y2E1";
pub const DEFAULT_OPTIONAL_LINK: &str = "https://t.me/squidgameculpatuya";

/// Contact shown when a requested file is missing
pub const DEFAULT_SUPPORT_CONTACT: &str = "@mayank_ka_b_for_bot";

/// Immutable bot configuration, built once at startup
#[derive(Clone)]
pub struct Config {
    /// Bot API token
    pub token: String,
    /// Channel users must be a member of
    pub mandatory_channel: Recipient,
    pub mandatory_link: Url,
    /// Channel advertised next to the mandatory one, never checked
    pub optional_channel: Option<Recipient>,
    pub optional_link: Url,
    /// Storage channel of the uploaded files. Not used by any handler.
    pub file_channel: Option<Recipient>,
    pub support_contact: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("mandatory_channel", &self.mandatory_channel)
            .field("mandatory_link", &self.mandatory_link.as_str())
            .field("optional_channel", &self.optional_channel)
            .field("optional_link", &self.optional_link.as_str())
            .field("file_channel", &self.file_channel)
            .field("support_contact", &self.support_contact)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let token = get(API_TOKEN).ok_or(ConfigError::Missing(API_TOKEN))?;

        let mandatory_raw =
            get(MANDATORY_CHANNEL_ID).ok_or(ConfigError::Missing(MANDATORY_CHANNEL_ID))?;
        let mandatory_channel = parse_channel(MANDATORY_CHANNEL_ID, &mandatory_raw)?;
        let mandatory_link = join_link(
            MANDATORY_CHANNEL_URL,
            get(MANDATORY_CHANNEL_URL),
            Some(&mandatory_channel),
            DEFAULT_MANDATORY_LINK,
        )?;

        let optional_channel = get(OPTIONAL_CHANNEL_ID)
            .map(|raw| parse_channel(OPTIONAL_CHANNEL_ID, &raw))
            .transpose()?;
        let optional_link = join_link(
            OPTIONAL_CHANNEL_URL,
            get(OPTIONAL_CHANNEL_URL),
            optional_channel.as_ref(),
            DEFAULT_OPTIONAL_LINK,
        )?;

        let file_channel = get(FILE_CHANNEL_ID)
            .map(|raw| parse_channel(FILE_CHANNEL_ID, &raw))
            .transpose()?;

        let support_contact =
            get(SUPPORT_CONTACT).unwrap_or_else(|| DEFAULT_SUPPORT_CONTACT.to_string());

        Ok(Self {
            token,
            mandatory_channel,
            mandatory_link,
            optional_channel,
            optional_link,
            file_channel,
            support_contact,
        })
    }
}

/// Parse `@username` or a numeric chat id such as `-1001234567890`
pub fn parse_channel(var: &'static str, raw: &str) -> Result<Recipient, ConfigError> {
    if let Some(name) = raw.strip_prefix('@') {
        if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Ok(Recipient::ChannelUsername(raw.to_string()));
        }
    } else if let Ok(id) = raw.parse::<i64>() {
        return Ok(Recipient::Id(ChatId(id)));
    }

    Err(ConfigError::InvalidChannel {
        var,
        value: raw.to_string(),
    })
}

/// Explicit URL wins, then `https://t.me/<username>`, then `fallback`
fn join_link(
    var: &'static str,
    explicit: Option<String>,
    channel: Option<&Recipient>,
    fallback: &str,
) -> Result<Url, ConfigError> {
    let raw = match (explicit, channel) {
        (Some(url), _) => url,
        (None, Some(Recipient::ChannelUsername(name))) => {
            format!("https://t.me/{}", name.trim_start_matches('@'))
        }
        _ => fallback.to_string(),
    };

    Url::parse(&raw).map_err(|_| ConfigError::InvalidUrl { var, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_minimal_config() {
        let config = load(&[
            (API_TOKEN, "123:abc"),
            (MANDATORY_CHANNEL_ID, "@mandatory"),
            (OPTIONAL_CHANNEL_ID, "@extra_channel"),
        ])
        .unwrap();

        assert_eq!(config.token, "123:abc");
        assert_eq!(
            config.mandatory_channel,
            Recipient::ChannelUsername("@mandatory".to_string())
        );
        assert_eq!(config.mandatory_link.as_str(), "https://t.me/mandatory");
        assert_eq!(config.optional_link.as_str(), "https://t.me/extra_channel");
        assert!(config.file_channel.is_none());
        assert_eq!(config.support_contact, DEFAULT_SUPPORT_CONTACT);
    }

    #[test]
    fn test_numeric_channels_use_default_links() {
        let config = load(&[
            (API_TOKEN, "123:abc"),
            (MANDATORY_CHANNEL_ID, "-1001234567890"),
            (OPTIONAL_CHANNEL_ID, "-1001111111111"),
            (FILE_CHANNEL_ID, "-1009876543210"),
        ])
        .unwrap();
        assert_eq!(config.mandatory_channel, Recipient::Id(ChatId(-1001234567890)));
        assert_eq!(config.mandatory_link.as_str(), DEFAULT_MANDATORY_LINK);
        assert_eq!(config.optional_channel, Some(Recipient::Id(ChatId(-1001111111111))));
        assert_eq!(config.optional_link.as_str(), DEFAULT_OPTIONAL_LINK);
        assert_eq!(config.file_channel, Some(Recipient::Id(ChatId(-1009876543210))));
    }

    #[test]
    fn test_explicit_links_win() {
        let config = load(&[
            (API_TOKEN, "123:abc"),
            (MANDATORY_CHANNEL_ID, "@mandatory"),
            (MANDATORY_CHANNEL_URL, "https://t.me/+invite"),
            (OPTIONAL_CHANNEL_URL, "https://t.me/other"),
            (SUPPORT_CONTACT, "@someone"),
        ])
        .unwrap();
        assert_eq!(config.mandatory_link.as_str(), "https://t.me/+invite");
        assert!(config.optional_channel.is_none());
        assert_eq!(config.optional_link.as_str(), "https://t.me/other");
        assert_eq!(config.support_contact, "@someone");
    }

    #[test]
    fn test_missing_required_values() {
        assert_eq!(
            load(&[(MANDATORY_CHANNEL_ID, "@mandatory")]).unwrap_err(),
            ConfigError::Missing(API_TOKEN)
        );
        assert_eq!(
            load(&[(API_TOKEN, "123:abc"), (MANDATORY_CHANNEL_ID, "   ")]).unwrap_err(),
            ConfigError::Missing(MANDATORY_CHANNEL_ID)
        );
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[(API_TOKEN, "123:abc"), (MANDATORY_CHANNEL_ID, "not a channel")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidChannel { .. }));

        let err = load(&[
            (API_TOKEN, "123:abc"),
            (MANDATORY_CHANNEL_ID, "@mandatory"),
            (OPTIONAL_CHANNEL_URL, "not a url"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = load(&[
            (API_TOKEN, "123:secret"),
            (MANDATORY_CHANNEL_ID, "@mandatory"),
            (OPTIONAL_CHANNEL_ID, "@extra"),
        ])
        .unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }
}
