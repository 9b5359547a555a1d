//! Callback payload formats
//!
//! Buttons carry an opaque string back to the bot when pressed. Three
//! shapes are understood:
//! - `check_membership` - re-run the membership gate
//! - `show_<series>` - list the episodes of a series
//! - `<series>|<episode>` - relay one episode

/// Separator between series name and episode label in a selection token
pub const DELIMITER: char = '|';

/// Payload of the "Check Membership" button
pub const CHECK_MEMBERSHIP_TOKEN: &str = "check_membership";

/// Prefix of the per-series buttons
pub const SERIES_PREFIX: &str = "show_";

/// Telegram rejects callback data longer than this many bytes
pub const MAX_TOKEN_LEN: usize = 64;

/// Build the payload of the button that opens `series`
pub fn series_token(series: &str) -> String {
    format!("{}{}", SERIES_PREFIX, series)
}

/// Extract the series name from a `show_<series>` payload
pub fn parse_series_token(raw: &str) -> Option<&str> {
    raw.strip_prefix(SERIES_PREFIX).filter(|name| !name.is_empty())
}

/// A `(series, episode)` pair carried through a button payload
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionToken {
    series: String,
    episode: String,
}

impl SelectionToken {
    pub fn new(series: impl Into<String>, episode: impl Into<String>) -> Self {
        Self {
            series: series.into(),
            episode: episode.into(),
        }
    }

    pub fn series(&self) -> &str {
        &self.series
    }

    pub fn episode(&self) -> &str {
        &self.episode
    }

    /// Encode as `<series>|<episode>`
    pub fn encode(&self) -> String {
        format!("{}{}{}", self.series, DELIMITER, self.episode)
    }

    /// Parse a payload made of exactly two non-empty segments
    pub fn parse(raw: &str) -> Option<Self> {
        let (series, episode) = raw.split_once(DELIMITER)?;
        if series.is_empty() || episode.is_empty() || episode.contains(DELIMITER) {
            return None;
        }
        Some(Self::new(series, episode))
    }
}
