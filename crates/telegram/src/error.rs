/// Error type for outbound calls made by the bot
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// Telegram API error
    #[error("Telegram error: {0}")]
    TelegramError(#[from] teloxide::RequestError),
}

/// Result type alias for bot operations
pub type BotResult<T> = Result<T, BotError>;

/// Configuration problems found at startup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment or .env file")]
    Missing(&'static str),

    #[error("{var} is not a chat id or @username: `{value}`")]
    InvalidChannel { var: &'static str, value: String },

    #[error("{var} is not a valid URL: `{value}`")]
    InvalidUrl { var: &'static str, value: String },
}
