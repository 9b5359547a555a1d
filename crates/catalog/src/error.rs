/// Errors raised while assembling a catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("series name cannot be empty")]
    EmptySeriesName,

    #[error("episode label cannot be empty (series `{series}`)")]
    EmptyEpisodeLabel { series: String },

    #[error("`{0}` contains the reserved delimiter `|`")]
    ReservedDelimiter(String),

    #[error("series `{0}` collides with a reserved callback token")]
    ReservedPrefix(String),

    #[error("duplicate series `{0}`")]
    DuplicateSeries(String),

    #[error("duplicate episode `{episode}` in series `{series}`")]
    DuplicateEpisode { series: String, episode: String },

    #[error("callback token `{0}` exceeds {max} bytes", max = crate::MAX_TOKEN_LEN)]
    TokenTooLong(String),
}
