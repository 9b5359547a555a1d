//! Series and episode table
//!
//! The catalog is built once at startup and only read afterwards, so it is
//! shared behind an `Arc` without any locking.

use crate::error::CatalogError;
use crate::token::{
    series_token, SelectionToken, CHECK_MEMBERSHIP_TOKEN, DELIMITER, MAX_TOKEN_LEN, SERIES_PREFIX,
};
use std::collections::HashSet;
use std::fmt;

/// Opaque file reference understood only by the media host
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaRef(String);

impl MediaRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One episode of a series
///
/// `media` is `None` for episodes that are listed but not uploaded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub label: String,
    pub media: Option<MediaRef>,
}

/// A series with its episodes in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesEntry {
    name: String,
    episodes: Vec<Episode>,
}

impl SeriesEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn episode_labels(&self) -> impl Iterator<Item = &str> {
        self.episodes.iter().map(|e| e.label.as_str())
    }

    pub fn media(&self, label: &str) -> Option<&MediaRef> {
        self.episodes
            .iter()
            .find(|e| e.label == label)
            .and_then(|e| e.media.as_ref())
    }
}

/// Ordered, immutable collection of series
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaCatalog {
    series: Vec<SeriesEntry>,
}

impl MediaCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The table shipped with the bot
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::builder()
            .series(
                "Squid Game",
                [
                    ("Ep1", Some("BAACAgEAAxkBAAMEZ3DsN-FA7IHHgPkO8USXnYhEBtwAAoQFAAIt7mhHV63yXpwpBpA2BA")),
                    ("Ep2", Some("BAACAgEAAxkBAAMGZ3DsRNfoIaokkV5CfHR_w8OL-nwAAoMFAAIt7mhHgPxtW15Ot0Q2BA")),
                    ("Ep4", Some("BAACAgEAAxkBAAMIZ3DsSmUIP1eCrw3ijYi3D9WGm9wAAo0FAAIt7mhHSreQD3RfqAw2BA")),
                    ("Ep5", Some("BAACAgEAAxkBAAMKZ3DsU5MEC6LmZSr2N1G7EJfA6gwAApMFAAIt7mhHth32fOmvfP82BA")),
                    ("Ep6", Some("BAACAgEAAxkBAAMMZ3DsV4cmdHQJZcArX0xftYWY3tAAAqIFAAIt7mhHmZHe_Z6mSsI2BA")),
                    ("Ep7", Some("BAACAgEAAxkBAAMOZ3DsXC8QIk_H9st_o92X2KE21zUAAqUFAAIt7mhHHVdJ-c7a1682BA")),
                    ("Combined 480p", Some("BAACAgEAAxkBAAMQZ3DsYMX4Qh8Tizxl1KHNyLC5TD4AAqoFAAIt7mhH0VafMpHBYrY2BA")),
                    ("Combined 720p", Some("BAACAgEAAxkBAAMSZ3DsZv12_d56s_lTsh8AAS5xSpg3AAKwBQACLe5oR6cLuEWPjoOINgQ")),
                ],
            )
            // Not uploaded yet
            .series("Culpa Tuya", [("Ep1", None::<&str>), ("Ep2", None)])
            .build()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesEntry> {
        self.series.iter()
    }

    /// Series names in catalog order
    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }

    pub fn series(&self, name: &str) -> Option<&SeriesEntry> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Look up the media stored for `(series, episode)`
    ///
    /// Returns `None` for unknown pairs and for episodes without media.
    pub fn resolve(&self, series: &str, episode: &str) -> Option<&MediaRef> {
        self.series(series)?.media(episode)
    }
}

/// Collects series and validates them into a [`MediaCatalog`]
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    series: Vec<SeriesEntry>,
}

impl CatalogBuilder {
    /// Append a series; episodes keep the given order
    pub fn series<I, L, M>(mut self, name: impl Into<String>, episodes: I) -> Self
    where
        I: IntoIterator<Item = (L, Option<M>)>,
        L: Into<String>,
        M: Into<String>,
    {
        let episodes = episodes
            .into_iter()
            .map(|(label, media)| Episode {
                label: label.into(),
                media: media.map(MediaRef::new),
            })
            .collect();
        self.series.push(SeriesEntry {
            name: name.into(),
            episodes,
        });
        self
    }

    pub fn build(self) -> Result<MediaCatalog, CatalogError> {
        let mut names = HashSet::new();
        for entry in &self.series {
            validate_key(&entry.name, || CatalogError::EmptySeriesName)?;
            // Would be routed as a series button or the membership check
            if entry.name.starts_with(SERIES_PREFIX) || entry.name == CHECK_MEMBERSHIP_TOKEN {
                return Err(CatalogError::ReservedPrefix(entry.name.clone()));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateSeries(entry.name.clone()));
            }
            check_token_len(series_token(&entry.name))?;

            let mut labels = HashSet::new();
            for episode in &entry.episodes {
                validate_key(&episode.label, || CatalogError::EmptyEpisodeLabel {
                    series: entry.name.clone(),
                })?;
                if !labels.insert(episode.label.as_str()) {
                    return Err(CatalogError::DuplicateEpisode {
                        series: entry.name.clone(),
                        episode: episode.label.clone(),
                    });
                }
                check_token_len(SelectionToken::new(&entry.name, &episode.label).encode())?;
            }
        }

        Ok(MediaCatalog {
            series: self.series,
        })
    }
}

fn validate_key(key: &str, empty: impl FnOnce() -> CatalogError) -> Result<(), CatalogError> {
    if key.trim().is_empty() {
        return Err(empty());
    }
    if key.contains(DELIMITER) {
        return Err(CatalogError::ReservedDelimiter(key.to_string()));
    }
    Ok(())
}

fn check_token_len(token: String) -> Result<(), CatalogError> {
    if token.len() > MAX_TOKEN_LEN {
        return Err(CatalogError::TokenTooLong(token));
    }
    Ok(())
}
