//! Routing of inbound events
//!
//! Button payloads are untrusted input. Each payload maps to exactly one
//! [`Route`]; anything that does not fit a known shape is `Unrecognized`.

use catalog::token::{parse_series_token, CHECK_MEMBERSHIP_TOKEN, MAX_TOKEN_LEN};
use catalog::SelectionToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/start` command
    Start,
    /// "Check Membership" button
    CheckMembership,
    /// A series button
    ShowSeries(String),
    /// An episode button
    SelectEpisode(SelectionToken),
    Unrecognized,
}

impl Route {
    /// Parse a callback payload
    ///
    /// Precedence: exact membership token, then `show_` prefix, then the
    /// two-segment selection token.
    pub fn parse(data: &str) -> Self {
        if data.is_empty() || data.len() > MAX_TOKEN_LEN {
            return Route::Unrecognized;
        }

        if data == CHECK_MEMBERSHIP_TOKEN {
            return Route::CheckMembership;
        }

        if let Some(series) = parse_series_token(data) {
            return Route::ShowSeries(series.to_string());
        }

        match SelectionToken::parse(data) {
            Some(token) => Route::SelectEpisode(token),
            None => Route::Unrecognized,
        }
    }
}
