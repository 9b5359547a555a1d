//! Static media catalog for the bot
//!
//! Holds the series/episode table and the callback token formats that
//! point into it. Nothing in here talks to the chat platform.

pub mod catalog;
pub mod error;
pub mod token;

pub use catalog::{CatalogBuilder, Episode, MediaCatalog, MediaRef, SeriesEntry};
pub use error::CatalogError;
pub use token::{SelectionToken, CHECK_MEMBERSHIP_TOKEN, DELIMITER, MAX_TOKEN_LEN};
