//! Menus shown to the user
//!
//! Every function here is pure: it only builds the text and inline keyboard
//! and leaves sending or editing to the caller.

use crate::config::Config;
use crate::constants::{self, label, text};
use crate::platform::Menu;
use catalog::token::{series_token, CHECK_MEMBERSHIP_TOKEN};
use catalog::{MediaCatalog, SelectionToken};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// One button per row
fn single_column(buttons: impl IntoIterator<Item = InlineKeyboardButton>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(buttons.into_iter().map(|button| vec![button]))
}

/// Join links for both channels and the membership check
pub fn welcome_menu(config: &Config) -> Menu {
    let keyboard = single_column([
        InlineKeyboardButton::url(label::JOIN_CHANNEL, config.mandatory_link.clone()),
        InlineKeyboardButton::url(label::JOIN_CHANNEL, config.optional_link.clone()),
        InlineKeyboardButton::callback(label::CHECK_MEMBERSHIP, CHECK_MEMBERSHIP_TOKEN),
    ]);
    Menu::new(text::WELCOME, keyboard)
}

/// One button per series, in catalog order
pub fn series_menu(catalog: &MediaCatalog) -> Menu {
    let keyboard = single_column(
        catalog
            .series_names()
            .map(|name| InlineKeyboardButton::callback(name, series_token(name))),
    );
    Menu::new(text::SELECT_SERIES, keyboard)
}

/// One button per episode of `series`, or `None` for an unknown series
pub fn episode_menu(catalog: &MediaCatalog, series: &str) -> Option<Menu> {
    let entry = catalog.series(series)?;
    let keyboard = single_column(entry.episode_labels().map(|episode| {
        InlineKeyboardButton::callback(
            episode,
            SelectionToken::new(entry.name(), episode).encode(),
        )
    }));
    Some(Menu::new(text::SELECT_EPISODE, keyboard))
}

pub fn not_a_member_menu() -> Menu {
    Menu::text(text::NOT_A_MEMBER)
}

pub fn not_available_menu(support_contact: &str) -> Menu {
    Menu::text(constants::not_available(support_contact))
}
