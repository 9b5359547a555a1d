//! Route dispatch
//!
//! Turns a parsed [`Route`] into platform calls. The teloxide endpoints in
//! `commands` and `callbacks` only translate updates into an
//! [`Interaction`] and call [`dispatch`].

use crate::config::Config;
use crate::constants;
use crate::error::BotResult;
use crate::gate;
use crate::keyboards;
use crate::platform::{Menu, Platform, Relay};
use crate::routes::Route;
use catalog::{MediaCatalog, SelectionToken};
use teloxide::types::{CallbackQuery, ChatId, MessageId, UserId};

/// Platform-neutral view of an inbound event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub user: UserId,
    /// Where replies and relayed files go
    pub chat: ChatId,
    /// Prompt to edit in place, if any
    pub message: Option<MessageId>,
    /// Set for button presses
    pub callback_id: Option<String>,
}

impl Interaction {
    pub fn command(user: UserId, chat: ChatId) -> Self {
        Self {
            user,
            chat,
            message: None,
            callback_id: None,
        }
    }

    /// Replies go to the chat holding the keyboard, or the user's private
    /// chat when that message is no longer available
    pub fn from_callback(q: &CallbackQuery) -> Self {
        let (chat, message) = match &q.message {
            Some(msg) => (msg.chat.id, Some(msg.id)),
            None => (ChatId::from(q.from.id), None),
        };
        Self {
            user: q.from.id,
            chat,
            message,
            callback_id: Some(q.id.clone()),
        }
    }
}

/// Handle one inbound event
pub async fn dispatch<P>(
    platform: &P,
    config: &Config,
    catalog: &MediaCatalog,
    interaction: &Interaction,
    route: Route,
) -> BotResult<()>
where
    P: Platform + ?Sized,
{
    if route == Route::Unrecognized {
        return Ok(());
    }

    // Acknowledge first so the client drops its loading state
    if let Some(id) = &interaction.callback_id {
        platform.answer_callback(id).await?;
    }

    match route {
        Route::Start => {
            platform
                .send_menu(interaction.chat, keyboards::welcome_menu(config))
                .await
        }
        Route::CheckMembership => {
            let admitted =
                gate::is_admitted(platform, &config.mandatory_channel, interaction.user).await;
            let menu = if admitted {
                keyboards::series_menu(catalog)
            } else {
                keyboards::not_a_member_menu()
            };
            present(platform, interaction, menu).await
        }
        Route::ShowSeries(series) => match keyboards::episode_menu(catalog, &series) {
            Some(menu) => present(platform, interaction, menu).await,
            None => {
                tracing::debug!("Unknown series requested: {}", series);
                Ok(())
            }
        },
        Route::SelectEpisode(token) => {
            send_episode(platform, config, catalog, interaction, &token).await
        }
        Route::Unrecognized => Ok(()),
    }
}

/// Relay the selected episode, or explain that it is missing
async fn send_episode<P>(
    platform: &P,
    config: &Config,
    catalog: &MediaCatalog,
    interaction: &Interaction,
    token: &SelectionToken,
) -> BotResult<()>
where
    P: Platform + ?Sized,
{
    match catalog.resolve(token.series(), token.episode()) {
        Some(media) => {
            tracing::info!(
                "Relaying {} - {} to user {}",
                token.series(),
                token.episode(),
                interaction.user
            );
            let relay = Relay::protected_video(
                media.clone(),
                constants::relay_caption(token.series(), token.episode()),
            );
            platform.relay(interaction.chat, relay).await
        }
        None => {
            present(
                platform,
                interaction,
                keyboards::not_available_menu(&config.support_contact),
            )
            .await
        }
    }
}

/// Edit the prompt in place when there is one, send a new message otherwise
async fn present<P>(platform: &P, interaction: &Interaction, menu: Menu) -> BotResult<()>
where
    P: Platform + ?Sized,
{
    match interaction.message {
        Some(message) => platform.edit_menu(interaction.chat, message, menu).await,
        None => platform.send_menu(interaction.chat, menu).await,
    }
}
