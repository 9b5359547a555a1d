//! Command handlers

use crate::config::Config;
use crate::handlers::{dispatch, Interaction};
use crate::routes::Route;
use crate::types::{Command, HandlerResult};
use catalog::MediaCatalog;
use std::sync::Arc;
use teloxide::{prelude::*, utils::command::BotCommands};

/// Welcome message with the join links and the membership check
pub async fn start(
    bot: Bot,
    msg: Message,
    config: Arc<Config>,
    catalog: Arc<MediaCatalog>,
) -> HandlerResult {
    let user = match msg.from() {
        Some(user) => user.id,
        None => return Ok(()),
    };

    let interaction = Interaction::command(user, msg.chat.id);
    dispatch(&bot, &config, &catalog, &interaction, Route::Start).await?;
    Ok(())
}

/// Display help message with available commands
pub async fn help(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}
