//! Callback query handler for inline keyboard interactions

use crate::config::Config;
use crate::handlers::{dispatch, Interaction};
use crate::routes::Route;
use crate::types::HandlerResult;
use catalog::MediaCatalog;
use std::sync::Arc;
use teloxide::prelude::*;

/// Handle all callback queries from inline keyboards
pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    config: Arc<Config>,
    catalog: Arc<MediaCatalog>,
) -> HandlerResult {
    let data = match q.data.as_deref() {
        Some(data) => data,
        None => return Ok(()),
    };

    let route = Route::parse(data);
    if route == Route::Unrecognized {
        tracing::warn!("Unknown callback data from user {}: {:?}", q.from.id, data);
    }

    let interaction = Interaction::from_callback(&q);
    dispatch(&bot, &config, &catalog, &interaction, route).await?;
    Ok(())
}
