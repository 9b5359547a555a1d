use catalog::MediaCatalog;
use std::sync::Arc;
use telegram::{telegram, Config};
use teloxide::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let catalog = match MediaCatalog::builtin() {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            tracing::error!("Invalid catalog: {}", e);
            std::process::exit(1);
        }
    };

    tracing::debug!("Loaded configuration: {:?}", config);

    let bot = Bot::new(config.token.clone());

    if let Err(e) = telegram::set_bot_commands(&bot).await {
        tracing::warn!("Failed to register bot commands: {}", e);
    }

    tracing::info!("Bot started with {} series in the catalog", catalog.len());

    Dispatcher::builder(bot, telegram::schema())
        .dependencies(dptree::deps![config, catalog])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
