pub mod callbacks;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod keyboards;
pub mod platform;
pub mod routes;
pub mod telegram;
pub mod types;

pub use config::Config;
pub use error::{BotError, BotResult, ConfigError};
pub use platform::{Menu, Platform, Relay};
pub use routes::Route;
pub use teloxide::prelude::Dispatcher;
pub use types::{Command, HandlerResult};
