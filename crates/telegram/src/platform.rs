//! Outbound calls to the chat platform
//!
//! Handlers only talk to Telegram through [`Platform`], which keeps the
//! routing and gate logic testable without a live bot.

use crate::error::BotResult;
use async_trait::async_trait;
use catalog::MediaRef;
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, ChatMemberStatus, InlineKeyboardMarkup, InputFile, MessageId, Recipient, UserId,
};

/// Text with an optional inline keyboard
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub text: String,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

impl Menu {
    pub fn new(text: impl Into<String>, keyboard: InlineKeyboardMarkup) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }

    /// A message without buttons; editing to it removes the old keyboard
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }
}

/// A request to forward previously uploaded media to a chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relay {
    pub media: MediaRef,
    pub caption: String,
    pub supports_streaming: bool,
    pub protect_content: bool,
}

impl Relay {
    /// Streaming playback on, forwarding and saving off
    pub fn protected_video(media: MediaRef, caption: impl Into<String>) -> Self {
        Self {
            media,
            caption: caption.into(),
            supports_streaming: true,
            protect_content: true,
        }
    }
}

#[async_trait]
pub trait Platform: Send + Sync {
    /// Acknowledge a button press so the client stops its spinner
    async fn answer_callback(&self, callback_id: &str) -> BotResult<()>;

    async fn send_menu(&self, chat: ChatId, menu: Menu) -> BotResult<()>;

    async fn edit_menu(&self, chat: ChatId, message: MessageId, menu: Menu) -> BotResult<()>;

    async fn member_status(&self, channel: &Recipient, user: UserId) -> BotResult<ChatMemberStatus>;

    async fn relay(&self, chat: ChatId, relay: Relay) -> BotResult<()>;
}

#[async_trait]
impl Platform for Bot {
    async fn answer_callback(&self, callback_id: &str) -> BotResult<()> {
        self.answer_callback_query(callback_id).await?;
        Ok(())
    }

    async fn send_menu(&self, chat: ChatId, menu: Menu) -> BotResult<()> {
        let mut request = self.send_message(chat, menu.text);
        if let Some(keyboard) = menu.keyboard {
            request = request.reply_markup(keyboard);
        }
        request.await?;
        Ok(())
    }

    async fn edit_menu(&self, chat: ChatId, message: MessageId, menu: Menu) -> BotResult<()> {
        let mut request = self.edit_message_text(chat, message, menu.text);
        if let Some(keyboard) = menu.keyboard {
            request = request.reply_markup(keyboard);
        }
        request.await?;
        Ok(())
    }

    async fn member_status(&self, channel: &Recipient, user: UserId) -> BotResult<ChatMemberStatus> {
        let member = self.get_chat_member(channel.clone(), user).await?;
        Ok(member.status())
    }

    async fn relay(&self, chat: ChatId, relay: Relay) -> BotResult<()> {
        self.send_video(chat, InputFile::file_id(relay.media.as_str()))
            .caption(relay.caption)
            .supports_streaming(relay.supports_streaming)
            .protect_content(relay.protect_content)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Recording stand-in for the Telegram client

    use super::*;
    use crate::error::BotError;
    use teloxide::{ApiError, RequestError};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Answer(String),
        Send(ChatId, Menu),
        Edit(ChatId, MessageId, Menu),
        MemberStatus(Recipient, UserId),
        Relay(ChatId, Relay),
    }

    /// Records every call; `status` is what the membership lookup returns
    pub struct RecordingPlatform {
        pub status: Option<ChatMemberStatus>,
        calls: Mutex<Vec<Call>>,
    }

    impl RecordingPlatform {
        pub fn with_status(status: ChatMemberStatus) -> Self {
            Self {
                status: Some(status),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Membership lookups fail, like a revoked bot permission
        pub fn failing() -> Self {
            Self {
                status: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl Platform for RecordingPlatform {
        async fn answer_callback(&self, callback_id: &str) -> BotResult<()> {
            self.record(Call::Answer(callback_id.to_string()));
            Ok(())
        }

        async fn send_menu(&self, chat: ChatId, menu: Menu) -> BotResult<()> {
            self.record(Call::Send(chat, menu));
            Ok(())
        }

        async fn edit_menu(&self, chat: ChatId, message: MessageId, menu: Menu) -> BotResult<()> {
            self.record(Call::Edit(chat, message, menu));
            Ok(())
        }

        async fn member_status(
            &self,
            channel: &Recipient,
            user: UserId,
        ) -> BotResult<ChatMemberStatus> {
            self.record(Call::MemberStatus(channel.clone(), user));
            self.status
                .clone()
                .ok_or(BotError::TelegramError(RequestError::Api(ApiError::UserNotFound)))
        }

        async fn relay(&self, chat: ChatId, relay: Relay) -> BotResult<()> {
            self.record(Call::Relay(chat, relay));
            Ok(())
        }
    }
}
