//! Chat repository
//!
//! Delivers text to the single configured Telegram chat.

use anyhow::{Context, Result};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;

/// Repository trait for outbound chat messages
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Sends one text message to the configured chat
    async fn send(&self, text: &str) -> Result<()>;
}

/// Telegram implementation of ChatRepository
pub struct TelegramChatRepository {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramChatRepository {
    /// Creates a new Telegram chat repository
    ///
    /// # Arguments
    /// * `bot` - Bot API client
    /// * `chat_id` - Numeric chat id, or `@channel` username
    pub fn new(bot: Bot, chat_id: &str) -> Self {
        Self {
            bot,
            recipient: recipient_from(chat_id),
        }
    }
}

#[async_trait]
impl ChatRepository for TelegramChatRepository {
    async fn send(&self, text: &str) -> Result<()> {
        self.bot
            .send_message(self.recipient.clone(), text)
            .await
            .context("Failed to send Telegram message")?;

        Ok(())
    }
}

fn recipient_from(chat_id: &str) -> Recipient {
    match chat_id.trim().parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.trim().to_string()),
    }
}
