//! # Telegram Posting Module
//!
//! Thin wrapper around teloxide for pushing the rendered menu chunks to
//! the configured channel. Send failures are logged and reported as a
//! boolean; there is no retry within a run. A fixed cooldown between
//! consecutive sends keeps the bot under Telegram's rate limit.

use log::{error, info};
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, Recipient};

/// Pause between consecutive chunk sends.
const SEND_COOLDOWN: Duration = Duration::from_secs(1);

/// Posts rendered menu messages to one Telegram chat.
pub struct MenuPoster {
    bot: Bot,
    chat: Recipient,
}

impl MenuPoster {
    /// Build a poster from a bot token and a channel identifier, which
    /// may be a `@username` or a numeric chat id.
    pub fn new(token: &str, channel: &str) -> Self {
        Self {
            bot: Bot::new(token),
            chat: parse_channel(channel),
        }
    }

    /// Send one message. The text must already be HTML-escaped.
    pub async fn post(&self, text: &str) -> bool {
        match self
            .bot
            .send_message(self.chat.clone(), text)
            .parse_mode(ParseMode::Html)
            .await
        {
            Ok(_) => {
                info!("Posted message to Telegram chat {:?}", self.chat);
                true
            }
            Err(e) => {
                error!("Failed to post message to Telegram: {}", e);
                false
            }
        }
    }

    /// Send every chunk in order with the cooldown in between. Returns
    /// true only if all chunks went through.
    pub async fn post_all(&self, chunks: &[String]) -> bool {
        let mut sent = 0usize;
        for (index, chunk) in chunks.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(SEND_COOLDOWN).await;
            }
            if self.post(chunk).await {
                sent += 1;
            } else {
                error!("Failed to post chunk {}/{}", index + 1, chunks.len());
            }
        }
        info!("Posted {}/{} chunks successfully", sent, chunks.len());
        sent == chunks.len()
    }
}

fn parse_channel(channel: &str) -> Recipient {
    match channel.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(channel.to_string()),
    }
}
