//! Message delivery for the chat session
//!
//! A [`MessageSender`] turns one user message into one bot reply. Two
//! implementations exist and one is chosen from configuration at startup:
//!
//! - `remote` - POSTs to the configured send endpoint and reads its JSON reply
//! - `simulated` - waits a fixed delay and answers with a canned reply
//!
//! # Usage
//!
//! ```rust,no_run
//! use yourchatbot::sender::{MessageSender, SimulatedSender};
//!
//! # async fn example() -> yourchatbot::sender::ChatResult<()> {
//! let sender = SimulatedSender::default();
//! let reply = sender.send("Hallo").await?;
//! assert_eq!(reply.text, "Danke! (Demo-Antwort)");
//! # Ok(())
//! # }
//! ```

mod remote;
mod simulated;

use crate::config::{AppConfig, SenderMode};
use crate::types::BotReply;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub use remote::{RemoteSender, interpret_reply};
pub use simulated::{SIMULATED_DELAY, SIMULATED_REPLY, SimulatedSender};

// ============================================
// Error Types
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The endpoint answered but did not acknowledge the message.
    #[error("message rejected by endpoint")]
    Rejected,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("could not decode reply: {0}")]
    Decode(String),

    /// Acknowledged reply without bot text.
    #[error("reply is missing bot text")]
    MissingReply,
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::Decode(err.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

// ============================================
// Sender capability
// ============================================

#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Delivers one message and resolves with the bot's reply.
    async fn send(&self, text: &str) -> ChatResult<BotReply>;

    /// Asks the backend to forget the conversation.
    async fn reset(&self) -> ChatResult<()> {
        Ok(())
    }

    fn name(&self) -> &'static str;
}

pub type SharedSender = Arc<dyn MessageSender>;

/// Builds the sender selected by `config`.
pub fn sender_from_config(config: &AppConfig) -> SharedSender {
    match &config.sender {
        SenderMode::Remote {
            send_url,
            reset_url,
        } => Arc::new(RemoteSender::new(send_url.clone(), reset_url.clone())),
        SenderMode::Simulated => Arc::new(SimulatedSender::default()),
    }
}

/// Issues a reset request and swallows any failure.
pub async fn request_reset(sender: &dyn MessageSender) {
    match sender.reset().await {
        Ok(()) => info!(sender = sender.name(), "session reset requested"),
        Err(err) => warn!(sender = sender.name(), error = %err, "reset request failed, reloading anyway"),
    }
}
