use super::{ChatResult, MessageSender};
use crate::types::BotReply;
use async_trait::async_trait;
use std::time::Duration;

pub const SIMULATED_DELAY: Duration = Duration::from_millis(700);
pub const SIMULATED_REPLY: &str = "Danke! (Demo-Antwort)";

/// Offline responder: waits, then answers with a fixed text. Never fails.
pub struct SimulatedSender {
    delay: Duration,
    reply: String,
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self {
            delay: SIMULATED_DELAY,
            reply: SIMULATED_REPLY.to_string(),
        }
    }
}

impl SimulatedSender {
    pub fn new(delay: Duration, reply: impl Into<String>) -> Self {
        Self {
            delay,
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl MessageSender for SimulatedSender {
    async fn send(&self, _text: &str) -> ChatResult<BotReply> {
        tokio::time::sleep(self.delay).await;
        Ok(BotReply::new(self.reply.clone()))
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
