//! Chat session state
//!
//! The session owns the visible transcript and the composer. It is in one of two
//! phases:
//!
//! - `Idle`: input enabled, typing indicator hidden
//! - `Sending`: input cleared and disabled, typing indicator shown
//!
//! Entering `Sending` happens synchronously in [`ChatSession::begin_submit`], so a
//! second submission cannot start while a reply is outstanding. Every completion
//! path goes through [`ChatSession::complete_submit`], which runs the exit actions.

use crate::bubble::Bubble;
use crate::sender::{ChatError, ChatResult, MessageSender, request_reset};
use crate::types::BotReply;
use tracing::{debug, warn};

pub const REJECTED_TEXT: &str = "Error: message could not be sent.";
pub const NETWORK_ERROR_TEXT: &str = "Network error.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
}

/// What a key press in the composer should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Submit and suppress the newline.
    Submit,
    /// Let the textarea handle the key.
    Passthrough,
}

/// Enter submits; Shift+Enter keeps the default newline.
pub fn key_action(is_enter: bool, shift_held: bool) -> KeyAction {
    if is_enter && !shift_held {
        KeyAction::Submit
    } else {
        KeyAction::Passthrough
    }
}

/// Ticket for the single in-flight message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    text: String,
    generation: u64,
}

impl PendingSend {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Bubble text for a send outcome.
pub fn reply_text(outcome: ChatResult<BotReply>) -> String {
    match outcome {
        Ok(reply) => reply.text,
        Err(ChatError::Rejected) => REJECTED_TEXT.to_string(),
        Err(_) => NETWORK_ERROR_TEXT.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    transcript: Vec<Bubble>,
    phase: Phase,
    input: String,
    avatar_src: String,
    welcome: Option<String>,
    generation: u64,
    scroll_requests: u64,
    focus_requests: u64,
}

impl ChatSession {
    pub fn new(avatar_src: impl Into<String>) -> Self {
        Self {
            transcript: Vec::new(),
            phase: Phase::Idle,
            input: String::new(),
            avatar_src: avatar_src.into(),
            welcome: None,
            generation: 0,
            scroll_requests: 0,
            focus_requests: 1,
        }
    }

    /// Shows `welcome` as the first bot bubble now and after every reload.
    pub fn with_welcome(mut self, welcome: Option<String>) -> Self {
        self.welcome = welcome.filter(|text| !text.trim().is_empty());
        self.push_welcome();
        self
    }

    pub fn transcript(&self) -> &[Bubble] {
        &self.transcript
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_input_enabled(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_typing_visible(&self) -> bool {
        self.phase == Phase::Sending
    }

    /// Incremented on every reload; replies from an older generation are dropped.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Incremented whenever a bubble is added; the view scrolls to the newest one.
    pub fn scroll_requests(&self) -> u64 {
        self.scroll_requests
    }

    /// Incremented whenever the composer should take focus.
    pub fn focus_requests(&self) -> u64 {
        self.focus_requests
    }

    /// Edits the composer. Ignored while the input is disabled.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.is_input_enabled() {
            self.input = text.into();
        }
    }

    /// Appends the user bubble and enters `Sending`.
    ///
    /// Returns `None` (and changes nothing) for blank input or when a message
    /// is already in flight.
    pub fn begin_submit(&mut self, raw: &str) -> Option<PendingSend> {
        let text = raw.trim();
        if text.is_empty() || self.phase == Phase::Sending {
            return None;
        }

        self.push_bubble(Bubble::user(text));
        self.enter_sending();
        debug!(generation = self.generation, "message dispatched");
        Some(PendingSend {
            text: text.to_string(),
            generation: self.generation,
        })
    }

    /// Appends the reply (or error) bubble and returns to `Idle`.
    pub fn complete_submit(&mut self, pending: PendingSend, outcome: ChatResult<BotReply>) {
        if pending.generation != self.generation {
            debug!(
                stale = pending.generation,
                current = self.generation,
                "dropping reply from before reload"
            );
            return;
        }
        if let Err(err) = &outcome {
            warn!(error = %err, "message failed");
        }
        let bubble = Bubble::bot(reply_text(outcome), self.avatar_src.clone());
        self.push_bubble(bubble);
        self.exit_sending();
    }

    /// Full round trip through `sender`. Returns `false` when nothing was sent.
    ///
    /// Headless entry point for callers that can hold `&mut self` across the
    /// await. The view cannot borrow its signal that long, so it runs the same
    /// two halves (`begin_submit` then `complete_submit`) around a spawned send.
    pub async fn submit(&mut self, sender: &dyn MessageSender, raw: &str) -> bool {
        let Some(pending) = self.begin_submit(raw) else {
            return false;
        };
        let outcome = sender.send(pending.text()).await;
        self.complete_submit(pending, outcome);
        true
    }

    /// Requests a backend reset, then reloads regardless of the result.
    ///
    /// The view performs the same `request_reset` then `reload` sequence from a
    /// spawned task.
    pub async fn reset(&mut self, sender: &dyn MessageSender) {
        request_reset(sender).await;
        self.reload();
    }

    /// Discards everything rendered so far, as a page reload would.
    pub fn reload(&mut self) {
        self.transcript.clear();
        self.phase = Phase::Idle;
        self.input.clear();
        self.generation += 1;
        self.focus_requests += 1;
        self.push_welcome();
    }

    fn enter_sending(&mut self) {
        self.phase = Phase::Sending;
        self.input.clear();
    }

    fn exit_sending(&mut self) {
        self.phase = Phase::Idle;
        self.focus_requests += 1;
    }

    fn push_welcome(&mut self) {
        if let Some(text) = self.welcome.clone() {
            self.push_bubble(Bubble::bot(text, self.avatar_src.clone()));
        }
    }

    fn push_bubble(&mut self, bubble: Bubble) {
        self.transcript.push(bubble);
        self.scroll_requests += 1;
    }
}
