use std::sync::Arc;
use std::time::Duration;

use chat_model::message::{ChatMessage, ConversationTurn};
use chrono::Local;
use log::debug;
use rand::Rng;

use super::config::Config;
use super::ChatResponder;

/// Conversation of a single visitor. The transcript lives only as long as the session.
pub struct ChatSession {
    responder: Arc<ChatResponder>,
    typing_delay_min: Duration,
    typing_delay_max: Duration,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(responder: Arc<ChatResponder>, config: &Config) -> Self {
        ChatSession {
            responder,
            typing_delay_min: Duration::from_millis(config.typing_delay_min_ms),
            typing_delay_max: Duration::from_millis(config.typing_delay_max_ms),
            messages: Vec::new(),
        }
    }

    /// Records the visitor's message and picks the reply. Blank input is ignored.
    /// The reply joins the transcript once it is delivered with [`ChatSession::deliver_reply`].
    pub fn send_message(&mut self, text: &str) -> Option<ConversationTurn> {
        let input = text.trim();
        if input.is_empty() {
            return None;
        }
        let (category, response) = self.responder.answer(input);
        debug!("{input:?} -> {category}");
        let turn = ConversationTurn {
            input: input.to_string(),
            category,
            response: response.to_string(),
            time: Local::now(),
        };
        self.messages.push(turn.user_message());
        Some(turn)
    }

    pub fn deliver_reply(&mut self, turn: &ConversationTurn) -> ChatMessage {
        let message = turn.bot_message(Local::now());
        self.messages.push(message.clone());
        message
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Uniform in `[min, max)`, or `min` when the range is empty.
    pub fn typing_delay(&self) -> Duration {
        if self.typing_delay_min >= self.typing_delay_max {
            return self.typing_delay_min;
        }
        rand::thread_rng().gen_range(self.typing_delay_min..self.typing_delay_max)
    }
}
