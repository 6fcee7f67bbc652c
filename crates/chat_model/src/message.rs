use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::Category;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sender {
    User,
    Bot,
}

/// Single entry of a chat transcript, as rendered by the widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Rendered verbatim: bot responses carry newlines and `**bold**` markup.
    pub content: String,
    pub sender: Sender,
    pub time: DateTime<Local>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>, time: DateTime<Local>) -> Self {
        ChatMessage {
            content: content.into(),
            sender: Sender::User,
            time,
        }
    }

    pub fn bot(content: impl Into<String>, time: DateTime<Local>) -> Self {
        ChatMessage {
            content: content.into(),
            sender: Sender::Bot,
            time,
        }
    }

    /// Hour and minute, the way the widget shows it below each bubble.
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationTurn {
    pub input: String,
    pub category: Category,
    pub response: String,
    pub time: DateTime<Local>,
}

impl ConversationTurn {
    pub fn user_message(&self) -> ChatMessage {
        ChatMessage::user(self.input.clone(), self.time)
    }

    /// The reply is stamped when it is shown, which is later than the turn itself.
    pub fn bot_message(&self, delivered: DateTime<Local>) -> ChatMessage {
        ChatMessage::bot(self.response.clone(), delivered)
    }
}
