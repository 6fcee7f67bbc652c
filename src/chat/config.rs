use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_serving_addr")]
    pub serving_addr: String,

    #[serde(default = "default_static_serving_dir")]
    pub static_serving_dir: PathBuf,

    /// Bot replies over the chat stream are held back for a random time in
    /// `typingDelayMinMs..typingDelayMaxMs` while the widget shows the typing indicator.
    #[serde(default = "default_typing_delay_min_ms")]
    pub typing_delay_min_ms: u64,

    #[serde(default = "default_typing_delay_max_ms")]
    pub typing_delay_max_ms: u64,

    /// Delay before the unread badge is shown to a visitor who has not chatted yet.
    #[serde(default = "default_notification_delay_ms")]
    pub notification_delay_ms: u64,

    #[serde(default = "default_quick_actions")]
    pub quick_actions: Vec<QuickAction>,

    /// Makes response selection reproducible. Useful for demos and testing.
    #[serde(default)]
    pub response_seed: Option<u64>,
}

fn default_serving_addr() -> String {
    "0.0.0.0:3000".into()
}

fn default_static_serving_dir() -> PathBuf {
    "ui/dist".into()
}

fn default_typing_delay_min_ms() -> u64 {
    1000
}

fn default_typing_delay_max_ms() -> u64 {
    2000
}

fn default_notification_delay_ms() -> u64 {
    3 * 1000
}

fn default_quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new("Services", "What services do you offer?"),
        QuickAction::new("Projects", "Show me your projects"),
        QuickAction::new("Pricing", "How much does a website cost?"),
        QuickAction::new("Contact", "How can I contact you?"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serving_addr: default_serving_addr(),
            static_serving_dir: default_static_serving_dir(),
            typing_delay_min_ms: default_typing_delay_min_ms(),
            typing_delay_max_ms: default_typing_delay_max_ms(),
            notification_delay_ms: default_notification_delay_ms(),
            quick_actions: default_quick_actions(),
            response_seed: None,
        }
    }
}

impl Config {
    pub fn notification_delay(&self) -> Duration {
        Duration::from_millis(self.notification_delay_ms)
    }
}

/// Predefined message the widget sends with a single click.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    pub label: String,
    pub message: String,
}

impl QuickAction {
    pub fn new(label: &str, message: &str) -> Self {
        QuickAction {
            label: String::from(label),
            message: String::from(message),
        }
    }
}
