use serde::{Deserialize, Serialize};

/// Sender identifier used when the caller does not supply one.
pub const DEFAULT_SENDER: &str = "user1";

/// The JSON payload POSTed to the REST webhook.
///
/// Serializes to exactly `{"sender": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookMessage {
    /// Identifies the conversation participant; the server keys its
    /// conversation tracker on this value.
    pub sender: String,
    pub message: String,
}

impl WebhookMessage {
    /// Creates a payload with an explicit sender.
    pub fn new(sender: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            message: message.into(),
        }
    }

    /// Creates a payload from the default sender (`"user1"`).
    pub fn from_default_sender(message: impl Into<String>) -> Self {
        Self::new(DEFAULT_SENDER, message)
    }
}
