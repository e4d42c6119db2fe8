use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The reply from a REST webhook: the JSON array of bot messages, in order.
///
/// The shape of each element is up to the server and is not validated. Rasa
/// typically sends objects like `{"recipient_id": "user1", "text": "..."}`,
/// with `image`, `buttons` or `custom` in place of (or next to) `text`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebhookResponse {
    messages: Vec<Value>,
}

impl WebhookResponse {
    /// Wraps an already-parsed message array.
    #[must_use]
    pub fn new(messages: Vec<Value>) -> Self {
        Self { messages }
    }

    /// All messages as returned by the server.
    #[must_use]
    pub fn messages(&self) -> &[Value] {
        &self.messages
    }

    #[must_use]
    pub fn into_messages(self) -> Vec<Value> {
        self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// `true` when the bot produced no messages for this turn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.messages.iter()
    }

    /// The `text` field of every message that has one, in order.
    ///
    /// Messages without a string `text` (images, buttons-only, custom
    /// payloads, non-objects) are skipped.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter_map(|m| m.get("text").and_then(Value::as_str))
            .collect()
    }
}

impl From<Vec<Value>> for WebhookResponse {
    fn from(messages: Vec<Value>) -> Self {
        Self::new(messages)
    }
}

impl IntoIterator for WebhookResponse {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a WebhookResponse {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
