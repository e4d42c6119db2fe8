use crate::client::Client;
use crate::{RasaError, WebhookMessage, WebhookResponse};

/// Builder for a single webhook message.
///
/// Created by [`Client::message`]. Without [`with_sender`](Self::with_sender)
/// the client's default sender is used.
///
/// # Examples
///
/// ```no_run
/// # use rasa_rest_client::Client;
/// # async fn example() -> Result<(), rasa_rest_client::RasaError> {
/// let client = Client::new()?;
///
/// let reply = client
///     .message("cho tôi 2 phở bò bàn 5")
///     .with_sender("table-5")
///     .send()
///     .await?;
///
/// for text in reply.texts() {
///     println!("bot: {text}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MessageBuilder<'a> {
    client: &'a Client,
    text: String,
    sender: Option<String>,
}

impl<'a> MessageBuilder<'a> {
    pub(crate) const fn new(client: &'a Client, text: String) -> Self {
        Self {
            client,
            text,
            sender: None,
        }
    }

    /// Sets the sender for this message only.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Builds the payload without sending it.
    #[must_use]
    pub fn build(self) -> WebhookMessage {
        let sender = self
            .sender
            .unwrap_or_else(|| self.client.default_sender().to_string());
        WebhookMessage::new(sender, self.text)
    }

    /// Sends the message and returns the bot's reply array.
    ///
    /// # Errors
    ///
    /// See [`Client::send`].
    pub async fn send(self) -> Result<WebhookResponse, RasaError> {
        let client = self.client;
        client.send(self.build()).await
    }
}
