use crate::http::common::{DEFAULT_WEBHOOK_URL, construct_webhook_url, parse_webhook_url};
use crate::http::webhook;
use crate::request::DEFAULT_SENDER;
use crate::request_builder::MessageBuilder;
use crate::{RasaError, WebhookMessage, WebhookResponse};
use reqwest::{Client as ReqwestClient, Url};
use std::time::Duration;
use tracing::debug;

/// Where the builder should send messages.
#[derive(Debug)]
enum Target {
    WebhookUrl(String),
    ServerUrl(String),
}

/// Client for a Rasa REST webhook.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    webhook_url: Url,
    default_sender: String,
    #[allow(clippy::struct_field_names)]
    http_client: ReqwestClient,
}

/// Builder for `Client` instances.
///
/// # Example
///
/// ```
/// use rasa_rest_client::Client;
/// use std::time::Duration;
///
/// let client = Client::builder()
///     .server_url("http://rasa:5005")
///     .default_sender("table-7")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(client.webhook_url().as_str(), "http://rasa:5005/webhooks/rest/webhook");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    target: Target,
    default_sender: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            target: Target::WebhookUrl(DEFAULT_WEBHOOK_URL.to_string()),
            default_sender: DEFAULT_SENDER.to_string(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl ClientBuilder {
    /// Sets the full webhook URL, e.g. `http://localhost:5005/webhooks/rest/webhook`.
    ///
    /// Overrides any earlier [`server_url`](Self::server_url).
    #[must_use]
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.target = Target::WebhookUrl(url.into());
        self
    }

    /// Sets the server base URL, e.g. `http://rasa:5005`.
    ///
    /// The REST channel path `/webhooks/rest/webhook` is appended. Overrides
    /// any earlier [`webhook_url`](Self::webhook_url).
    #[must_use]
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.target = Target::ServerUrl(url.into());
        self
    }

    /// Sets the sender used when a call does not name one. Defaults to `"user1"`.
    #[must_use]
    pub fn default_sender(mut self, sender: impl Into<String>) -> Self {
        self.default_sender = sender.into();
        self
    }

    /// Sets the total request timeout.
    ///
    /// If not set, uses reqwest's default (no timeout).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// If not set, uses reqwest's default.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Builds the `Client`.
    ///
    /// # Errors
    ///
    /// Returns [`RasaError::InvalidInput`] for an unparseable or non-http(s)
    /// URL, and [`RasaError::ClientBuild`] if the HTTP client cannot be built.
    pub fn build(self) -> Result<Client, RasaError> {
        let webhook_url = match &self.target {
            Target::WebhookUrl(url) => parse_webhook_url(url)?,
            Target::ServerUrl(url) => construct_webhook_url(url)?,
        };

        let mut builder = ReqwestClient::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| RasaError::ClientBuild(e.to_string()))?;

        Ok(Client {
            webhook_url,
            default_sender: self.default_sender,
            http_client,
        })
    }
}

impl Client {
    /// Creates a new builder, starting from the default webhook URL and sender.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Creates a client for `http://localhost:5005/webhooks/rest/webhook`.
    ///
    /// # Errors
    ///
    /// Returns [`RasaError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, RasaError> {
        Self::builder().build()
    }

    /// Creates a client for an explicit webhook URL.
    ///
    /// # Errors
    ///
    /// See [`ClientBuilder::build`].
    pub fn with_url(url: impl Into<String>) -> Result<Self, RasaError> {
        Self::builder().webhook_url(url).build()
    }

    /// The URL every message is POSTed to.
    #[must_use]
    pub fn webhook_url(&self) -> &Url {
        &self.webhook_url
    }

    /// The sender used when a call does not name one.
    #[must_use]
    pub fn default_sender(&self) -> &str {
        &self.default_sender
    }

    /// Starts a fluent message request.
    ///
    /// ```no_run
    /// # use rasa_rest_client::Client;
    /// # async fn example() -> Result<(), rasa_rest_client::RasaError> {
    /// let client = Client::new()?;
    /// let reply = client.message("hi").with_sender("alice").send().await?;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn message(&self, text: impl Into<String>) -> MessageBuilder<'_> {
        MessageBuilder::new(self, text.into())
    }

    /// Sends a message from the client's default sender.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub async fn send_message(
        &self,
        message: impl Into<String>,
    ) -> Result<WebhookResponse, RasaError> {
        self.send(WebhookMessage::new(self.default_sender.as_str(), message))
            .await
    }

    /// Sends a message from an explicit sender.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub async fn send_message_as(
        &self,
        sender: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<WebhookResponse, RasaError> {
        self.send(WebhookMessage::new(sender, message)).await
    }

    /// Posts a prebuilt payload and returns the bot's reply array.
    ///
    /// One request, no retries.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The payload cannot be serialized
    /// - The HTTP request fails or times out
    /// - The server answers with a non-2xx status
    /// - The response body is not a JSON array
    pub async fn send(&self, message: WebhookMessage) -> Result<WebhookResponse, RasaError> {
        debug!(
            "Sending message to {}: sender={}",
            self.webhook_url, message.sender
        );

        let response = webhook::post_message(&self.http_client, &self.webhook_url, &message).await?;

        debug!("Received {} bot message(s)", response.len());

        Ok(response)
    }
}
