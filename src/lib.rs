//! Async client for the Rasa REST webhook channel.
//!
//! Posts `{"sender": ..., "message": ...}` to a conversational-AI server's
//! REST webhook and returns the JSON array of bot messages it answers with.
//!
//! # Example
//!
//! ```no_run
//! use rasa_rest_client::Client;
//!
//! # async fn example() -> Result<(), rasa_rest_client::RasaError> {
//! // http://localhost:5005/webhooks/rest/webhook, sender "user1"
//! let client = Client::new()?;
//!
//! let reply = client.send_message("xin chào").await?;
//! for text in reply.texts() {
//!     println!("bot: {text}");
//! }
//!
//! // Explicit sender
//! let reply = client.send_message_as("table-5", "2 phở bò").await?;
//! println!("{} message(s)", reply.len());
//! # Ok(())
//! # }
//! ```
//!
//! Set `LOUD_WIRE=1` to print every request and response to stderr.

mod client;
mod errors;
mod http;
mod request;
mod request_builder;
mod response;

pub use client::{Client, ClientBuilder};
pub use errors::RasaError;
pub use http::common::{DEFAULT_WEBHOOK_URL, REST_WEBHOOK_PATH};
pub use request::{DEFAULT_SENDER, WebhookMessage};
pub use request_builder::MessageBuilder;
pub use response::WebhookResponse;
