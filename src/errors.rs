use thiserror::Error;

/// Defines errors that can occur when talking to a Rasa REST webhook.
///
/// Every fallible operation in this crate returns this one type. The variants
/// say where a call failed; the client never recovers from any of them.
///
/// # Example: Handling Webhook Errors
///
/// ```ignore
/// match client.send_message("hello").await {
///     Ok(reply) => println!("{:?}", reply.texts()),
///     Err(RasaError::Api { status_code, message }) => {
///         tracing::error!("webhook returned {}: {}", status_code, message);
///     }
///     Err(other) => tracing::error!("webhook call failed: {other}"),
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RasaError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    /// The request payload could not be serialized.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// The server answered with a non-success status.
    #[error("Webhook error (HTTP {status_code}): {message}")]
    Api {
        /// HTTP status code (e.g., 400, 404, 500)
        status_code: u16,
        /// Preview of the response body
        message: String,
    },
    /// The server answered 2xx but the body was not a JSON array.
    #[error("Malformed webhook response: {0}")]
    MalformedResponse(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Failed to build the HTTP client.
    ///
    /// This typically only occurs in exceptional circumstances such as
    /// TLS backend initialization failures.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}
