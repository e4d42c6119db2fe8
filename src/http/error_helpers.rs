//! Error handling utilities for HTTP responses and error context formatting.

use crate::errors::RasaError;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Maximum characters to include from a response body in error messages
const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

/// Checks if an HTTP response is successful, returning it if so or an error otherwise.
///
/// # Errors
///
/// Returns [`RasaError::Api`] with the status code and a body preview on
/// non-success status.
pub async fn check_response(response: Response) -> Result<Response, RasaError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(read_error_with_context(response).await)
    }
}

/// Reads an error response body into a [`RasaError::Api`].
///
/// If the body cannot be read, the message describes the read failure.
pub async fn read_error_with_context(response: Response) -> RasaError {
    let status_code = response.status().as_u16();

    let error_body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("Failed to read error body: {e}"));

    RasaError::Api {
        status_code,
        message: truncate_for_context(&error_body, ERROR_BODY_PREVIEW_LENGTH),
    }
}

/// Deserializes a response body, reporting failures as [`RasaError::MalformedResponse`].
///
/// `context` names what was expected and ends up in the error message.
pub fn deserialize_with_context<T: DeserializeOwned>(
    body: &str,
    context: &str,
) -> Result<T, RasaError> {
    serde_json::from_str(body).map_err(|e| {
        RasaError::MalformedResponse(format!(
            "{context}: {}",
            format_json_parse_error(body, e)
        ))
    })
}

/// Formats JSON parsing context by including a preview of the raw JSON.
pub fn format_json_parse_error(json_str: &str, error: serde_json::Error) -> String {
    let preview = truncate_for_context(json_str, ERROR_BODY_PREVIEW_LENGTH);
    format!("JSON parse error: {error} | Context: {preview}")
}

/// Truncates a string to specified length, adding "..." if truncated.
///
/// Uses character-boundary-aware slicing to prevent panics on multi-byte UTF-8 characters.
pub(crate) fn truncate_for_context(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        // The END of the last kept character must be <= max_len
        let truncate_at = s
            .char_indices()
            .take_while(|(i, c)| i + c.len_utf8() <= max_len)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &s[..truncate_at])
    }
}
