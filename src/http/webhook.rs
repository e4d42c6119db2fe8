use super::error_helpers::{check_response, deserialize_with_context};
use super::loud_wire;
use crate::errors::RasaError;
use crate::{WebhookMessage, WebhookResponse};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Url};

/// Posts one message to a REST webhook and parses the reply array.
///
/// The payload is serialized once; the same bytes are logged and sent with
/// `Content-Type: application/json`.
///
/// # Errors
///
/// Returns an error if:
/// - The payload cannot be serialized
/// - The HTTP request fails (connection, timeout, body read)
/// - The response status is not successful
/// - The response body is not a JSON array
pub async fn post_message(
    http_client: &ReqwestClient,
    url: &Url,
    message: &WebhookMessage,
) -> Result<WebhookResponse, RasaError> {
    let body = serde_json::to_string(message)?;

    let request_id = loud_wire::next_request_id();
    loud_wire::log_request(request_id, "POST", url.as_str(), Some(&body));

    let response = http_client
        .post(url.clone())
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    loud_wire::log_response_status(request_id, response.status().as_u16());

    let response = check_response(response).await?;
    let response_text = response.text().await?;

    loud_wire::log_response_body(request_id, &response_text);

    deserialize_with_context(&response_text, "webhook reply array")
}
