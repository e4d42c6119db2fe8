use crate::errors::RasaError;
use reqwest::Url;

/// Path of the REST channel webhook on a Rasa server.
pub const REST_WEBHOOK_PATH: &str = "/webhooks/rest/webhook";

/// Webhook URL used when none is configured: a Rasa server on its default port.
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5005/webhooks/rest/webhook";

/// Parses and checks a full webhook URL.
///
/// Only `http` and `https` URLs are accepted.
///
/// # Errors
///
/// Returns [`RasaError::InvalidInput`] if the URL cannot be parsed or uses
/// another scheme.
pub fn parse_webhook_url(url: &str) -> Result<Url, RasaError> {
    let parsed = Url::parse(url)
        .map_err(|e| RasaError::InvalidInput(format!("invalid webhook URL '{url}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(RasaError::InvalidInput(format!(
            "unsupported URL scheme '{other}' in webhook URL '{url}'"
        ))),
    }
}

/// Constructs the REST webhook URL for a server base URL.
///
/// Trailing slashes on the base are ignored. Any path prefix on the base
/// (e.g. a reverse proxy mount point) and any query string are kept.
///
/// # Errors
///
/// Same as [`parse_webhook_url`], plus [`RasaError::InvalidInput`] if the
/// base carries a fragment.
pub fn construct_webhook_url(server_url: &str) -> Result<Url, RasaError> {
    let mut url = parse_webhook_url(server_url)?;

    if url.fragment().is_some() {
        return Err(RasaError::InvalidInput(format!(
            "server URL '{server_url}' must not contain a fragment"
        )));
    }

    let path = format!("{}{REST_WEBHOOK_PATH}", url.path().trim_end_matches('/'));
    url.set_path(&path);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_webhook_url_parses() {
        let url = parse_webhook_url(DEFAULT_WEBHOOK_URL).unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(5005));
        assert_eq!(url.path(), REST_WEBHOOK_PATH);
    }

    #[test]
    fn test_construct_webhook_url() {
        let url = construct_webhook_url("http://rasa:5005").unwrap();
        assert_eq!(url.as_str(), "http://rasa:5005/webhooks/rest/webhook");
    }

    #[test]
    fn test_construct_webhook_url_trailing_slash() {
        let url = construct_webhook_url("https://bots.example.com/").unwrap();
        assert_eq!(url.as_str(), "https://bots.example.com/webhooks/rest/webhook");
    }

    #[test]
    fn test_construct_webhook_url_keeps_prefix() {
        let url = construct_webhook_url("https://example.com/rasa/").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/rasa/webhooks/rest/webhook"
        );
    }

    #[test]
    fn test_construct_webhook_url_keeps_query() {
        let url = construct_webhook_url("http://rasa:5005/?token=abc").unwrap();
        assert_eq!(url.path(), REST_WEBHOOK_PATH);
        assert_eq!(url.query(), Some("token=abc"));
        assert_eq!(
            url.as_str(),
            "http://rasa:5005/webhooks/rest/webhook?token=abc"
        );
    }

    #[test]
    fn test_construct_webhook_url_prefix_and_query() {
        let url = construct_webhook_url("https://example.com/rasa?token=abc").unwrap();
        assert_eq!(url.path(), "/rasa/webhooks/rest/webhook");
        assert_eq!(url.query(), Some("token=abc"));
    }

    #[test]
    fn test_construct_webhook_url_rejects_fragment() {
        let err = construct_webhook_url("http://rasa:5005/#chat").unwrap_err();
        match err {
            RasaError::InvalidInput(msg) => assert!(msg.contains("fragment")),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_webhook_url_rejects_garbage() {
        let err = parse_webhook_url("not a url").unwrap_err();
        assert!(matches!(err, RasaError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_webhook_url_rejects_other_schemes() {
        let err = parse_webhook_url("ftp://localhost:5005/webhooks/rest/webhook").unwrap_err();
        match err {
            RasaError::InvalidInput(msg) => assert!(msg.contains("ftp")),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }
}
