use rasa_rest_client::{Client, DEFAULT_SENDER, DEFAULT_WEBHOOK_URL, RasaError};
use std::time::Duration;

#[test]
fn test_client_defaults() {
    let client = Client::new().unwrap();
    assert_eq!(
        client.webhook_url().as_str(),
        "http://localhost:5005/webhooks/rest/webhook"
    );
    assert_eq!(client.webhook_url().as_str(), DEFAULT_WEBHOOK_URL);
    assert_eq!(client.default_sender(), DEFAULT_SENDER);
    assert_eq!(DEFAULT_SENDER, "user1");
}

#[test]
fn test_client_builder_all_options() {
    let client = Client::builder()
        .server_url("https://bot.example.com:8443/")
        .default_sender("web-widget")
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    assert_eq!(
        client.webhook_url().as_str(),
        "https://bot.example.com:8443/webhooks/rest/webhook"
    );
    assert_eq!(client.default_sender(), "web-widget");
}

#[test]
fn test_client_with_url_rejects_unsupported_scheme() {
    let err = Client::with_url("ws://localhost:5005/webhooks/rest/webhook").unwrap_err();
    match err {
        RasaError::InvalidInput(msg) => assert!(msg.contains("ws")),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_client_server_url_rejects_garbage() {
    let err = Client::builder().server_url("::::").build().unwrap_err();
    assert!(matches!(err, RasaError::InvalidInput(_)), "got {err:?}");
}

#[test]
fn test_error_display() {
    let err = RasaError::InvalidInput("bad url".to_string());
    assert_eq!(err.to_string(), "Invalid input: bad url");

    let err = RasaError::ClientBuild("tls".to_string());
    assert_eq!(err.to_string(), "Failed to build HTTP client: tls");
}
