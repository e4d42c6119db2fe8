//! Common test utilities shared across all integration test files.
//!
//! Usage in test files:
//! ```ignore
//! mod common;
//! use common::*;
//! ```

use rasa_rest_client::Client;
use wiremock::MockServer;

/// Creates a client pointed at the mock server's REST webhook path.
pub fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .server_url(server.uri())
        .build()
        .expect("mock server URI should be a valid base URL")
}

/// A typical two-message bot reply.
#[allow(dead_code)]
pub fn sample_reply() -> serde_json::Value {
    serde_json::json!([
        {"recipient_id": "user1", "text": "Bạn muốn gọi món gì?"},
        {
            "recipient_id": "user1",
            "text": "Chọn bàn:",
            "buttons": [
                {"title": "Bàn 1", "payload": "/inform{\"table\": \"Bàn 1\"}"},
                {"title": "Mang về", "payload": "/inform{\"table\": \"Mang về\"}"}
            ]
        }
    ])
}
