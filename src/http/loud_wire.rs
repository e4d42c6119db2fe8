//! Wire-level debugging via LOUD_WIRE environment variable.
//!
//! When `LOUD_WIRE` is set to any value, prints the raw JSON of webhook
//! requests and responses to stderr with pretty formatting and colors.
//!
//! # Usage
//!
//! ```bash
//! LOUD_WIRE=1 cargo test --test webhook_tests
//! ```
//!
//! # Output Format
//!
//! - Green `>>>` for outgoing requests
//! - Red `<<<` for incoming responses
//! - Timestamps and request IDs for correlation
//!
//! Very long string values (e.g. inline images in custom payloads) are
//! truncated to keep output readable.

use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Request ID counter for correlating requests with responses
static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(1);

static ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if LOUD_WIRE debugging is enabled.
///
/// The result is cached after the first check, so `LOUD_WIRE` must be set
/// before the first webhook call is made.
#[must_use]
pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("LOUD_WIRE").is_ok())
}

/// Get the next request ID for correlation.
#[must_use]
pub fn next_request_id() -> usize {
    REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// String values longer than this many characters are truncated.
const TRUNCATE_THRESHOLD: usize = 300;

/// Non-JSON bodies are cut to this many bytes.
const RAW_BODY_LIMIT: usize = 1000;

fn truncate_long_strings(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::String(s) => {
            if let Some((idx, _)) = s.char_indices().nth(TRUNCATE_THRESHOLD) {
                s.truncate(idx);
                s.push_str("...");
            }
        }
        serde_json::Value::Object(map) => map.values_mut().for_each(truncate_long_strings),
        serde_json::Value::Array(arr) => arr.iter_mut().for_each(truncate_long_strings),
        _ => {}
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Log prefix with timestamp and request ID.
fn prefix(request_id: usize) -> String {
    format!(
        "{} {} {}",
        "[LOUD_WIRE]".bold(),
        timestamp().dimmed(),
        format!("[REQ#{request_id}]").cyan()
    )
}

/// Prints a labelled body, pretty and colored when it is JSON.
fn print_body(prefix: &str, label: &str, body: &str) {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(mut parsed) => {
            truncate_long_strings(&mut parsed);
            eprintln!("{prefix} {label}:");
            let rendered = colored_json::to_colored_json_auto(&parsed)
                .ok()
                .or_else(|| serde_json::to_string_pretty(&parsed).ok());
            if let Some(rendered) = rendered {
                for line in rendered.lines() {
                    eprintln!("{prefix} {line}");
                }
            }
        }
        Err(_) => {
            let shown = super::error_helpers::truncate_for_context(body, RAW_BODY_LIMIT);
            eprintln!("{prefix} {label}: {shown}");
        }
    }
}

/// Log an outgoing HTTP request.
pub fn log_request(request_id: usize, method: &str, url: &str, body: Option<&str>) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);
    eprintln!("{prefix} {} {method} {url}", ">>>".green().bold());

    if let Some(body) = body {
        print_body(&prefix, &"Body".green().to_string(), body);
    }
}

/// Log an incoming HTTP response status.
pub fn log_response_status(request_id: usize, status: u16) {
    if !is_enabled() {
        return;
    }

    let status_text = if status < 300 {
        format!("{status} OK").green()
    } else {
        format!("{status} ERROR").red()
    };

    eprintln!("{} {} {status_text}", prefix(request_id), "<<<".red().bold());
}

/// Log an incoming HTTP response body.
pub fn log_response_body(request_id: usize, body: &str) {
    if !is_enabled() {
        return;
    }

    print_body(&prefix(request_id), &"Response".red().to_string(), body);
}
