//! Custom assertion macros and utilities

use axum::http::StatusCode;
use serde_json::Value;

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a result is an error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        assert!($result.is_err(), "Expected Err, got Ok");
    };
    ($result:expr, $pattern:pat) => {
        match $result {
            Err($pattern) => {}
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => panic!("Expected different error variant, got: {:?}", e),
        }
    };
}

/// Check the `{error, status, timestamp}` error body
pub fn assert_error_body(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected, "unexpected status, body: {}", body);
    assert_eq!(body["error"], message, "unexpected error in {}", body);
    assert_eq!(body["status"], expected.as_u16());
    assert!(body["timestamp"].is_string(), "missing timestamp in {}", body);
}

/// Ids of the messages in a feed page
pub fn message_ids(body: &Value) -> Vec<u64> {
    body["messages"]
        .as_array()
        .map(|messages| {
            messages
                .iter()
                .filter_map(|m| m["id"].as_u64())
                .collect()
        })
        .unwrap_or_default()
}
