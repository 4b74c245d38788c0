//! API error type
//!
//! Failed responses keep the server's human-readable message so the store
//! can surface it in its `error` field.

use serde_json::Value;
use thiserror::Error;

/// Result alias for [`crate::ContactsApi`] calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Longest plain-text body still treated as a message
const MAX_PLAIN_MESSAGE_LEN: usize = 200;

/// Errors returned by the contacts API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("Request failed with status {status}{}", message_suffix(.msg))]
    Status { status: u16, msg: Option<String> },

    /// The response body did not have the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a raw response body
    pub fn from_response_body(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            msg: extract_message(body),
        }
    }

    /// HTTP status, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The message sent by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { msg, .. } => msg.as_deref(),
            _ => None,
        }
    }

    /// Server message, or `fallback` when the server sent none
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

fn message_suffix(msg: &Option<String>) -> String {
    msg.as_deref().map(|m| format!(": {}", m)).unwrap_or_default()
}

/// Best-effort extraction of a message from an error body
///
/// Looks for `msg`, then `message`, then `errors[0].msg`; a short
/// non-JSON body is taken verbatim.
pub fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return (body.len() <= MAX_PLAIN_MESSAGE_LEN).then(|| body.to_string());
    };

    ["msg", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .or_else(|| {
            value
                .get("errors")?
                .as_array()?
                .first()?
                .get("msg")?
                .as_str()
        })
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_msg_field() {
        assert_eq!(
            extract_message(r#"{"msg": "Invalid Credentials"}"#).as_deref(),
            Some("Invalid Credentials")
        );
    }

    #[test]
    fn test_extract_message_field() {
        assert_eq!(
            extract_message(r#"{"message": "Not authorized"}"#).as_deref(),
            Some("Not authorized")
        );
    }

    #[test]
    fn test_extract_validation_errors() {
        let body = r#"{"errors": [{"msg": "Please include a valid email", "param": "email"}]}"#;
        assert_eq!(
            extract_message(body).as_deref(),
            Some("Please include a valid email")
        );
    }

    #[test]
    fn test_extract_plain_text() {
        assert_eq!(extract_message("Server Error").as_deref(), Some("Server Error"));
        assert_eq!(extract_message("   "), None);
        assert_eq!(extract_message(&"x".repeat(500)), None);
    }

    #[test]
    fn test_extract_json_without_message() {
        assert_eq!(extract_message(r#"{"code": 17}"#), None);
        assert_eq!(extract_message(r#"{"errors": []}"#), None);
    }

    #[test]
    fn test_message_or_fallback() {
        let with_msg = ApiError::from_response_body(400, r#"{"msg": "User already exists"}"#);
        assert_eq!(with_msg.message_or("Registration failed"), "User already exists");
        assert_eq!(with_msg.status(), Some(400));

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.message_or("Registration failed"), "Registration failed");
        assert_eq!(network.status(), None);
    }

    #[test]
    fn test_status_display() {
        let err = ApiError::from_response_body(401, r#"{"msg": "No token, authorization denied"}"#);
        assert_eq!(
            err.to_string(),
            "Request failed with status 401: No token, authorization denied"
        );
        let bare = ApiError::from_response_body(500, "");
        assert_eq!(bare.to_string(), "Request failed with status 500");
    }
}
