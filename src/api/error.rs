//! Error normalization for backend responses.
//!
//! The backend reports failures under several keys depending on where the
//! failure happened (schema validation, business rule, framework). All of
//! them are folded into one [`ApiError`] here so callers only branch on its
//! kind.

use serde_json::Value;
use thiserror::Error;

/// Body keys checked for an error message, most specific first.
pub const ERROR_FIELDS: [&str; 4] = ["errors", "error", "message", "detail"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Rejected,
    Network,
    InvalidResponse,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered but refused the request.
    #[error("{message}")]
    Rejected { message: String, status: u16 },
    /// The request never got an answer.
    #[error("{0}")]
    Network(String),
    /// The backend claimed success but the body could not be decoded.
    #[error("{0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Rejected { .. } => ApiErrorKind::Rejected,
            ApiError::Network(_) => ApiErrorKind::Network,
            ApiError::InvalidResponse(_) => ApiErrorKind::InvalidResponse,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Rejected { message, .. } => message,
            ApiError::Network(message) | ApiError::InvalidResponse(message) => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull the most specific error message out of a response body.
pub fn extract_error_message(body: &Value) -> Option<String> {
    ERROR_FIELDS
        .iter()
        .find_map(|field| body.get(field).and_then(flatten_messages))
}

/// Flatten a string, list, or nested field map into one line.
///
/// Nested maps produce `field: message` fragments, e.g.
/// `{"members": {"0": {"email": ["Not a valid email address."]}}}` becomes
/// `members.0.email: Not a valid email address.`
fn flatten_messages(value: &Value) -> Option<String> {
    let mut parts = Vec::new();
    collect_messages(value, None, &mut parts);

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

fn collect_messages(value: &Value, path: Option<&str>, out: &mut Vec<String>) {
    match value {
        Value::String(text) if !text.trim().is_empty() => {
            out.push(match path {
                Some(path) => format!("{}: {}", path, text),
                None => text.clone(),
            });
        }
        Value::Array(items) => {
            for item in items {
                collect_messages(item, path, out);
            }
        }
        Value::Object(fields) => {
            for (key, child) in fields {
                let child_path = match path {
                    Some(path) => format!("{}.{}", path, key),
                    None => key.clone(),
                };
                collect_messages(child, Some(&child_path), out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_field_wins_over_message() {
        let body = json!({"success": false, "error": "Invalid credentials", "message": "ignored"});
        assert_eq!(extract_error_message(&body).as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_errors_field_has_priority() {
        let body = json!({
            "success": false,
            "error": "generic",
            "errors": {"password": ["Password must contain a number."]}
        });
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("password: Password must contain a number.")
        );
    }

    #[test]
    fn test_nested_validation_errors_are_flattened() {
        let body = json!({
            "errors": {
                "members": {"0": {"email": ["Not a valid email address."]}},
                "team_name": ["Missing data for required field."]
            }
        });
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("members.0.email: Not a valid email address.; team_name: Missing data for required field.")
        );
    }

    #[test]
    fn test_falls_through_empty_and_null_fields() {
        let body = json!({"errors": {}, "error": null, "message": "  ", "detail": "Not Found"});
        assert_eq!(extract_error_message(&body).as_deref(), Some("Not Found"));
    }

    #[test]
    fn test_no_message_available() {
        assert_eq!(extract_error_message(&json!({"success": false})), None);
        assert_eq!(extract_error_message(&json!("plain string body")), None);
    }

    #[test]
    fn test_error_accessors() {
        let rejected = ApiError::Rejected { message: "User already exists".to_string(), status: 400 };
        assert_eq!(rejected.kind(), ApiErrorKind::Rejected);
        assert_eq!(rejected.message(), "User already exists");
        assert_eq!(rejected.status(), Some(400));
        assert_eq!(rejected.to_string(), "User already exists");

        let network = ApiError::Network("Login failed: connection refused".to_string());
        assert_eq!(network.kind(), ApiErrorKind::Network);
        assert_eq!(network.status(), None);
    }
}
