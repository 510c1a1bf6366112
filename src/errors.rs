//! Failure taxonomy for the API layer. Every HTTP failure is normalized
//! into one `ApiError` before it reaches calling code; services turn it
//! into a user-facing notification, never a raw stack trace.

use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::validation::FieldIssue;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request was aborted before a response arrived.
    #[error("request timed out")]
    Timeout,

    /// No response was received at all.
    #[error("network error: {0}")]
    Network(String),

    #[error("authentication failed (HTTP {0})")]
    Auth(u16),

    /// HTTP 422 with a parseable detail array, or a payload rejected
    /// locally before submission.
    #[error("validation failed ({} issue(s))", .0.len())]
    Validation(Vec<FieldIssue>),

    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// The response decoded as neither the expected body nor a known
    /// error shape.
    #[error("unexpected response: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Classify a transport-level failure: timeouts are a distinct error
    /// class from never having reached the server.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err.to_string())
        }
    }

    /// Classify a non-2xx response from its status code and raw body.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth(status.as_u16()),
            StatusCode::UNPROCESSABLE_ENTITY => match parse_validation_body(body) {
                Some(issues) => ApiError::Validation(issues),
                // Unparseable validation body degrades to a server error.
                None => ApiError::Server {
                    status: status.as_u16(),
                    message: extract_message(body, status),
                },
            },
            _ => ApiError::Server {
                status: status.as_u16(),
                message: extract_message(body, status),
            },
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    /// Field path → messages, for attaching errors next to form inputs.
    /// Empty for non-validation failures.
    pub fn field_errors(&self) -> BTreeMap<String, Vec<String>> {
        let mut map = BTreeMap::new();
        if let ApiError::Validation(issues) = self {
            for issue in issues {
                map.entry(issue.path.clone())
                    .or_insert_with(Vec::new)
                    .push(issue.message.clone());
            }
        }
        map
    }

    /// A flat, human-readable summary suitable for a notification toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Timeout => "The request timed out".into(),
            ApiError::Network(_) => "Could not reach the server".into(),
            ApiError::Auth(_) => "You are not authorized to perform this action".into(),
            ApiError::Validation(issues) => issues
                .iter()
                .map(|issue| format!("{}: {}", field_label(&issue.path), issue.message))
                .collect::<Vec<_>>()
                .join(", "),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Unexpected(_) => "Unexpected response from the server".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation body (HTTP 422)
// ---------------------------------------------------------------------------

/// One entry of the backend's validation detail array. `loc[0]` is a fixed
/// prefix ("body"); the remaining segments form the field path.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationErrorDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<LocSegment>,
    pub msg: String,
    #[serde(default)]
    pub input: Option<serde_json::Value>,
}

/// Path segments arrive as strings for object keys and integers for array
/// indices.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LocSegment {
    Key(String),
    Index(u64),
}

impl fmt::Display for LocSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocSegment::Key(key) => write!(f, "{key}"),
            LocSegment::Index(idx) => write!(f, "{idx}"),
        }
    }
}

impl ValidationErrorDetail {
    fn into_issue(self) -> FieldIssue {
        let path = self
            .loc
            .iter()
            .skip(1)
            .map(|segment| segment.to_string())
            .collect::<Vec<_>>()
            .join(".");
        FieldIssue::new(path, self.msg)
    }
}

/// The backend emits the detail array either bare or wrapped in
/// `{"detail": [...]}`; accept both.
fn parse_validation_body(body: &str) -> Option<Vec<FieldIssue>> {
    #[derive(Deserialize)]
    struct Wrapped {
        detail: Vec<ValidationErrorDetail>,
    }

    let details = serde_json::from_str::<Vec<ValidationErrorDetail>>(body)
        .ok()
        .or_else(|| serde_json::from_str::<Wrapped>(body).ok().map(|w| w.detail))?;

    Some(details.into_iter().map(ValidationErrorDetail::into_issue).collect())
}

/// Pull a message out of a JSON error body, falling back to the raw body
/// or the status line.
fn extract_message(body: &str, status: StatusCode) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(alias = "message", alias = "error")]
        detail: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.detail {
            return message;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

/// Turn a camelCase field path into a title-cased label for display:
/// `limitPrice` → `Limit Price`.
fn field_label(path: &str) -> String {
    let mut label = String::with_capacity(path.len() + 4);
    for (i, ch) in path.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else {
            if ch.is_ascii_uppercase() {
                label.push(' ');
            }
            label.push(ch);
        }
    }
    label
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses_map_to_auth() {
        assert!(matches!(
            ApiError::from_response(StatusCode::UNAUTHORIZED, ""),
            ApiError::Auth(401)
        ));
        assert!(matches!(
            ApiError::from_response(StatusCode::FORBIDDEN, ""),
            ApiError::Auth(403)
        ));
    }

    #[test]
    fn test_5xx_maps_to_server() {
        let err = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "");
        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("expected Server, got {other:?}"),
        }
    }

    #[test]
    fn test_unclassified_4xx_falls_back_to_server() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, r#"{"detail": "Trade not found"}"#);
        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Trade not found");
            }
            other => panic!("expected Server, got {other:?}"),
        }
    }

    #[test]
    fn test_422_detail_array_maps_to_validation() {
        let body = r#"[
            {"type": "missing", "loc": ["body", "symbol"], "msg": "Field required"},
            {"type": "greater_than", "loc": ["body", "scalePlans", 0, "qty"], "msg": "Input should be greater than 0", "input": {"qty": 0}}
        ]"#;
        let err = ApiError::from_response(StatusCode::UNPROCESSABLE_ENTITY, body);
        let fields = err.field_errors();
        assert_eq!(fields["symbol"], vec!["Field required"]);
        assert_eq!(fields["scalePlans.0.qty"], vec!["Input should be greater than 0"]);
    }

    #[test]
    fn test_422_wrapped_detail_maps_to_validation() {
        let body = r#"{"detail": [{"type": "missing", "loc": ["body", "setup"], "msg": "Field required"}]}"#;
        let err = ApiError::from_response(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert!(err.is_validation());
    }

    #[test]
    fn test_422_garbage_body_degrades_to_server() {
        let err = ApiError::from_response(StatusCode::UNPROCESSABLE_ENTITY, "<html>oops</html>");
        assert!(matches!(err, ApiError::Server { status: 422, .. }));
    }

    #[test]
    fn test_user_message_title_cases_field_paths() {
        let err = ApiError::Validation(vec![FieldIssue::new("limitPrice", "Must exceed stop")]);
        assert_eq!(err.user_message(), "Limit Price: Must exceed stop");
    }
}
