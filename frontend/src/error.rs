use crate::web::HttpError;
use admindash_shared::protocol::LOGIN_PATH;
use serde::Deserialize;
use thiserror::Error;

pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred";

// =========================================================
// API errors
// =========================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] HttpError),
    /// Non-2xx response. `message` is the server's own message, if it sent one.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

#[derive(Deserialize)]
struct ServerMessage {
    message: String,
}

impl ApiError {
    /// Builds a status error, picking up `{"message": ...}` from the body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ServerMessage>(body)
            .ok()
            .map(|m| m.message)
            .filter(|m| !m.is_empty());
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } => Some(m.as_str()),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        self.server_message().unwrap_or(FALLBACK_MESSAGE).to_string()
    }

    /// GETs are retried on transport failures and 5xx.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

// =========================================================
// Reporting
// =========================================================

/// User-visible failure notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub title: String,
    pub description: String,
}

impl ErrorNotice {
    pub fn from_error(err: &ApiError) -> Self {
        let status = err.status().map(|s| s.to_string()).unwrap_or_default();
        Self {
            title: format!("Error {}", status),
            description: err.user_message(),
        }
    }
}

/// Side effect run once per failed request.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, notice: ErrorNotice);
}

/// The login screen shows its own message for rejected credentials.
pub fn should_report(err: &ApiError, path: &str) -> bool {
    let login = LOGIN_PATH.trim_start_matches('/');
    !(err.status() == Some(401) && path.contains(login))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn server_message_is_preferred() {
        let err = ApiError::from_status(400, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(
            ErrorNotice::from_error(&err),
            ErrorNotice {
                title: "Error 400".to_string(),
                description: "Invalid credentials".to_string(),
            }
        );
    }

    #[test]
    fn fallback_without_message_or_status() {
        let err = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);

        let err = ApiError::Transport(HttpError::Network("offline".to_string()));
        let notice = ErrorNotice::from_error(&err);
        assert_eq!(notice.title, "Error ");
        assert_eq!(notice.description, FALLBACK_MESSAGE);
    }

    #[test]
    fn login_401_is_not_reported() {
        let unauthorized = ApiError::from_status(401, "");
        assert!(!should_report(&unauthorized, "/auth/login"));
        assert!(should_report(&unauthorized, "/users"));
        assert!(should_report(&ApiError::from_status(500, ""), "/auth/login"));
    }

    #[test]
    fn retryable_errors() {
        assert!(ApiError::from_status(503, "").is_retryable());
        assert!(!ApiError::from_status(404, "").is_retryable());
        assert!(ApiError::Transport(HttpError::Timeout(10)).is_retryable());
        assert!(!ApiError::Decode("x".to_string()).is_retryable());
    }
}
