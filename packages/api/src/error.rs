//! Error taxonomy of the resource client.
//!
//! Non-success responses keep their status and raw body so the caller can
//! decide what to show. The booking service reports failures as
//! `{"message": "..."}`; [`ApiError::server_message`] digs that field out.

use serde::Deserialize;
use store::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with {status}")]
    Status { status: u16, body: String },
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `message` field of an error body, when the server sent one.
    pub fn server_message(&self) -> Option<String> {
        let ApiError::Status { body, .. } = self else {
            return None;
        };
        serde_json::from_str::<MessageBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }

    /// Text for a notification: the server's message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(body: &str) -> ApiError {
        ApiError::Status {
            status: 400,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_message_field_is_preferred() {
        let err = status(r#"{"message":"Room already booked for these dates"}"#);
        assert_eq!(
            err.user_message("Please try again."),
            "Room already booked for these dates"
        );
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_fallback_when_body_has_no_message() {
        assert_eq!(status("").user_message("Please try again."), "Please try again.");
        assert_eq!(status("<html>oops</html>").user_message("x"), "x");
        assert_eq!(status(r#"{"error":"Bad Request"}"#).user_message("x"), "x");
        assert_eq!(status(r#"{"message":"  "}"#).user_message("x"), "x");
    }

    #[test]
    fn test_transport_errors_use_fallback() {
        let err = ApiError::Transport("connection refused".to_string());
        assert!(err.server_message().is_none());
        assert!(err.status().is_none());
        assert_eq!(err.user_message("Hotel may have active bookings"), "Hotel may have active bookings");
    }
}
