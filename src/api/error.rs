//! Error handling for the feedback service boundary

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Failed to decode a JSON body from the service
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered with a non-success status.
    #[error("HTTP error with status {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Http {
        status: u16,
        message: Option<String>,
    },

    /// A successful response lacked a field the operation needs.
    #[error("Response is missing field `{0}`")]
    MissingField(&'static str),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ApiError::from_body(status, &body)
    }

    /// Builds an HTTP error, keeping the body's `message` when the body is JSON.
    pub fn from_body(status: u16, body: &str) -> ApiError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Http { status, message }
    }

    /// The user-facing message supplied by the service, if any.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
