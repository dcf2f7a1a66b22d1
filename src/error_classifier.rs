use crate::api::error::ApiError;
use crate::logging::LogLevel;

/// Decides how loudly a failed service call should be reported.
#[derive(Debug, Clone, Default)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_api_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Non-critical: throttled by the service
            ApiError::Http { status: 429, .. } => LogLevel::Debug,
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: session expired or rejected, malformed responses
            ApiError::Http { status: 401 | 403, .. } => LogLevel::Error,
            ApiError::Decode(_) | ApiError::MissingField(_) => LogLevel::Error,

            // Network issues and remaining client errors
            _ => LogLevel::Warn,
        }
    }
}
