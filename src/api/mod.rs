use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::models::{Message, SessionResponse};

pub(crate) mod client;
pub use client::FeedbackClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Remote operations the dashboard and the session provider depend on.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait FeedbackApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Query the session bound to the stored session cookie.
    async fn get_session(&self) -> Result<SessionResponse, ApiError>;

    /// Read whether the current user accepts new messages.
    async fn get_accept_messages(&self) -> Result<bool, ApiError>;

    /// Update the acceptance preference. Returns the service's confirmation text.
    async fn set_accept_messages(&self, accept_messages: bool)
    -> Result<Option<String>, ApiError>;

    /// Fetch the current user's messages, most recent first.
    async fn get_messages(&self) -> Result<Vec<Message>, ApiError>;
}
