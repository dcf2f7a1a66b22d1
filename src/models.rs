//! Data exchanged with the feedback service.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single piece of anonymous feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Service-assigned identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Feedback text.
    pub content: String,
    /// Creation timestamp as reported by the service.
    #[serde(rename = "createdAt", alias = "created", default)]
    pub created_at: String,
}

#[cfg(test)]
impl Message {
    pub fn new(id: impl Into<String>, content: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            created_at: created_at.into(),
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} ({})", self.id, self.content, self.created_at)
    }
}

/// Body shared by every dashboard endpoint. Each endpoint fills a subset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiResponse {
    pub message: Option<String>,
    pub is_accepting_messages: Option<bool>,
    pub messages: Option<Vec<Message>>,
}

/// Request body of the preference write.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptMessagesRequest {
    pub accept_messages: bool,
}

/// Body of the session query. An unauthenticated visitor gets `{}` or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub user: Option<SessionUserDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionUserDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
