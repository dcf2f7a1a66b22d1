//! Authenticated-identity context of the current visitor.

pub mod provider;

pub use provider::{resolve_session, spawn_session_provider};

use crate::models::SessionResponse;

/// Identity of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub username: String,
    pub email: Option<String>,
}

impl SessionUser {
    /// Name shown in greetings: the username, or the email when the username is blank.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            self.email.as_deref().unwrap_or_default()
        } else {
            &self.username
        }
    }
}

/// Session as published by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// No authenticated user.
    Absent,
    /// Still resolving.
    #[default]
    Pending,
    Present(SessionUser),
}

impl Session {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Session::Present(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Session::Pending)
    }

    /// Status line for the current session.
    pub fn greeting(&self) -> String {
        match self {
            Session::Present(user) => format!("Welcome, {}", user.display_name()),
            Session::Pending => "Loading session...".to_string(),
            Session::Absent => {
                "Not logged in. Sign in with: true-feedback login --token <TOKEN>".to_string()
            }
        }
    }
}

impl From<SessionResponse> for Session {
    fn from(response: SessionResponse) -> Self {
        let Some(user) = response.user else {
            return Session::Absent;
        };
        let username = user.username.unwrap_or_default();
        if username.is_empty() && user.email.is_none() {
            return Session::Absent;
        }
        Session::Present(SessionUser {
            username,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionUserDto;

    fn response(username: Option<&str>, email: Option<&str>) -> SessionResponse {
        SessionResponse {
            user: Some(SessionUserDto {
                username: username.map(str::to_string),
                email: email.map(str::to_string),
            }),
        }
    }

    #[test]
    fn empty_response_is_absent() {
        assert_eq!(Session::from(SessionResponse::default()), Session::Absent);
        assert_eq!(Session::from(response(None, None)), Session::Absent);
    }

    #[test]
    // The greeting falls back to the email when there is no username.
    fn greeting_prefers_username_over_email() {
        let session = Session::from(response(Some("alice"), Some("a@example.com")));
        assert_eq!(session.greeting(), "Welcome, alice");

        let session = Session::from(response(None, Some("a@example.com")));
        assert_eq!(session.greeting(), "Welcome, a@example.com");
    }

    #[test]
    fn pending_is_unresolved() {
        assert!(!Session::default().is_resolved());
        assert!(Session::Absent.is_resolved());
        assert!(Session::Absent.user().is_none());
    }
}
