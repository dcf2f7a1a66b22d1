//! Dashboard sync controller
//!
//! Every operation settles on its own: failures leave the previous state in
//! place and surface as notifications, loading flags are cleared once the last
//! request of their kind settles, and responses overtaken by a newer request
//! are dropped.

use super::state::DashboardState;
use super::tracker::{RequestTracker, Ticket};
use crate::api::FeedbackApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::notifications::{
    FETCH_MESSAGES_FAILED, FETCH_SETTINGS_FAILED, REFRESHED_DESCRIPTION, REFRESHED_TITLE,
    SETTINGS_UPDATED, UPDATE_SETTINGS_FAILED,
};
use crate::error_classifier::ErrorClassifier;
use crate::events::NotificationSender;
use crate::session::{Session, SessionUser};
use log::{debug, warn};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;

pub struct DashboardController {
    api: Arc<dyn FeedbackApi>,
    notifier: NotificationSender,
    classifier: ErrorClassifier,
    state: watch::Sender<DashboardState>,
    messages_requests: RequestTracker,
    preference_requests: RequestTracker,
    /// Identity the initial sync last ran for.
    synced_user: Mutex<Option<String>>,
}

impl DashboardController {
    pub fn new(api: Arc<dyn FeedbackApi>, notifier: NotificationSender) -> Self {
        let (state, _) = watch::channel(DashboardState::default());
        Self {
            api,
            notifier,
            classifier: ErrorClassifier::new(),
            state,
            messages_requests: RequestTracker::new(),
            preference_requests: RequestTracker::new(),
            synced_user: Mutex::new(None),
        }
    }

    /// Observe every state transition.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Reads the acceptance preference from the service.
    pub async fn load_preference(&self) {
        let ticket = self.begin(&self.preference_requests, |s| s.preference_loading = true);

        match self.api.get_accept_messages().await {
            Ok(accepting) => {
                let applied = self.apply(&self.preference_requests, ticket, |s| {
                    s.accepting_messages = Some(accepting)
                });
                if !applied {
                    debug!("Discarding stale preference response (ticket {})", ticket);
                }
            }
            Err(e) => self.report_failure(&e, FETCH_SETTINGS_FAILED),
        }

        self.settle(&self.preference_requests, |s, loading| {
            s.preference_loading = loading
        });
    }

    /// Replaces the message list with the service's current one.
    ///
    /// `is_user_initiated_refresh` adds a confirmation notification on success.
    pub async fn load_messages(&self, is_user_initiated_refresh: bool) {
        let ticket = self.begin(&self.messages_requests, |s| s.messages_loading = true);

        match self.api.get_messages().await {
            Ok(messages) => {
                let applied =
                    self.apply(&self.messages_requests, ticket, |s| s.messages = messages);
                if !applied {
                    debug!("Discarding stale message list (ticket {})", ticket);
                } else if is_user_initiated_refresh {
                    self.notifier.notify_info(
                        REFRESHED_TITLE,
                        Some(REFRESHED_DESCRIPTION.to_string()),
                    );
                }
            }
            Err(e) => self.report_failure(&e, FETCH_MESSAGES_FAILED),
        }

        self.settle(&self.messages_requests, |s, loading| {
            s.messages_loading = loading
        });
    }

    /// Flips the acceptance preference. The local value changes only once the
    /// service confirms the write.
    pub async fn toggle_preference(&self) {
        let desired = !self.state.borrow().accepting_messages.unwrap_or(false);

        match self.api.set_accept_messages(desired).await {
            Ok(confirmation) => {
                self.state.send_modify(|s| {
                    // Reads issued before the write would restore the old value.
                    self.preference_requests.invalidate();
                    s.accepting_messages = Some(desired);
                });
                let title = confirmation
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| SETTINGS_UPDATED.to_string());
                self.notifier.notify_info(title, None);
            }
            Err(e) => self.report_failure(&e, UPDATE_SETTINGS_FAILED),
        }
    }

    /// Drops a message from the local list only; the service is not contacted.
    ///
    /// Returns whether a message with `id` was present.
    pub fn delete_message(&self, id: &str) -> bool {
        self.state.send_if_modified(|s| s.remove_message(id))
    }

    /// Runs the initial sync the first time a given user is seen.
    ///
    /// Nothing happens while the session is pending or absent; an absent
    /// session re-arms the sync for the next sign-in. Returns whether a sync ran.
    pub async fn on_session(&self, session: &Session) -> bool {
        let identity = match session {
            Session::Present(user) => user.display_name().to_string(),
            Session::Absent => {
                *self.lock_synced_user() = None;
                return false;
            }
            Session::Pending => return false,
        };

        {
            let mut synced = self.lock_synced_user();
            if synced.as_deref() == Some(identity.as_str()) {
                return false;
            }
            *synced = Some(identity);
        }

        futures::join!(self.load_messages(false), self.load_preference());
        true
    }

    /// Waits for the session to resolve, then runs the initial sync.
    ///
    /// Returns the signed-in user, or `None` for an anonymous visitor or a
    /// provider that went away before resolving.
    pub async fn sync_when_ready(
        &self,
        session: &mut watch::Receiver<Session>,
    ) -> Option<SessionUser> {
        let resolved = match session.wait_for(Session::is_resolved).await {
            Ok(current) => current.clone(),
            Err(_) => {
                warn!("Session provider closed before resolving");
                return None;
            }
        };
        self.on_session(&resolved).await;
        resolved.user().cloned()
    }

    fn lock_synced_user(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.synced_user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, tracker: &RequestTracker, mark: impl FnOnce(&mut DashboardState)) -> Ticket {
        let mut ticket = 0;
        self.state.send_modify(|s| {
            ticket = tracker.begin();
            mark(s);
        });
        ticket
    }

    fn apply(
        &self,
        tracker: &RequestTracker,
        ticket: Ticket,
        write: impl FnOnce(&mut DashboardState),
    ) -> bool {
        self.state.send_if_modified(|s| {
            if !tracker.is_current(ticket) {
                return false;
            }
            write(s);
            true
        })
    }

    fn settle(&self, tracker: &RequestTracker, mark: impl FnOnce(&mut DashboardState, bool)) {
        self.state.send_modify(|s| {
            let still_loading = tracker.finish();
            mark(s, still_loading);
        });
    }

    fn report_failure(&self, error: &ApiError, fallback: &str) {
        let level = self.classifier.classify_api_error(error);
        log::log!(log::Level::from(level), "{}: {}", fallback, error);
        self.notifier
            .notify_error(error.service_message().unwrap_or(fallback), level);
    }
}
