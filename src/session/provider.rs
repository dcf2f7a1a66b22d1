//! Session resolution against the service's session query

use super::Session;
use crate::api::FeedbackApi;
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Queries the service once and maps the answer to a resolved session.
///
/// A failed query resolves to [`Session::Absent`]: the dashboard treats an
/// unknown identity the same as an anonymous visitor.
pub async fn resolve_session(api: &dyn FeedbackApi) -> Session {
    match api.get_session().await {
        Ok(response) => {
            let session = Session::from(response);
            debug!("Session resolved: {:?}", session);
            session
        }
        Err(e) => {
            warn!("Failed to resolve session: {}", e);
            Session::Absent
        }
    }
}

/// Publishes [`Session::Pending`] immediately and the resolved session once known.
pub fn spawn_session_provider(
    api: Arc<dyn FeedbackApi>,
) -> (watch::Receiver<Session>, JoinHandle<()>) {
    let (sender, receiver) = watch::channel(Session::Pending);
    let handle = tokio::spawn(async move {
        let session = resolve_session(api.as_ref()).await;
        let _ = sender.send(session);
        // Keep the channel open so receivers see a stable value instead of a closed sender.
        sender.closed().await;
    });
    (receiver, handle)
}
