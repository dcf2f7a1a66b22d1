//! Dashboard state

use crate::models::Message;

/// Client-side view of the signed-in user's dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Messages in service order, most recent first.
    pub messages: Vec<Message>,
    /// Whether the user accepts new messages. `None` until first known.
    pub accepting_messages: Option<bool>,
    /// A message fetch is in flight.
    pub messages_loading: bool,
    /// A preference fetch is in flight.
    pub preference_loading: bool,
}

impl DashboardState {
    /// Label of the acceptance switch.
    pub fn accept_label(&self) -> &'static str {
        if self.accepting_messages.unwrap_or(false) {
            "On"
        } else {
            "Off"
        }
    }

    /// Removes the first message with `id`. Returns whether one was removed.
    pub(crate) fn remove_message(&mut self, id: &str) -> bool {
        match self.messages.iter().position(|m| m.id == id) {
            Some(index) => {
                self.messages.remove(index);
                true
            }
            None => false,
        }
    }
}
