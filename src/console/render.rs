//! Plain-text rendering of the dashboard state.

use crate::dashboard::DashboardState;

pub fn render_state(state: &DashboardState) -> String {
    let mut out = render_preference(state);

    if state.messages_loading {
        out.push_str("Refreshing messages...\n");
    }
    if state.messages.is_empty() {
        out.push_str("No messages to display.\n");
    } else {
        out.push_str(&format!("Messages ({}):\n", state.messages.len()));
        for message in &state.messages {
            out.push_str(&format!("  {}\n", message));
        }
    }
    out
}

fn render_preference(state: &DashboardState) -> String {
    let accept = if state.preference_loading {
        "Loading..."
    } else {
        state.accept_label()
    };
    format!("Accept Messages: {}\n", accept)
}

/// Text to print when the published state moves from `previous` to `current`.
///
/// Starting a load prints a one-line marker; settling a load or changing the
/// list prints the whole dashboard.
pub fn render_transition(previous: &DashboardState, current: &DashboardState) -> Option<String> {
    let list_settled = previous.messages_loading && !current.messages_loading;
    let list_changed = previous.messages != current.messages && !current.messages_loading;
    if list_settled || list_changed {
        return Some(render_state(current));
    }

    let mut out = String::new();
    if !previous.messages_loading && current.messages_loading {
        out.push_str("Refreshing messages...\n");
    }
    let preference_settled = previous.preference_loading && !current.preference_loading;
    let preference_changed = previous.accepting_messages != current.accepting_messages
        && !current.preference_loading;
    if !previous.preference_loading && current.preference_loading {
        out.push_str("Accept Messages: Loading...\n");
    } else if preference_settled || preference_changed {
        out.push_str(&render_preference(current));
    }

    (!out.is_empty()).then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;

    fn two_messages() -> Vec<Message> {
        vec![
            Message::new("b", "newer", "t2"),
            Message::new("a", "older", "t1"),
        ]
    }

    #[test]
    fn renders_empty_dashboard() {
        let text = render_state(&DashboardState::default());
        assert_eq!(text, "Accept Messages: Off\nNo messages to display.\n");
    }

    #[test]
    fn renders_messages_in_order() {
        let state = DashboardState {
            messages: two_messages(),
            accepting_messages: Some(true),
            ..Default::default()
        };
        let text = render_state(&state);
        assert_eq!(
            text,
            "Accept Messages: On\nMessages (2):\n  [b] newer (t2)\n  [a] older (t1)\n"
        );
    }

    #[test]
    // The current list stays on screen while a refresh is in flight.
    fn loading_keeps_current_list() {
        let state = DashboardState {
            messages: two_messages(),
            messages_loading: true,
            preference_loading: true,
            ..Default::default()
        };
        assert_eq!(
            render_state(&state),
            "Accept Messages: Loading...\nRefreshing messages...\nMessages (2):\n  [b] newer (t2)\n  [a] older (t1)\n"
        );
    }

    #[test]
    fn transition_marks_load_start_only() {
        let idle = DashboardState {
            messages: two_messages(),
            ..Default::default()
        };
        let loading = DashboardState {
            messages_loading: true,
            ..idle.clone()
        };
        assert_eq!(
            render_transition(&idle, &loading).as_deref(),
            Some("Refreshing messages...\n")
        );
    }

    #[test]
    fn transition_renders_settled_list() {
        let loading = DashboardState {
            messages_loading: true,
            ..Default::default()
        };
        let settled = DashboardState {
            messages: two_messages(),
            ..Default::default()
        };
        let text = render_transition(&loading, &settled).unwrap();
        assert!(text.contains("Messages (2):"));

        // A failed refresh settles with the same list and still re-renders.
        let failed = DashboardState::default();
        assert!(render_transition(&loading, &failed).is_some());
    }

    #[test]
    fn transition_reports_preference_change() {
        let off = DashboardState {
            accepting_messages: Some(false),
            ..Default::default()
        };
        let on = DashboardState {
            accepting_messages: Some(true),
            ..Default::default()
        };
        assert_eq!(
            render_transition(&off, &on).as_deref(),
            Some("Accept Messages: On\n")
        );
        assert_eq!(render_transition(&on, &on), None);
    }

    #[test]
    // Data arriving while the list is still loading waits for the settle.
    fn transition_waits_for_list_to_settle() {
        let loading = DashboardState {
            messages_loading: true,
            ..Default::default()
        };
        let filled = DashboardState {
            messages: two_messages(),
            ..loading.clone()
        };
        assert_eq!(render_transition(&loading, &filled), None);
    }
}
