//! Console surface of the dashboard: renders state, prints notifications and
//! forwards typed commands to the controller.

pub mod commands;
pub mod headless_mode;
pub mod messages;
pub mod render;

pub use headless_mode::{run_dashboard, run_list_messages, run_toggle};
