//! Session lifecycle messages for the console

// ANSI Color Codes for console messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone)]
pub enum ConsoleMessage {
    Info(String),
    Success(String),
}

impl ConsoleMessage {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn print(&self) {
        match self {
            Self::Info(msg) => println!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg),
            Self::Success(msg) => println!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg),
        }
    }
}

pub fn print_dashboard_starting(greeting: &str) {
    ConsoleMessage::info(format!("{}. Loading your dashboard...", greeting)).print();
}

pub fn print_dashboard_help() {
    ConsoleMessage::info(
        "Commands: refresh (r), toggle (t), delete <id> (d), list (l), link, help (h), quit (q)",
    )
    .print();
}

pub fn print_dashboard_shutdown() {
    ConsoleMessage::info("Closing dashboard...").print();
}

pub fn print_dashboard_exit_success() {
    ConsoleMessage::success("True Feedback dashboard exited successfully").print();
}
