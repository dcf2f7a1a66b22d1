//! Commands typed into the interactive dashboard.

use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardCommand {
    /// Re-fetch the message list on demand.
    Refresh,
    /// Flip the acceptance preference.
    Toggle,
    /// Remove a message from the local list.
    Delete(String),
    /// Print the current state again.
    List,
    /// Print the public profile link.
    Link,
    Help,
    Quit,
}

impl FromStr for DashboardCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default().to_lowercase();
        let argument = parts.next();

        match (command.as_str(), argument) {
            ("r" | "refresh", _) => Ok(Self::Refresh),
            ("t" | "toggle", _) => Ok(Self::Toggle),
            ("d" | "delete", Some(id)) => Ok(Self::Delete(id.to_string())),
            ("d" | "delete", None) => Err("Usage: delete <message-id>".to_string()),
            ("l" | "list", _) => Ok(Self::List),
            ("link", _) => Ok(Self::Link),
            ("h" | "help" | "?", _) => Ok(Self::Help),
            ("q" | "quit" | "exit", _) => Ok(Self::Quit),
            ("", _) => Err(String::new()),
            (other, _) => Err(format!("Unknown command `{}`. Type `help` for a list.", other)),
        }
    }
}
