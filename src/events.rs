//! Notification System
//!
//! User-visible status messages emitted by the dashboard and the sink they travel through.

use crate::consts::cli_consts::notifications::ERROR_TITLE;
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use log::warn;
use std::fmt::Display;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Severity {
    /// Confirmation or neutral information.
    #[strum(to_string = "INFO")]
    Default,
    /// A failed operation.
    #[strum(to_string = "ERROR")]
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub severity: Severity,
    pub timestamp: String,
    pub log_level: LogLevel,
}

impl Notification {
    fn new(
        title: String,
        description: Option<String>,
        severity: Severity,
        log_level: LogLevel,
    ) -> Self {
        Self {
            title,
            description,
            severity,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            log_level,
        }
    }

    pub fn info(title: impl Into<String>, description: Option<String>) -> Self {
        Self::new(title.into(), description, Severity::Default, LogLevel::Info)
    }

    /// An error titled "Error" with the failure text as description.
    pub fn error(description: impl Into<String>, log_level: LogLevel) -> Self {
        Self::new(
            ERROR_TITLE.to_string(),
            Some(description.into()),
            Severity::Destructive,
            log_level,
        )
    }

    /// Failures are always shown. The level of other notifications is
    /// checked against `RUST_LOG`.
    pub fn should_display(&self) -> bool {
        if self.severity == Severity::Destructive || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.severity, self.timestamp, self.title)?;
        if let Some(description) = &self.description {
            write!(f, ": {}", description)?;
        }
        Ok(())
    }
}

/// Fire-and-forget handle for emitting notifications.
#[derive(Clone)]
pub struct NotificationSender {
    sender: mpsc::Sender<Notification>,
}

impl NotificationSender {
    pub fn new(sender: mpsc::Sender<Notification>) -> Self {
        Self { sender }
    }

    /// Queue a notification without waiting. A full or closed queue drops it.
    pub fn notify(&self, notification: Notification) {
        match self.sender.try_send(notification) {
            Ok(()) => {}
            Err(TrySendError::Full(n)) => warn!("Notification queue full, dropping: {}", n),
            Err(TrySendError::Closed(_)) => {}
        }
    }

    pub fn notify_info(&self, title: impl Into<String>, description: Option<String>) {
        self.notify(Notification::info(title, description));
    }

    pub fn notify_error(&self, description: impl Into<String>, log_level: LogLevel) {
        self.notify(Notification::error(description, log_level));
    }
}
