//! Headless dashboard execution

use super::commands::DashboardCommand;
use super::messages::{
    print_dashboard_exit_success, print_dashboard_help, print_dashboard_shutdown,
    print_dashboard_starting,
};
use super::render::{render_state, render_transition};
use crate::api::FeedbackApi;
use crate::consts::cli_consts::NOTIFICATION_QUEUE_SIZE;
use crate::dashboard::DashboardController;
use crate::events::{Notification, NotificationSender};
use crate::pretty::print_cmd_info;
use crate::session::{Session, SessionUser, spawn_session_provider};
use std::error::Error;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Controller, notification queue and signed-in user of one dashboard run.
struct DashboardSession {
    controller: Arc<DashboardController>,
    notifications: mpsc::Receiver<Notification>,
    user: SessionUser,
    api: Arc<dyn FeedbackApi>,
}

/// Resolves the session and runs the initial sync.
///
/// Returns `None` (after printing the login hint) for an anonymous visitor.
async fn open_dashboard(api: Arc<dyn FeedbackApi>) -> Option<DashboardSession> {
    let (sender, notifications) = mpsc::channel(NOTIFICATION_QUEUE_SIZE);
    let controller = Arc::new(DashboardController::new(
        api.clone(),
        NotificationSender::new(sender),
    ));

    let (mut session, provider) = spawn_session_provider(api.clone());
    let user = controller.sync_when_ready(&mut session).await;
    provider.abort();

    match user {
        Some(user) => Some(DashboardSession {
            controller,
            notifications,
            user,
            api,
        }),
        None => {
            println!("{}", Session::Absent.greeting());
            None
        }
    }
}

fn print_pending_notifications(notifications: &mut mpsc::Receiver<Notification>) {
    while let Ok(notification) = notifications.try_recv() {
        if notification.should_display() {
            println!("{}", notification);
        }
    }
}

/// Fetches and prints the message list once.
pub async fn run_list_messages(api: Arc<dyn FeedbackApi>) -> Result<(), Box<dyn Error>> {
    let Some(mut dashboard) = open_dashboard(api).await else {
        return Err(Box::from("Not logged in."));
    };
    print_pending_notifications(&mut dashboard.notifications);
    print!("{}", render_state(&dashboard.controller.snapshot()));
    Ok(())
}

/// Flips the acceptance preference once and prints the outcome.
pub async fn run_toggle(api: Arc<dyn FeedbackApi>) -> Result<(), Box<dyn Error>> {
    let Some(mut dashboard) = open_dashboard(api).await else {
        return Err(Box::from("Not logged in."));
    };
    // Flipping an unknown value would guess; the initial sync must have read it.
    if dashboard.controller.snapshot().accepting_messages.is_none() {
        print_pending_notifications(&mut dashboard.notifications);
        return Err(Box::from("Current message settings are unknown, not toggling."));
    }
    dashboard.controller.toggle_preference().await;
    print_pending_notifications(&mut dashboard.notifications);
    println!(
        "Accept Messages: {}",
        dashboard.controller.snapshot().accept_label()
    );
    Ok(())
}

/// Runs the interactive dashboard
///
/// This function handles:
/// 1. Session resolution and the initial sync
/// 2. Console notification output
/// 3. Rendering of every published state change
/// 4. Commands read line by line from stdin, run in the background
/// 5. Ctrl+C shutdown
pub async fn run_dashboard(api: Arc<dyn FeedbackApi>) -> Result<(), Box<dyn Error>> {
    let Some(mut dashboard) = open_dashboard(api).await else {
        return Ok(());
    };

    print_dashboard_starting(&Session::Present(dashboard.user.clone()).greeting());
    print_pending_notifications(&mut dashboard.notifications);
    let mut state = dashboard.controller.subscribe();
    let mut rendered = state.borrow_and_update().clone();
    print!("{}", render_state(&rendered));
    print_dashboard_help();

    // Trigger shutdown on Ctrl+C
    let (shutdown_sender, mut shutdown_receiver) = broadcast::channel::<()>(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender.send(());
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            Some(notification) = dashboard.notifications.recv() => {
                if notification.should_display() {
                    println!("{}", notification);
                }
            }
            Ok(()) = state.changed() => {
                let current = state.borrow_and_update().clone();
                if let Some(text) = render_transition(&rendered, &current) {
                    print!("{}", text);
                }
                rendered = current;
            }
            line = lines.next_line() => {
                let Ok(Some(line)) = line else {
                    // stdin closed
                    break;
                };
                match line.parse::<DashboardCommand>() {
                    Ok(DashboardCommand::Quit) => break,
                    Ok(command) => {
                        execute(&dashboard, command);
                    }
                    Err(message) if message.is_empty() => {}
                    Err(message) => println!("{}", message),
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_dashboard_shutdown();
    print_pending_notifications(&mut dashboard.notifications);
    print_dashboard_exit_success();
    Ok(())
}

/// Runs one command. Service calls go to a background task so the loop keeps
/// serving notifications, renders and Ctrl+C; their handle is returned.
fn execute(dashboard: &DashboardSession, command: DashboardCommand) -> Option<JoinHandle<()>> {
    let controller = dashboard.controller.clone();
    match command {
        DashboardCommand::Refresh => Some(tokio::spawn(async move {
            controller.load_messages(true).await;
        })),
        DashboardCommand::Toggle => Some(tokio::spawn(async move {
            controller.toggle_preference().await;
        })),
        DashboardCommand::Delete(id) => {
            if controller.delete_message(&id) {
                println!("Removed message {}", id);
            } else {
                println!("No message with id {}", id);
            }
            None
        }
        DashboardCommand::List => {
            print!("{}", render_state(&controller.snapshot()));
            None
        }
        DashboardCommand::Link => {
            let url = dashboard
                .api
                .environment()
                .profile_url(&dashboard.user.username);
            print_cmd_info!("Your unique link", "{}", url);
            None
        }
        DashboardCommand::Help => {
            print_dashboard_help();
            None
        }
        DashboardCommand::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::environment::Environment;
    use crate::models::{Message, SessionResponse};

    /// Service whose message fetch never answers.
    struct StalledApi {
        environment: Environment,
    }

    #[async_trait::async_trait]
    impl FeedbackApi for StalledApi {
        fn environment(&self) -> &Environment {
            &self.environment
        }

        async fn get_session(&self) -> Result<SessionResponse, ApiError> {
            Ok(SessionResponse::default())
        }

        async fn get_accept_messages(&self) -> Result<bool, ApiError> {
            Ok(true)
        }

        async fn set_accept_messages(&self, _: bool) -> Result<Option<String>, ApiError> {
            Ok(None)
        }

        async fn get_messages(&self) -> Result<Vec<Message>, ApiError> {
            std::future::pending().await
        }
    }

    fn dashboard_session() -> DashboardSession {
        let api: Arc<dyn FeedbackApi> = Arc::new(StalledApi {
            environment: Environment::Local,
        });
        let (sender, notifications) = mpsc::channel(NOTIFICATION_QUEUE_SIZE);
        DashboardSession {
            controller: Arc::new(DashboardController::new(
                api.clone(),
                NotificationSender::new(sender),
            )),
            notifications,
            user: SessionUser {
                username: "alice".to_string(),
                email: None,
            },
            api,
        }
    }

    #[tokio::test]
    // A refresh that never answers leaves the command loop free and the
    // loading flag visible to subscribers.
    async fn refresh_runs_in_background() {
        let dashboard = dashboard_session();
        let mut state = dashboard.controller.subscribe();

        let handle = execute(&dashboard, DashboardCommand::Refresh).expect("refresh spawns");
        state.wait_for(|s| s.messages_loading).await.unwrap();
        assert!(!handle.is_finished());

        handle.abort();
    }

    #[tokio::test]
    async fn local_commands_do_not_spawn() {
        let dashboard = dashboard_session();
        assert!(execute(&dashboard, DashboardCommand::List).is_none());
        assert!(execute(&dashboard, DashboardCommand::Delete("missing".into())).is_none());
        assert!(execute(&dashboard, DashboardCommand::Help).is_none());
    }
}
