mod account;
mod api;
mod config;
mod console;
mod consts;
mod dashboard;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod pretty;
mod session;

use crate::api::{FeedbackApi, FeedbackClient};
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::{DEFAULT_SESSION_COOKIE, ENVIRONMENT_VAR};
use crate::environment::Environment;
use clap::{Parser, Subcommand};
use log::debug;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line dashboard for True Feedback
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store a session token copied from a signed-in browser
    Login {
        /// Value of the session cookie
        #[arg(long, value_name = "TOKEN")]
        token: String,

        /// Name of the session cookie
        #[arg(long, value_name = "NAME", default_value = DEFAULT_SESSION_COOKIE)]
        cookie_name: String,
    },
    /// Forget the stored session
    Logout,
    /// Show who is signed in
    Status,
    /// Print your public feedback link
    Link,
    /// Fetch and print your messages
    Messages,
    /// Flip whether you accept new messages
    Toggle,
    /// Open the interactive dashboard
    Dashboard,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let environment_str = std::env::var(ENVIRONMENT_VAR).unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());
    debug!("Using {:?}", environment);

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Login { token, cookie_name } => {
            let client = FeedbackClient::new(environment)?.with_session(&token, &cookie_name);
            account::login(&token, &cookie_name, &config_path, &client).await
        }
        Command::Logout => account::logout(&config_path),
        Command::Status => {
            let client = stored_session_client(&config_path, environment)?;
            account::status(client.as_deref()).await;
            Ok(())
        }
        Command::Link => {
            let client = stored_session_client(&config_path, environment)?;
            account::link(client.as_deref()).await.map(|_| ())
        }
        Command::Messages => {
            console::run_list_messages(require_session(&config_path, environment)?).await
        }
        Command::Toggle => console::run_toggle(require_session(&config_path, environment)?).await,
        Command::Dashboard => {
            console::run_dashboard(require_session(&config_path, environment)?).await
        }
    }
}

/// Client carrying the stored session, or `None` when nobody is logged in.
fn stored_session_client(
    config_path: &Path,
    environment: Environment,
) -> Result<Option<Arc<dyn FeedbackApi>>, Box<dyn Error>> {
    if !config_path.exists() {
        return Ok(None);
    }
    let config = match Config::load_from_file(config_path) {
        Ok(config) => config,
        Err(e) => {
            debug!("Ignoring unreadable config: {}", e);
            return Ok(None);
        }
    };
    let client =
        FeedbackClient::new(environment)?.with_session(config.session_token, config.cookie_name);
    if !client.has_session() {
        return Ok(None);
    }
    Ok(Some(Arc::new(client)))
}

fn require_session(
    config_path: &Path,
    environment: Environment,
) -> Result<Arc<dyn FeedbackApi>, Box<dyn Error>> {
    stored_session_client(config_path, environment)?.ok_or_else(|| {
        println!("{}", session::Session::Absent.greeting());
        Box::from("Not logged in.")
    })
}
