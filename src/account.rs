//! Signing in and out, and the account-level commands built on the session.

use crate::api::FeedbackApi;
use crate::config::Config;
use crate::pretty::{handle_cmd_error, print_cmd_error, print_cmd_info, print_friendly_error_header};
use crate::session::{Session, resolve_session};
use std::path::Path;

/// Stores a session token after checking that the service accepts it.
///
/// # Arguments
/// * `token` - Session token copied from a signed-in browser.
/// * `cookie_name` - Cookie the token travels in.
/// * `config_path` - Where the session is stored.
/// * `api` - Service client already carrying `token`.
pub async fn login(
    token: &str,
    cookie_name: &str,
    config_path: &Path,
    api: &dyn FeedbackApi,
) -> Result<(), Box<dyn std::error::Error>> {
    if token.trim().is_empty() {
        print_cmd_error!("❌ Empty session token.");
        return Err(Box::from("Session token must not be empty."));
    }

    let session = match api.get_session().await {
        Ok(response) => Session::from(response),
        Err(e) => {
            print_friendly_error_header();
            print_cmd_error!("Failed to verify the session token.", "{}", e);
            return Err(e.into());
        }
    };

    if session.user().is_none() {
        print_cmd_error!("❌ The service did not recognise this session token.");
        return Err(Box::from("Session token was not accepted by the service."));
    }

    let config = Config::new(token.trim().to_string(), cookie_name.to_string());
    config
        .save(config_path)
        .map_err(|e| handle_cmd_error!(e, "Failed to save config."))?;

    print_cmd_info!(
        "✅ Login complete!",
        "{}. Next step - open your dashboard: true-feedback dashboard",
        session.greeting()
    );
    Ok(())
}

/// Forgets the stored session.
pub fn logout(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("Logging out and clearing the stored session...");
    Config::clear_session(config_path)
        .map_err(|e| handle_cmd_error!(e, "Failed to remove config."))?;
    Ok(())
}

/// Resolves the current session; no stored session means an anonymous visitor.
pub async fn current_session(api: Option<&dyn FeedbackApi>) -> Session {
    match api {
        Some(api) => resolve_session(api).await,
        None => Session::Absent,
    }
}

/// Prints the greeting for the current session.
pub async fn status(api: Option<&dyn FeedbackApi>) -> Session {
    let session = current_session(api).await;
    println!("{}", session.greeting());
    session
}

/// Prints the public link anonymous senders use to reach the signed-in user.
pub async fn link(api: Option<&dyn FeedbackApi>) -> Result<String, Box<dyn std::error::Error>> {
    let session = current_session(api).await;
    match (session.user(), api) {
        (Some(user), Some(api)) => {
            let url = api.environment().profile_url(&user.username);
            print_cmd_info!("Your unique link", "{}", url);
            Ok(url)
        }
        _ => {
            println!("{}", session.greeting());
            Err(Box::from("Not logged in."))
        }
    }
}
