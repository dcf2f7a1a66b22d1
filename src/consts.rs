pub mod cli_consts {
    //! Client Configuration Constants
    //!
    //! Endpoints, user-facing fallback texts and sizing for the dashboard client,
    //! organized by functional area.

    /// Product name shown in banners and friendly error headers.
    pub const LOGO_NAME: &str = "True Feedback";

    /// Environment variable selecting the service deployment.
    pub const ENVIRONMENT_VAR: &str = "TRUE_FEEDBACK_ENVIRONMENT";

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// Capacity of the notification channel between the controller and the console.
    pub const NOTIFICATION_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // SERVICE ENDPOINTS
    // =============================================================================

    pub mod endpoints {
        /// Session query exposed by the authentication provider.
        pub const SESSION: &str = "api/auth/session";
        /// Read (GET) and write (POST) the message acceptance preference.
        pub const ACCEPT_MESSAGES: &str = "api/accept-messages";
        /// Read the current user's messages.
        pub const GET_MESSAGES: &str = "api/get-messages";
    }

    /// Cookie carrying the session token on every request.
    pub const DEFAULT_SESSION_COOKIE: &str = "next-auth.session-token";

    /// Connect and request timeout for every service call (seconds).
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;

    // =============================================================================
    // NOTIFICATION TEXTS
    // =============================================================================

    pub mod notifications {
        /// Title of every error notification.
        pub const ERROR_TITLE: &str = "Error";

        pub const FETCH_SETTINGS_FAILED: &str = "Failed to fetch message settings";
        pub const FETCH_MESSAGES_FAILED: &str = "Failed to fetch messages";
        pub const UPDATE_SETTINGS_FAILED: &str = "Failed to update message settings";

        pub const REFRESHED_TITLE: &str = "Refreshed Messages";
        pub const REFRESHED_DESCRIPTION: &str = "Showing latest messages";

        /// Used when a successful preference write carries no message.
        pub const SETTINGS_UPDATED: &str = "Message acceptance status updated";
    }
}
