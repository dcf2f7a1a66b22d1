//! True Feedback Service Client
//!
//! A JSON-over-HTTP client for the dashboard endpoints of the feedback service.

use crate::api::FeedbackApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::{DEFAULT_SESSION_COOKIE, REQUEST_TIMEOUT_SECS, endpoints};
use crate::environment::Environment;
use crate::models::{AcceptMessagesRequest, ApiResponse, Message, SessionResponse};
use log::debug;
use reqwest::header::{ACCEPT, COOKIE, USER_AGENT as USER_AGENT_HEADER};
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("true-feedback-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FeedbackClient {
    client: Client,
    environment: Environment,
    session_token: Option<String>,
    cookie_name: String,
}

impl FeedbackClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            environment,
            session_token: None,
            cookie_name: DEFAULT_SESSION_COOKIE.to_string(),
        })
    }

    /// Attach the session cookie sent with every request.
    pub fn with_session(mut self, token: impl Into<String>, cookie_name: impl Into<String>) -> Self {
        let token = token.into();
        self.session_token = (!token.is_empty()).then_some(token);
        let cookie_name = cookie_name.into();
        if !cookie_name.is_empty() {
            self.cookie_name = cookie_name;
        }
        self
    }

    pub fn has_session(&self) -> bool {
        self.session_token.is_some()
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decorate(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request
            .header(USER_AGENT_HEADER, USER_AGENT)
            .header(ACCEPT, "application/json");
        match &self.session_token {
            Some(token) => request.header(COOKIE, format!("{}={}", self.cookie_name, token)),
            None => request,
        }
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        debug!("GET {}", url);
        let response = self.decorate(self.client.get(&url)).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn post_request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        debug!("POST {}", url);
        let response = self
            .decorate(self.client.post(&url))
            .json(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl FeedbackApi for FeedbackClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_session(&self) -> Result<SessionResponse, ApiError> {
        // The provider answers `null` or `{}` for anonymous visitors.
        let response: Option<SessionResponse> = self.get_request(endpoints::SESSION).await?;
        Ok(response.unwrap_or_default())
    }

    async fn get_accept_messages(&self) -> Result<bool, ApiError> {
        let response: ApiResponse = self.get_request(endpoints::ACCEPT_MESSAGES).await?;
        response
            .is_accepting_messages
            .ok_or(ApiError::MissingField("isAcceptingMessages"))
    }

    async fn set_accept_messages(
        &self,
        accept_messages: bool,
    ) -> Result<Option<String>, ApiError> {
        let request = AcceptMessagesRequest { accept_messages };
        let response: ApiResponse = self
            .post_request(endpoints::ACCEPT_MESSAGES, &request)
            .await?;
        Ok(response.message)
    }

    async fn get_messages(&self) -> Result<Vec<Message>, ApiError> {
        let response: ApiResponse = self.get_request(endpoints::GET_MESSAGES).await?;
        Ok(response.messages.unwrap_or_default())
    }
}
