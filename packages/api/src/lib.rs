//! # API crate — REST client for the CampusHire backend
//!
//! Everything the frontend knows about the backend lives here: the data
//! model of an authenticated user, the role parsing boundary, the request
//! payloads, and the HTTP client that performs the calls.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend origin configuration ([`ApiConfig`]) |
//! | [`error`] | [`ApiError`] taxonomy and display-message extraction |
//! | [`models`] | [`UserInfo`], [`UserRole`] + [`normalize_role`], request/response payloads |
//!
//! ## Endpoints
//!
//! | Call | Endpoint |
//! |------|----------|
//! | [`AuthApi::profile`] | `GET /auth/profile` (bearer) |
//! | [`AuthApi::login`] | `POST /auth/login` |
//! | [`AuthApi::register`] | `POST /auth/register` |
//!
//! [`AuthApi`] is a trait so the session core can be exercised against a
//! scripted backend in tests; [`HttpAuthApi`] is the real implementation.

use serde::de::DeserializeOwned;
use serde::Deserialize;

pub mod config;
pub mod error;
pub mod models;

pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    normalize_role, AuthResponse, LoginRequest, RegisterForm, RegisterRequest, RoleProfile,
    UserInfo, UserRole,
};

/// The auth endpoints of the backend.
pub trait AuthApi {
    /// `GET /auth/profile` with a bearer token.
    async fn profile(&self, access_token: &str) -> Result<UserInfo, ApiError>;

    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
}

/// Error body the backend sends alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// [`AuthApi`] over HTTP.
#[derive(Clone, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
    http: reqwest::Client,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    /// Decode a success body, or turn an error status into [`ApiError::Server`]
    /// carrying the backend's `message` field when it sent one.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        tracing::debug!(status = status.as_u16(), ?message, "backend returned an error");
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

impl AuthApi for HttpAuthApi {
    async fn profile(&self, access_token: &str) -> Result<UserInfo, ApiError> {
        let response = self
            .http
            .get(self.url("/auth/profile"))
            .bearer_auth(access_token)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(request)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(request)
            .send()
            .await?;
        Self::read_json(response).await
    }
}
