//! HTTP client wrapper and auth API client.
//!
//! [`ApiClient`] owns the base URL, sends every request with credentials
//! included, and centralizes response interception: the backend-outage flag
//! is flipped here and nowhere else. [`AuthApi`] is four thin wrappers over
//! the auth endpoints with no retry and no transformation beyond unwrapping
//! the response body.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::store::ServerStatusStore;
use crate::types::{ErrorBody, LoginResponse, MessageResponse, User};

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Base URL for the backend API, overridable at build time.
pub fn base_url_from_env() -> String {
    option_env!("API_BASE_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

/// API-layer error. Returned unchanged to callers; UI layers decide
/// presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response, with the server-provided message when one parses.
    Http { status: u16, message: Option<String> },
    /// Request never produced a response.
    Network(String),
    /// 2xx response whose body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Http { status, message } => match message {
                Some(message) => write!(f, "HTTP {}: {}", status, message),
                None => write!(f, "HTTP {}", status),
            },
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "response parse failed: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

fn log_response_error(status: u16, message: Option<&str>) {
    let detail = message.unwrap_or("");
    let line = match status {
        401 => format!("[Api] Authentication error: {}", detail),
        403 => format!("[Api] Permission denied: {}", detail),
        404 => format!("[Api] Resource not found: {}", detail),
        s if s >= 500 => format!("[Api] Server error: {}", detail),
        s => format!("[Api] Request failed with status {}: {}", s, detail),
    };
    web_sys::console::error_1(&line.into());
}

/// HTTP client with a configured base URL and centralized response
/// interception.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    server_status: ServerStatusStore,
}

impl ApiClient {
    pub fn new(server_status: ServerStatusStore) -> Self {
        Self::with_base_url(base_url_from_env(), server_status)
    }

    pub fn with_base_url(base_url: String, server_status: ServerStatusStore) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            server_status,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn builder(builder: RequestBuilder) -> RequestBuilder {
        builder.credentials(RequestCredentials::Include)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let res = Self::builder(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| self.network_error(e))?;
        self.unwrap_response(res).await
    }

    /// POST with a JSON body.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let res = Self::builder(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| self.network_error(e))?;
        self.unwrap_response(res).await
    }

    /// POST with an empty body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let res = Self::builder(Request::post(&self.url(path)))
            .send()
            .await
            .map_err(|e| self.network_error(e))?;
        self.unwrap_response(res).await
    }

    fn network_error(&self, err: gloo_net::Error) -> ApiError {
        // no response: the outage flag is left as-is
        web_sys::console::error_1(&format!("[Api] Request failed: {}", err).into());
        ApiError::Network(err.to_string())
    }

    /// Response interceptor + body unwrapping. Every response that reaches
    /// this point updates the outage flag: 5xx sets it, 2xx clears it,
    /// anything else leaves it alone.
    async fn unwrap_response<T: DeserializeOwned>(&self, res: Response) -> Result<T, ApiError> {
        let status = res.status();
        self.server_status.observe_status(status);

        if !res.ok() {
            let message = res.json::<ErrorBody>().await.ok().and_then(|b| b.message);
            log_response_error(status, message.as_deref());
            return Err(ApiError::Http { status, message });
        }

        res.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Thin request wrappers for the auth endpoints.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignupRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    password: &'a str,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.client
            .post_json("/users/login", &LoginRequest { email, password })
            .await
    }

    pub async fn signup(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.client
            .post_json(
                "/users/register",
                &SignupRequest {
                    first_name,
                    last_name,
                    email,
                    password,
                },
            )
            .await
    }

    pub async fn get_me(&self) -> Result<User, ApiError> {
        self.client.get_json("/me").await
    }

    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.client.post_empty("/me/logout").await
    }
}

pub fn use_auth_api() -> AuthApi {
    leptos::prelude::use_context::<AuthApi>().expect("AuthApi should be provided")
}

// =========================================================
// User-facing status mapping
// =========================================================

/// Message shown when a login attempt fails.
pub fn login_error_message(err: &ApiError) -> &'static str {
    match err.status() {
        Some(401) | Some(403) => "Invalid email or password",
        Some(status) if status >= 500 => "Server error, please try again later",
        _ => "Something went wrong, please try again",
    }
}

/// Message shown when a signup attempt fails.
pub fn signup_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { status: 409, .. } => "This email is already registered.".to_string(),
        ApiError::Http {
            message: Some(message),
            ..
        } => message.clone(),
        _ => "Registration failed. Please try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, message: Option<&str>) -> ApiError {
        ApiError::Http {
            status,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn login_errors_map_by_status() {
        assert_eq!(
            login_error_message(&http(401, None)),
            "Invalid email or password"
        );
        assert_eq!(
            login_error_message(&http(403, None)),
            "Invalid email or password"
        );
        assert_eq!(
            login_error_message(&http(500, None)),
            "Server error, please try again later"
        );
        assert_eq!(
            login_error_message(&http(404, None)),
            "Something went wrong, please try again"
        );
        assert_eq!(
            login_error_message(&ApiError::Network("offline".into())),
            "Something went wrong, please try again"
        );
    }

    #[test]
    fn signup_conflict_maps_to_already_registered() {
        assert_eq!(
            signup_error_message(&http(409, Some("duplicate"))),
            "This email is already registered."
        );
    }

    #[test]
    fn signup_falls_back_to_server_message_then_generic() {
        assert_eq!(
            signup_error_message(&http(400, Some("password too weak"))),
            "password too weak"
        );
        assert_eq!(
            signup_error_message(&http(400, None)),
            "Registration failed. Please try again."
        );
        assert_eq!(
            signup_error_message(&ApiError::Network("offline".into())),
            "Registration failed. Please try again."
        );
    }

    #[test]
    fn display_includes_status_and_message() {
        assert_eq!(http(409, Some("taken")).to_string(), "HTTP 409: taken");
        assert_eq!(http(502, None).to_string(), "HTTP 502");
    }
}
