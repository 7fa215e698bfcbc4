//! Authenticated request client
//!
//! Thin wrapper over `reqwest` that attaches the stored bearer token to
//! every call and normalizes error responses to the backend's
//! `{ "detail": ... }` contract. No retries, no client-side timeout beyond
//! the transport default, and no schema validation on the raw path.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::storage::TokenStore;
use careportal_shared::{
    AuthResponse, ErrorBody, ForgotPasswordRequest, LoginRequest, MeResponse, MessageResponse,
    RegisterRequest, ResetPasswordRequest, Role,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Options for a single request
///
/// Caller-supplied headers win over the default `Content-Type`.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// API client bound to one base URL and one token store
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, tokens: TokenStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_url.clone(),
            tokens,
        }
    }

    /// The token store this client reads credentials from
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Issue a request against `base_url + endpoint`.
    ///
    /// A stored token is attached as `Authorization: Bearer <token>`; its
    /// absence is not an error, some endpoints are public. Non-success
    /// statuses become [`ClientError::Api`] carrying the backend's `detail`
    /// message when the body provides one, else a generic `"API Error"`.
    /// Success bodies are returned as JSON verbatim.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> ClientResult<Value> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        if let Some(token) = self.tokens.read_token() {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                // The stored string was never validated; let the backend
                // reject the unauthenticated request instead of failing here.
                Err(_) => debug!("Stored token is not a valid header value"),
            }
        }

        let url = format!("{}{}", self.base_url, endpoint);
        let mut builder = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = &options.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|body| body.detail)
                .filter(|detail| !detail.is_empty());
            return Err(ClientError::api(status, detail));
        }

        Ok(response.json().await?)
    }

    pub async fn get(&self, endpoint: &str) -> ClientResult<Value> {
        self.request(endpoint, RequestOptions::default()).await
    }

    pub async fn post(&self, endpoint: &str, body: Value) -> ClientResult<Value> {
        self.request(endpoint, RequestOptions::new(Method::POST).body(body))
            .await
    }

    pub async fn put(&self, endpoint: &str, body: Value) -> ClientResult<Value> {
        self.request(endpoint, RequestOptions::new(Method::PUT).body(body))
            .await
    }

    pub async fn delete(&self, endpoint: &str) -> ClientResult<Value> {
        self.request(endpoint, RequestOptions::new(Method::DELETE))
            .await
    }

    async fn post_typed<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ClientResult<R> {
        let value = self.post(endpoint, serde_json::to_value(body)?).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// POST /auth/login
    pub async fn login(&self, req: &LoginRequest) -> ClientResult<AuthResponse> {
        self.post_typed("/auth/login", req).await
    }

    /// POST /auth/register
    pub async fn register(&self, req: &RegisterRequest) -> ClientResult<AuthResponse> {
        self.post_typed("/auth/register", req).await
    }

    /// POST /auth/forgot-password
    pub async fn forgot_password(&self, email: &str) -> ClientResult<MessageResponse> {
        let req = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.post_typed("/auth/forgot-password", &req).await
    }

    /// POST /auth/reset-password
    pub async fn reset_password(&self, req: &ResetPasswordRequest) -> ClientResult<MessageResponse> {
        self.post_typed("/auth/reset-password", req).await
    }

    /// GET /auth/me — the backend's view of the current session's role
    pub async fn current_role(&self) -> ClientResult<Role> {
        let value = self.get("/auth/me").await?;
        let me: MeResponse = serde_json::from_value(value)?;
        Ok(Role::from_claim(&me.user_role))
    }
}
