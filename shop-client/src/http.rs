//! HTTP client for the storefront backend

use crate::{ClientConfig, ClientError, ClientResult, RequestAuthenticator};
use http::Method;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{LoginRequest, PortalLoginResponse, RegisterRequest, RegisterResponse};
use shared::{Portal, SessionRead};
use std::sync::Arc;

/// Token and display name handed back by an accepted login.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub token: String,
    pub username: Option<String>,
}

/// A backend response relayed as-is by the gateway proxy.
#[derive(Debug)]
pub struct ForwardedResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// HTTP client for making requests to the storefront backend
///
/// Every outgoing request passes through the [`RequestAuthenticator`], so
/// the token choice is always derived from the request path and the session
/// context, never set manually.
#[derive(Debug, Clone)]
pub struct ShopClient {
    client: Client,
    base_url: String,
    authenticator: RequestAuthenticator,
}

impl ShopClient {
    /// Create a new client from configuration and a session context.
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionRead>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            authenticator: RequestAuthenticator::new(session),
        }
    }

    /// The token policy this client applies.
    pub fn authenticator(&self) -> &RequestAuthenticator {
        &self.authenticator
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET a JSON endpoint
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.client.get(self.url(path));
        let request = self.authenticator.apply(path, request);

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// POST a form-encoded body, expecting JSON back
    pub async fn post_form<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        form: &B,
    ) -> ClientResult<T> {
        let request = self.client.post(self.url(path)).form(form);
        let request = self.authenticator.apply(path, request);

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Map error statuses to [`ClientError`], parse the body otherwise
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Portal auth API ==========

    /// Log in against a portal.
    ///
    /// The backend answers HTTP 200 for both verdicts; a `success=false`
    /// body becomes [`ClientError::LoginRejected`] carrying the backend's
    /// reason.
    pub async fn login(
        &self,
        portal: Portal,
        username: &str,
        password: &str,
    ) -> ClientResult<LoginSession> {
        let path = match portal {
            Portal::Seller => "seller/login",
            Portal::Customer => "login",
        };
        let form = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let verdict: PortalLoginResponse = self.post_form(path, &form).await?;
        if !verdict.success {
            return Err(ClientError::LoginRejected(
                verdict.message.unwrap_or_else(|| "login failed".to_string()),
            ));
        }

        let token = verdict.token.ok_or_else(|| {
            ClientError::InvalidResponse("Missing token in login response".to_string())
        })?;

        tracing::debug!(portal = %portal, "portal login accepted");
        Ok(LoginSession {
            token,
            username: verdict.username,
        })
    }

    /// Register a new customer account.
    pub async fn register_customer(&self, form: &RegisterRequest) -> ClientResult<()> {
        let verdict: RegisterResponse = self.post_form("register", form).await?;
        if !verdict.success {
            return Err(ClientError::RegistrationRejected(
                verdict
                    .message
                    .unwrap_or_else(|| "registration failed".to_string()),
            ));
        }
        Ok(())
    }

    // ========== Forwarding ==========

    /// Relay a request to the backend and hand back the raw response.
    ///
    /// Backend statuses pass through untouched, including errors; only a
    /// transport failure becomes a [`ClientError`].
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        content_type: Option<&str>,
        body: Vec<u8>,
    ) -> ClientResult<ForwardedResponse> {
        let mut url = self.url(path);
        if let Some(q) = query {
            url.push('?');
            url.push_str(q);
        }

        let mut request = self.client.request(method.clone(), url);
        if let Some(ct) = content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, ct);
        }
        if !body.is_empty() {
            request = request.body(body);
        }
        let request = self.authenticator.apply(path, request);

        let response = request.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let body = response.bytes().await?.to_vec();

        tracing::debug!(%method, path, status = %status, "forwarded backend request");
        Ok(ForwardedResponse {
            status,
            content_type,
            body,
        })
    }
}
