//! Error type and response envelope shared by the gateway and its client

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error carried from handlers out to the HTTP response
///
/// Every failure a handler reports travels as one of these: a stable
/// [`ErrorCode`], a message safe to show the caller, and optional
/// structured context (rejected field, unreachable backend, ...).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// Stable numeric code (see [`ErrorCode`])
    pub code: ErrorCode,
    /// Message safe to surface to the caller
    pub message: String,
    /// Structured context, keyed by field or resource name
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        let message = code.message().to_string();
        Self {
            code,
            message,
            details: None,
        }
    }

    /// Error with a caller-supplied message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach one context entry, creating the map on first use
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_default()
            .insert(key.into(), value.into());
        self
    }

    /// HTTP status this error maps to
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Shorthand constructors ====================

    /// Request failed validation
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Named resource does not exist
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// No login for the portal the operation needs
    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Logged in, but to the wrong portal
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, msg)
    }

    /// Failure inside the gateway itself
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Session store could not be read or written
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }

    /// Request is malformed beyond field validation
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Backend refused the credentials, carrying its reason
    pub fn login_rejected(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::LoginRejected, msg)
    }

    /// Backend could not be reached at all
    pub fn backend_unreachable(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::BackendUnreachable, msg)
    }
}

/// Response envelope for gateway-owned JSON endpoints
///
/// `/session` and the error bodies of every failed request share this
/// shape, so clients parse one format:
/// - `code`: 0 on success, otherwise an [`ErrorCode`] value
/// - `message`: human-readable outcome
/// - `data`: payload, present on success only
/// - `details`: error context, present on failure only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 0 on success, otherwise the error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable outcome
    pub message: String,
    /// Payload, success only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error context, failure only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope around `data`
    pub fn success(data: T) -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }

    /// Failed envelope mirroring `err`, with no payload
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

/// Result alias used throughout the gateway handlers
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum responses =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use super::category::ErrorCategory;
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::<()>::error(&self);

        // System errors are ours, upstream errors are the backend's
        let category = self.code.category();
        match category {
            ErrorCategory::System => {
                tracing::error!(
                    code = %self.code,
                    category = category.name(),
                    message = %self.message,
                    "System error occurred"
                );
            }
            ErrorCategory::Upstream => {
                tracing::warn!(
                    code = %self.code,
                    category = category.name(),
                    message = %self.message,
                    "Upstream failure"
                );
            }
            _ => {}
        }

        (status, Json(body)).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = match self.code {
            None | Some(0) => StatusCode::OK,
            Some(code) => ErrorCode::try_from(code)
                .map(|c| c.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        };

        (status, Json(self)).into_response()
    }
}
