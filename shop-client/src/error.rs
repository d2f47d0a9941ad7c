//! Failures talking to the storefront backend

use thiserror::Error;

/// Anything that can go wrong calling the backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body did not parse as the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Backend rejected the login (success=false with HTTP 200)
    #[error("Login rejected: {0}")]
    LoginRejected(String),

    /// Backend rejected the registration
    #[error("Registration rejected: {0}")]
    RegistrationRejected(String),

    /// 401 from the backend
    #[error("Authentication required")]
    Unauthorized,

    /// 403 from the backend
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// 404 from the backend
    #[error("Not found: {0}")]
    NotFound(String),

    /// 4xx carrying a validation complaint
    #[error("Validation error: {0}")]
    Validation(String),

    /// 5xx or anything else unexplained
    #[error("Internal error: {0}")]
    Internal(String),

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Shorthand for fallible client calls
pub type ClientResult<T> = Result<T, ClientError>;
