//! Registry of every error code the gateway can put on the wire
//!
//! Codes are grouped by thousands digit so the family is readable off
//! the number itself: 0xxx general, 1xxx auth, 2xxx permission, 3xxx
//! upstream, 9xxx system. The numeric values are part of the response
//! contract; once shipped they do not move.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable error code
///
/// Codes cross the wire as bare u16 values inside the response envelope,
/// so storefront pages and external callers can match on the number
/// without sharing this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Not an error
    Success = 0,
    /// Failure with no more specific code
    Unknown = 1,
    /// Request fields failed validation
    ValidationFailed = 2,
    /// No such resource
    NotFound = 3,
    /// A duplicate of the resource exists
    AlreadyExists = 4,
    /// Request malformed beyond field validation
    InvalidRequest = 5,
    /// A mandatory field was absent
    RequiredField = 6,

    // ==================== 1xxx: Auth ====================
    /// No login where one is needed
    NotAuthenticated = 1001,
    /// Username or password wrong
    InvalidCredentials = 1002,
    /// Backend rejected the login (success=false verdict)
    LoginRejected = 1003,
    /// Backend rejected the registration
    RegistrationRejected = 1004,

    // ==================== 2xxx: Permission ====================
    /// Logged in, but not allowed
    PermissionDenied = 2001,
    /// Seller portal login required
    SellerRequired = 2002,
    /// Customer portal login required
    CustomerRequired = 2003,

    // ==================== 3xxx: Upstream ====================
    /// Backend could not be reached
    BackendUnreachable = 3001,
    /// Backend did not answer in time
    BackendTimeout = 3002,
    /// Backend answered with an unreadable body
    BadUpstreamResponse = 3003,

    // ==================== 9xxx: System ====================
    /// Unexpected fault inside the gateway
    InternalError = 9001,
    /// Session store could not be read or written
    StorageError = 9002,
    /// Bad or missing configuration
    ConfigError = 9003,
}

impl ErrorCode {
    /// Numeric value as it appears on the wire
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default English message for the code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::LoginRejected => "Login rejected by backend",
            ErrorCode::RegistrationRejected => "Registration rejected by backend",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::SellerRequired => "Seller login is required",
            ErrorCode::CustomerRequired => "Customer login is required",

            // Upstream
            ErrorCode::BackendUnreachable => "Backend could not be reached",
            ErrorCode::BackendTimeout => "Backend did not answer in time",
            ErrorCode::BadUpstreamResponse => "Backend answered with an unreadable response",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageError => "Session storage error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A u16 with no code assigned to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::LoginRejected),
            1004 => Ok(ErrorCode::RegistrationRejected),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::SellerRequired),
            2003 => Ok(ErrorCode::CustomerRequired),

            // Upstream
            3001 => Ok(ErrorCode::BackendUnreachable),
            3002 => Ok(ErrorCode::BackendTimeout),
            3003 => Ok(ErrorCode::BadUpstreamResponse),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),
            9003 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
