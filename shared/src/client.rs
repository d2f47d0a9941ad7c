//! Client-related types shared between gateway and client
//!
//! Wire types of the storefront backend's portal endpoints. The backend
//! answers HTTP 200 for both accepted and rejected logins; the `success`
//! flag is the real verdict, with `message` carrying the rejection reason.

use serde::{Deserialize, Serialize};

// =============================================================================
// Portal auth DTOs
// =============================================================================

/// Login form, form-encoded on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Backend verdict on a portal login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalLoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Customer registration form, form-encoded on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "defaultLocation", skip_serializing_if = "Option::is_none")]
    pub default_location: Option<String>,
}

/// Backend verdict on a registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// Gateway diagnostics
// =============================================================================

/// Which portals are currently logged in. Never carries token values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub seller_logged_in: bool,
    pub customer_logged_in: bool,
}
