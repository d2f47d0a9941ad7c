//! Shop Client - HTTP client for the storefront backend
//!
//! Owns the outgoing side of the gateway: portal login/register calls,
//! generic request forwarding, and the bearer-token policy that decides
//! which portal's token a request carries.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;

pub use auth::{RequestAuthenticator, SELLER_PREFIX};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{ForwardedResponse, LoginSession, ShopClient};

// callers get the wire DTOs without importing shared directly
pub use shared::client::{LoginRequest, PortalLoginResponse, RegisterRequest, RegisterResponse};
