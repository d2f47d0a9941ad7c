//! Shared types for the shop gateway workspace
//!
//! Common vocabulary used across the gateway and client crates: the portal
//! enum, the session-flag store interface, error types, response structures,
//! and the backend wire types.

pub mod client;
pub mod error;
pub mod portal;
pub mod session;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use portal::Portal;
pub use session::{MemorySession, SessionRead};
