//! Error codes and envelope shared by the gateway and its backend client
//!
//! Everything a request can fail with flows through this module:
//! - [`ErrorCode`]: stable numeric codes, grouped by thousands digit
//! - [`ErrorCategory`]: the code families the gateway logs and filters by
//! - [`AppError`]: what handlers return, message plus structured context
//! - [`ApiResponse`]: the JSON envelope every gateway-owned endpoint emits
//!
//! Code ranges: 0xxx general, 1xxx auth (login/registration), 2xxx
//! permission (portal access), 3xxx upstream (storefront backend), 9xxx
//! system (the gateway itself).
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, AppError};
//!
//! // The backend refused a seller login
//! let err = AppError::login_rejected("bad password").with_detail("portal", "seller");
//! assert_eq!(err.http_status(), http::StatusCode::UNAUTHORIZED);
//!
//! // The body the caller sees
//! let body = ApiResponse::<()>::error(&err);
//! assert_eq!(body.code, Some(1003));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
