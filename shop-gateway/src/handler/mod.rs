//! HTTP 处理器
//!
//! - [`auth`] - 门户登录/注册/登出，写会话标志
//! - [`pages`] - 页面外壳渲染
//! - [`proxy`] - `/api` 整体转发

pub mod auth;
pub mod pages;
pub mod proxy;

use shared::{AppError, ErrorCode};
use shop_client::ClientError;

/// 把后端客户端错误映射为网关错误
///
/// 传输失败按是否超时分别映射到 3002 / 3001；其余变体保留
/// 后端给出的理由。
pub(crate) fn upstream_error(err: ClientError) -> AppError {
    match err {
        ClientError::Http(e) if e.is_timeout() => {
            AppError::with_message(ErrorCode::BackendTimeout, "Backend request timed out")
        }
        ClientError::Http(e) => AppError::backend_unreachable(e.to_string()),
        ClientError::InvalidResponse(message) => {
            AppError::with_message(ErrorCode::BadUpstreamResponse, message)
        }
        ClientError::LoginRejected(message) => AppError::login_rejected(message),
        ClientError::RegistrationRejected(message) => {
            AppError::with_message(ErrorCode::RegistrationRejected, message)
        }
        ClientError::Unauthorized => AppError::not_authenticated(),
        ClientError::Forbidden(message) => AppError::permission_denied(message),
        ClientError::NotFound(message) => AppError::not_found(message),
        ClientError::Validation(message) => AppError::validation(message),
        ClientError::Internal(message) => AppError::internal(message),
        ClientError::Serialization(e) => AppError::internal(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_login_maps_to_1003() {
        let err = upstream_error(ClientError::LoginRejected("bad password".to_string()));
        assert_eq!(err.code, ErrorCode::LoginRejected);
        assert_eq!(err.message, "bad password");
    }

    #[test]
    fn test_invalid_response_maps_to_bad_upstream() {
        let err = upstream_error(ClientError::InvalidResponse("missing token".to_string()));
        assert_eq!(err.code, ErrorCode::BadUpstreamResponse);
        assert_eq!(err.http_status(), http::StatusCode::BAD_GATEWAY);
    }
}
