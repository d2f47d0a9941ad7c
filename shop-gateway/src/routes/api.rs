//! API 代理路由

use axum::{Router, routing::any};

use crate::core::GatewayState;
use crate::handler::proxy;

/// `/api` 代理路由 - 所有方法整体转发到后端源
pub fn router() -> Router<GatewayState> {
    Router::new().route("/api/{*path}", any(proxy::forward))
}
