//! 请求进出日志
//!
//! 每个请求记两条：进入一条，带状态码和耗时的完成一条

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// 记录请求两端的结构化日志，字段包括：
/// - x-request-id 请求 ID
/// - 方法和路径
/// - 路由表命中的路由名 (如果存在)
/// - User-Agent
/// - 状态码和耗时 (毫秒)
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    // 请求头里没有请求 ID 时就地生成
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    // 导航守卫命中路由表时，提取路由名
    let route = req
        .extensions()
        .get::<crate::nav::MatchedRoute>()
        .map(|m| m.name.to_string());

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        route = ?route,
        user_agent = %user_agent,
        "Request started"
    );

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status();

    // 4xx 和 5xx 提升为 warn
    if status.is_server_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            route = ?route,
            "Request completed with server error"
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            route = ?route,
            "Request completed with client error"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            route = ?route,
            "Request completed"
        );
    }

    response
}
