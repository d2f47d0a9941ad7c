//! API 代理处理器
//!
//! `/api/{*path}` 整体转发到后端源：方法、查询串、请求体和响应
//! 状态原样透传，`/api` 前缀在转发前剥掉。令牌由客户端的签名器
//! 按路径规则附加，进来的 Authorization 头不参与。上游不可达时
//! 以网关错误响应 (502/504)。

use axum::{
    body::{Body, Bytes},
    extract::{Path, State},
    http::{HeaderMap, Method, Uri, header},
    response::Response,
};

use shared::AppError;

use crate::core::GatewayState;
use crate::handler::upstream_error;

/// 转发一次 API 请求
pub async fn forward(
    State(state): State<GatewayState>,
    Path(path): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let query = uri.query();
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let upstream = state
        .backend()
        .forward(method, &path, query, content_type, body.to_vec())
        .await
        .map_err(upstream_error)?;

    let mut response = Response::builder().status(upstream.status);
    if let Some(content_type) = upstream.content_type {
        response = response.header(header::CONTENT_TYPE, content_type);
    }
    response
        .body(Body::from(upstream.body))
        .map_err(|e| AppError::internal(e.to_string()))
}
