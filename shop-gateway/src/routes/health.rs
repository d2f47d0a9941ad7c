//! 健康检查

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::GatewayState;

/// 健康检查路由 - 公共路由 (不经守卫拦截)
pub fn router() -> Router<GatewayState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    environment: String,
    /// 代理目标
    backend: String,
    /// 会话存储探测结果
    session_store: &'static str,
}

// 进程启动时间，首次访问时记录
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// 对会话存储做一次读探测；后端不在这里探测，代理端点自行上报 502。
pub async fn health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    let session_store = match state.session().snapshot() {
        Ok(_) => "ok",
        Err(_) => "error",
    };

    Json(HealthResponse {
        status: if session_store == "ok" {
            "healthy"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        environment: state.config().environment.clone(),
        backend: state.config().backend_url.clone(),
        session_store,
    })
}
