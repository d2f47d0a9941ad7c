//! 门户会话路由

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::GatewayState;
use crate::handler::auth;

/// 会话路由
/// - 登录/注册/登出:网关直接处理，写会话标志后重定向
/// - /session: 诊断端点，报告两个门户的登录与否
pub fn router() -> Router<GatewayState> {
    Router::new()
        .route("/seller/login", post(auth::seller_login))
        .route("/login", post(auth::customer_login))
        .route("/register", post(auth::register))
        .route("/seller/logout", post(auth::seller_logout))
        .route("/logout", post(auth::customer_logout))
        .route("/session", get(auth::session_status))
}
