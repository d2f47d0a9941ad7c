use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::GatewayState;
use crate::middleware;
use crate::nav::middleware::navigation_guard;

pub mod api;
pub mod health;
pub mod pages;
pub mod session;

pub mod router_ext;
pub use router_ext::{OneshotResult, OneshotRouter};

/// 请求 ID 生成器，每个请求一个 UUID
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// 合并全部路由，不带中间件和状态
pub fn build_router() -> Router<GatewayState> {
    Router::new()
        // 页面路由 - 路由表驱动的外壳
        .merge(pages::router())
        // 会话路由 - 登录/注册/登出/诊断
        .merge(session::router())
        // API 代理 - 整体转发到后端源
        .merge(api::router())
        // 健康检查 - 公共路由
        .merge(health::router())
        // 未命中路由表的路径 - 404 外壳
        .fallback(crate::handler::pages::navigate)
}

/// 完整应用：路由加上全部中间件
///
/// `Server::run` 的监听器和测试里的 oneshot 调用都从这里拿应用
pub fn build_app(state: &GatewayState) -> Router<GatewayState> {
    build_router()
        // ========== HTTP 层中间件 ==========
        // CORS - 宽松跨域策略
        .layer(CorsLayer::permissive())
        // 响应 gzip 压缩
        .layer(CompressionLayer::new())
        // 请求日志
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // tower 层请求跟踪
        .layer(TraceLayer::new_for_http())
        // ========== 应用中间件 ==========
        // 每个请求生成请求 ID
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // 请求 ID 回写到响应头
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // 导航守卫 - 页面处理器之前先查路由表
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            navigation_guard,
        ))
}
