//! 页面路由
//!
//! 路由表中的每个条目注册一个 GET 外壳路由。守卫不在这里挂载，
//! 它作为应用级中间件对所有页面导航生效 (含 fallback)。

use axum::{Router, routing::get};

use crate::core::GatewayState;
use crate::handler::pages;
use crate::nav::RouteTable;

/// 页面路由 - 路由表驱动
pub fn router() -> Router<GatewayState> {
    let mut router = Router::new();
    for route in RouteTable::storefront().iter() {
        router = router.route(route.path, get(pages::navigate));
    }
    router
}
