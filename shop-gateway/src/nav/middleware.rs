//! 导航守卫中间件
//!
//! 把守卫决策接到 axum 请求管线上：页面导航 (GET) 先过路由表和
//! 守卫，放行的请求带着 [`MatchedRoute`] 进入页面处理器，被拦下
//! 的回 303 重定向到对应门户的登录页。
//!
//! # 跳过守卫的请求
//!
//! - 非 `GET` 方法 (登录/登出表单、API 写操作不是页面导航)
//! - `/api/` 前缀 (代理有自己的签名逻辑)
//!
//! 其余未命中路由表的路径照常放行，由页面层渲染 404。

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::core::GatewayState;
use crate::nav::guard::{self, NavigationOutcome};
use crate::security_log;

/// 导航守卫中间件
pub async fn navigation_guard(
    State(state): State<GatewayState>,
    mut req: Request,
    next: Next,
) -> Response {
    if req.method() != http::Method::GET {
        return next.run(req).await;
    }

    let path = req.uri().path().to_string();
    if path.starts_with("/api/") {
        return next.run(req).await;
    }

    let (outcome, matched_route) = {
        let matched = state.routes().match_path(&path);
        let outcome = guard::decide_for_match(matched.as_ref(), state.session_reader());
        (outcome, matched.map(|m| m.to_matched()))
    };

    match outcome {
        NavigationOutcome::Proceed => {
            if let Some(route) = matched_route {
                req.extensions_mut().insert(route);
            }
            next.run(req).await
        }
        NavigationOutcome::RedirectToLogin(portal) => {
            let login_path = state.routes().login_path_for(portal);
            security_log!(
                "WARN",
                "nav_redirect",
                portal = portal.as_str(),
                path = path.as_str(),
                redirect = login_path
            );
            Redirect::to(login_path).into_response()
        }
    }
}
