//! 页面处理器
//!
//! 网关只渲染页面外壳：标题、页面标识和路径参数挂在挂载点的
//! data 属性上，前端拿到后经 `/api` 代理取数据。未命中路由表
//! 的路径走 404 外壳。

use axum::{
    Extension,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::nav::MatchedRoute;

/// 渲染一次导航
///
/// 守卫放行后注入 [`MatchedRoute`]；没有注入的请求 (未命中
/// 路由表) 渲染 404 外壳。
pub async fn navigate(matched: Option<Extension<MatchedRoute>>, uri: Uri) -> Response {
    match matched {
        Some(Extension(route)) => page_shell(&route).into_response(),
        None => not_found_shell(uri.path()).into_response(),
    }
}

fn page_shell(route: &MatchedRoute) -> Html<String> {
    let params = route
        .params
        .iter()
        .map(|(key, value)| format!(" data-param-{}=\"{}\"", key, escape(value)))
        .collect::<String>();

    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
         <div id=\"app\" data-page=\"{name}\"{params}></div>\n\
         </body>\n\
         </html>\n",
        title = route.page.title(),
        name = route.name,
        params = params,
    ))
}

fn not_found_shell(path: &str) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head><meta charset=\"utf-8\"><title>Not Found</title></head>\n\
             <body>\n\
             <div id=\"app\" data-page=\"notFound\" data-path=\"{path}\"></div>\n\
             </body>\n\
             </html>\n",
            path = escape(path),
        )),
    )
}

/// HTML 属性值转义
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
