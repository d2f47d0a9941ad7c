// shop-gateway/tests/navigation.rs
// 导航守卫集成测试：经过完整中间件栈驱动页面导航

use axum::body::Body;
use http::{Request, StatusCode, header};
use tempfile::TempDir;

use shared::session::keys;
use shop_gateway::routes::{self, OneshotRouter};
use shop_gateway::{Config, GatewayState};

/// Gateway state over a temp work dir; the backend is never reached by
/// page navigations, so it points at a closed port.
async fn test_state() -> (GatewayState, TempDir) {
    let dir = TempDir::new().unwrap();
    let config = Config::with_overrides(dir.path().to_str().unwrap(), 0, "http://127.0.0.1:1");
    let state = GatewayState::initialize(&config).await;
    (state, dir)
}

async fn get(state: &GatewayState, path: &str) -> http::Response<Body> {
    let mut router = routes::build_app(state);
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    router.oneshot(state, request).await.unwrap()
}

async fn body_string(response: http::Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &http::Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_home_is_public() {
    let (state, _dir) = test_state().await;
    let response = get(&state, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("data-page=\"home\""));
}

#[tokio::test]
async fn test_seller_dashboard_redirects_anonymous_to_seller_login() {
    let (state, _dir) = test_state().await;
    let response = get(&state, "/seller/dashboard").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/seller/login");
}

#[tokio::test]
async fn test_seller_dashboard_opens_once_seller_logged_in() {
    let (state, _dir) = test_state().await;
    state
        .session()
        .put_many(&[(keys::SELLER_LOGGED_IN, "true")])
        .unwrap();

    let response = get(&state, "/seller/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("data-page=\"sellerDashboard\""));
}

#[tokio::test]
async fn test_customer_login_does_not_open_seller_pages() {
    let (state, _dir) = test_state().await;
    state
        .session()
        .put_many(&[(keys::CUSTOMER_LOGGED_IN, "true")])
        .unwrap();

    let response = get(&state, "/seller/products").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/seller/login");
}

#[tokio::test]
async fn test_orders_redirects_to_customer_login() {
    let (state, _dir) = test_state().await;
    // 卖家登录态对顾客页面不起作用
    state
        .session()
        .put_many(&[(keys::SELLER_LOGGED_IN, "true")])
        .unwrap();

    let response = get(&state, "/orders").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_orders_opens_for_customer() {
    let (state, _dir) = test_state().await;
    state
        .session()
        .put_many(&[(keys::CUSTOMER_LOGGED_IN, "true")])
        .unwrap();

    let response = get(&state, "/orders").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_product_detail_captures_path_param() {
    let (state, _dir) = test_state().await;
    let response = get(&state, "/product/42").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("data-page=\"productDetail\""));
    assert!(body.contains("data-param-id=\"42\""));
}

#[tokio::test]
async fn test_unmatched_path_passes_guard_and_renders_404() {
    // 未命中路由表的路径不会被守卫拦下，空会话也一样；
    // 结论由页面层给出：404 外壳。
    let (state, _dir) = test_state().await;
    let response = get(&state, "/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.contains("data-page=\"notFound\""));
}

#[tokio::test]
async fn test_login_pages_stay_reachable_when_logged_out() {
    let (state, _dir) = test_state().await;

    let response = get(&state, "/seller/login").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&state, "/login").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&state, "/register").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_session_endpoint_reports_flags_without_tokens() {
    let (state, _dir) = test_state().await;
    state
        .session()
        .put_many(&[(keys::SELLER_LOGGED_IN, "true"), (keys::SELLER_TOKEN, "abc")])
        .unwrap();

    let response = get(&state, "/session").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("\"sellerLoggedIn\":true"));
    assert!(body.contains("\"customerLoggedIn\":false"));
    // 诊断端点绝不回显令牌
    assert!(!body.contains("abc"));
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let (state, _dir) = test_state().await;
    let response = get(&state, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("\"status\":\"healthy\""));
    assert!(body.contains("\"session_store\":\"ok\""));
}
