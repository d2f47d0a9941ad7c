//! 门户会话处理器
//!
//! 登录、注册、登出。凭证转发给店面后端裁决；接受后把登录标志
//! 和令牌一次写入会话存储，此后守卫和请求签名器按标志工作。
//! 登出只删本门户的两个键，另一门户不受影响。

use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use shared::client::{RegisterRequest, SessionStatus};
use shared::{ApiResponse, AppError, Portal};
use shop_client::ClientError;

use crate::core::GatewayState;
use crate::handler::upstream_error;
use crate::security_log;

/// 登录表单 (后端按表单字段接收)
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// 卖家登录
pub async fn seller_login(
    State(state): State<GatewayState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    portal_login(state, Portal::Seller, form).await
}

/// 顾客登录
pub async fn customer_login(
    State(state): State<GatewayState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    portal_login(state, Portal::Customer, form).await
}

async fn portal_login(
    state: GatewayState,
    portal: Portal,
    form: LoginForm,
) -> Result<Response, AppError> {
    let login = match state
        .backend()
        .login(portal, &form.username, &form.password)
        .await
    {
        Ok(login) => login,
        Err(ClientError::LoginRejected(message)) => {
            security_log!(
                "WARN",
                "login_rejected",
                portal = portal.as_str(),
                username = form.username.as_str()
            );
            return Err(AppError::login_rejected(message));
        }
        Err(e) => return Err(upstream_error(e)),
    };

    state
        .session()
        .put_many(&[
            (portal.flag_key(), "true"),
            (portal.token_key(), login.token.as_str()),
        ])
        .map_err(|e| AppError::storage(e.to_string()))?;

    tracing::info!(
        portal = %portal,
        username = %form.username,
        "Portal login accepted"
    );

    Ok(Redirect::to(portal.entry_path()).into_response())
}

/// 顾客注册
///
/// 后端裁决后不自动登录，成功重定向到顾客登录页。
pub async fn register(
    State(state): State<GatewayState>,
    Form(form): Form<RegisterRequest>,
) -> Result<Response, AppError> {
    let username = form.username.clone();
    match state.backend().register_customer(&form).await {
        Ok(()) => {
            tracing::info!(username = %username, "Customer registered");
            Ok(Redirect::to("/login").into_response())
        }
        Err(e) => Err(upstream_error(e)),
    }
}

/// 卖家登出
pub async fn seller_logout(State(state): State<GatewayState>) -> Result<Response, AppError> {
    portal_logout(state, Portal::Seller).await
}

/// 顾客登出
pub async fn customer_logout(State(state): State<GatewayState>) -> Result<Response, AppError> {
    portal_logout(state, Portal::Customer).await
}

async fn portal_logout(state: GatewayState, portal: Portal) -> Result<Response, AppError> {
    state
        .session()
        .remove_many(&[portal.flag_key(), portal.token_key()])
        .map_err(|e| AppError::storage(e.to_string()))?;

    tracing::info!(portal = %portal, "Portal logged out");

    let target = match portal {
        Portal::Seller => state.routes().login_path_for(portal),
        Portal::Customer => "/",
    };
    Ok(Redirect::to(target).into_response())
}

/// 会话标志诊断
///
/// 只报告两个门户的登录与否，绝不回显令牌。
pub async fn session_status(
    State(state): State<GatewayState>,
) -> ApiResponse<SessionStatus> {
    let session = state.session_reader();
    ApiResponse::success(SessionStatus {
        seller_logged_in: Portal::Seller.is_logged_in(session),
        customer_logged_in: Portal::Customer.is_logged_in(session),
    })
}
