use std::sync::Arc;

use axum::{Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use super::Json;
use crate::{
    auth::{AdminCredentials, TokenKeys},
    error::{Error, Result},
    state::AppState,
};

/// 登录路由：`POST /login`
pub fn setup_route() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub message: &'static str,
}

/// 管理员登录
///
/// 账号密码匹配时签发 24 小时有效的令牌，否则返回 401，不说明是哪个字段错误。
async fn login(
    State(admin): State<Arc<AdminCredentials>>,
    State(tokens): State<Arc<TokenKeys>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    if !admin.verify(&req.email, &req.password) {
        tracing::warn!("login rejected");
        return Err(Error::InvalidCredentials);
    }

    let token = tokens.issue(&req.email)?;
    tracing::info!(email = %req.email, "admin logged in");

    Ok(Json(LoginResponse {
        token,
        message: "Login successful",
    }))
}
