use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::TokenKeys;
use crate::error::{Error, Result};

/// 管理接口的鉴权中间件
///
/// 要求请求头携带 `Authorization: Bearer <token>`，令牌签名有效、未过期且带有管理员标记，
/// 否则在进入处理函数前返回 401。校验通过的 [`Claims`](super::Claims) 会放入请求扩展中。
pub async fn require_admin(
    State(tokens): State<Arc<TokenKeys>>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let Some(auth) = req.headers().typed_get::<Authorization<Bearer>>() else {
        tracing::debug!("missing bearer token");
        return Err(Error::Unauthorized);
    };

    let claims = match tokens.verify(auth.token()) {
        Ok(claims) if claims.admin => claims,
        Ok(_) => {
            tracing::debug!("token without admin capability");
            return Err(Error::Unauthorized);
        }
        Err(e) => {
            tracing::debug!(%e, "invalid token");
            return Err(Error::Unauthorized);
        }
    };

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
