use std::sync::Arc;

use axum::{
    Extension, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
};
use serde::Serialize;

use super::Json;
use crate::{
    auth::Claims,
    error::{Error, Result},
    state::AppState,
    upload::{MAX_UPLOAD_SIZE, UploadStore, sniff_image},
};

/// 表单中文件字段的名称
const IMAGE_FIELD: &str = "image";

/// 图片上传路由，挂载在 `/admin` 下
pub fn admin_route() -> Router<AppState> {
    Router::new().route(
        "/upload",
        post(upload_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE)),
    )
}

#[derive(Debug, Serialize)]
pub struct ImageUploadResponse {
    pub url: String,
}

/// 上传图片
///
/// 读取 `image` 字段，按文件内容判断是否为图片，保存后返回访问路径。
async fn upload_image(
    State(uploads): State<Arc<UploadStore>>,
    Extension(claims): Extension<Claims>,
    mut multipart: Multipart,
) -> Result<Json<ImageUploadResponse>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(ToOwned::to_owned);
        let data = field.bytes().await?;

        let Some(mime) = sniff_image(&data) else {
            return Err(Error::BadRequest("Only image files are allowed".into()));
        };

        let stored = uploads.save(file_name.as_deref(), &data).await?;
        tracing::info!(url = %stored.url, %mime, size = data.len(), by = %claims.email, "image uploaded");

        return Ok(Json(ImageUploadResponse { url: stored.url }));
    }

    Err(Error::BadRequest("Error retrieving file".into()))
}
