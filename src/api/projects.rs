use axum::{
    Extension, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
};
use serde::Serialize;

use super::{Json, MessageResponse, Path, format_datetime};
use crate::{
    auth::Claims,
    content::{ProjectFields, ProjectInput},
    error::{Error, Result},
    state::AppState,
    storage::{Db, ProjectRow, ProjectStorage},
};

/// 公开的项目路由
pub fn setup_route() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project_list))
        .route("/projects/{id}", get(project))
}

/// 需要管理员令牌的项目路由，挂载在 `/admin` 下
pub fn admin_route() -> Router<AppState> {
    Router::new()
        .route("/projects", post(project_create))
        .route("/projects/{id}", put(project_update).delete(project_delete))
}

/// 项目
#[derive(Debug, Serialize)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub technologies: String,
    pub thumbnail_url: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            technologies: row.technologies,
            thumbnail_url: row.thumbnail_url,
            github_url: row.github_url,
            live_url: row.live_url,
            created_at: format_datetime(&row.created_at),
            updated_at: format_datetime(&row.updated_at),
        }
    }
}

async fn project_list(State(db): State<Db>) -> Result<Json<Vec<Project>>> {
    let rows = db.list().await?;
    Ok(Json(rows.into_iter().map(Project::from).collect()))
}

async fn project(Path(id): Path<i32>, State(db): State<Db>) -> Result<Json<Project>> {
    let row = db.get(id).await?.ok_or(Error::NotFound("Project"))?;
    Ok(Json(row.into()))
}

async fn project_create(
    State(db): State<Db>,
    Extension(claims): Extension<Claims>,
    Json(input): Json<ProjectInput>,
) -> Result<(StatusCode, Json<Project>)> {
    let fields = ProjectFields::try_from(input)?;
    let row = db.create(&fields).await?;

    tracing::info!(id = row.id, by = %claims.email, "project created");
    Ok((StatusCode::CREATED, Json(row.into())))
}

async fn project_update(
    Path(id): Path<i32>,
    State(db): State<Db>,
    Extension(claims): Extension<Claims>,
    Json(input): Json<ProjectInput>,
) -> Result<Json<MessageResponse>> {
    let fields = ProjectFields::try_from(input)?;
    let affected = db.update(id, &fields).await?;

    tracing::info!(id, affected, by = %claims.email, "project updated");
    Ok(Json(MessageResponse::new("Project updated successfully")))
}

async fn project_delete(
    Path(id): Path<i32>,
    State(db): State<Db>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<MessageResponse>> {
    let affected = db.delete(id).await?;

    tracing::info!(id, affected, by = %claims.email, "project deleted");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
