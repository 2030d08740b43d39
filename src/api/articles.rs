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
    content::{ArticleFields, ArticleInput, NewArticle},
    error::{Error, Result},
    state::AppState,
    storage::{ArticleRow, ArticleStorage, Db},
};

/// 每篇文章折算的浏览量，`total_views` 只是占位数据
const VIEWS_PER_ARTICLE: i64 = 150;

/// 公开的文章路由
///
/// - `GET /articles`：文章列表
/// - `GET /articles/{slug}`：获取单篇文章
/// - `GET /stats`：文章统计
pub fn setup_route() -> Router<AppState> {
    Router::new()
        .route("/articles", get(article_list))
        .route("/articles/{slug}", get(article))
        .route("/stats", get(stats))
}

/// 需要管理员令牌的文章路由，挂载在 `/admin` 下
pub fn admin_route() -> Router<AppState> {
    Router::new()
        .route("/articles", post(article_create))
        .route("/articles/{id}", put(article_update).delete(article_delete))
}

/// 文章
#[derive(Debug, Serialize)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub content_type: String,
    pub category: String,
    pub tags: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            content: row.content,
            content_type: row.content_type,
            category: row.category,
            tags: row.tags,
            created_at: format_datetime(&row.created_at),
            updated_at: format_datetime(&row.updated_at),
        }
    }
}

/// 文章统计
#[derive(Debug, Serialize)]
pub struct Stats {
    pub total_articles: i64,
    pub total_categories: i64,
    pub total_views: i64,
}

/// 获取全部文章，按创建时间倒序
async fn article_list(State(db): State<Db>) -> Result<Json<Vec<Article>>> {
    let rows = db.list().await?;
    Ok(Json(rows.into_iter().map(Article::from).collect()))
}

/// 根据 slug 获取单篇文章
///
/// 文章不存在时返回 [`Error::NotFound`]。
async fn article(Path(slug): Path<String>, State(db): State<Db>) -> Result<Json<Article>> {
    let row = db
        .get_by_slug(&slug)
        .await?
        .ok_or(Error::NotFound("Article"))?;
    Ok(Json(row.into()))
}

async fn stats(State(db): State<Db>) -> Result<Json<Stats>> {
    let counts = db.counts().await?;
    Ok(Json(Stats {
        total_articles: counts.articles,
        total_categories: counts.categories,
        total_views: counts.articles * VIEWS_PER_ARTICLE,
    }))
}

/// 创建文章
///
/// slug 由标题生成，返回数据库中的完整记录。
async fn article_create(
    State(db): State<Db>,
    Extension(claims): Extension<Claims>,
    Json(input): Json<ArticleInput>,
) -> Result<(StatusCode, Json<Article>)> {
    let article = NewArticle::from(ArticleFields::try_from(input)?);
    let row = db.create(&article).await?;

    tracing::info!(id = row.id, slug = %row.slug, by = %claims.email, "article created");
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// 更新文章，不重新生成 slug
///
/// 无论文章是否存在都返回成功。
async fn article_update(
    Path(id): Path<i32>,
    State(db): State<Db>,
    Extension(claims): Extension<Claims>,
    Json(input): Json<ArticleInput>,
) -> Result<Json<MessageResponse>> {
    let fields = ArticleFields::try_from(input)?;
    let affected = db.update(id, &fields).await?;

    tracing::info!(id, affected, by = %claims.email, "article updated");
    Ok(Json(MessageResponse::new("Article updated successfully")))
}

/// 删除文章
///
/// 无论文章是否存在都返回成功。
async fn article_delete(
    Path(id): Path<i32>,
    State(db): State<Db>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<MessageResponse>> {
    let affected = db.delete(id).await?;

    tracing::info!(id, affected, by = %claims.email, "article deleted");
    Ok(Json(MessageResponse::new("Article deleted successfully")))
}
