use chrono::{DateTime, Local};

/// 文章表的一行
#[derive(Debug, sqlx::FromRow)]
pub struct ArticleRow {
    /// 数据库分配的自增 ID
    pub id: i32,
    pub title: String,
    /// 创建时由标题生成
    pub slug: String,
    /// 原始 Markdown / HTML 内容
    pub content: String,
    pub content_type: String,
    pub category: String,
    /// 自由文本标签
    pub tags: String,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

/// 项目表的一行
#[derive(Debug, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub technologies: String,
    pub thumbnail_url: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

/// 文章统计
///
/// 由聚合查询实时计算，不落库。
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct ArticleCounts {
    /// 文章总数
    pub articles: i64,
    /// 不同分类的数量
    pub categories: i64,
}
