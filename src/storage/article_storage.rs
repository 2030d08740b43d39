use super::{ArticleCounts, ArticleRow, Db};
use crate::content::{ArticleFields, NewArticle};

const ARTICLE_COLUMNS: &str =
    "id, title, slug, content, content_type, category, tags, created_at, updated_at";

/// 文章表的读写接口
///
/// 每个方法只执行一条 SQL，不开启事务。
pub trait ArticleStorage: Sync {
    /// 获取 [`Db`] 对象
    fn db(&self) -> &Db;

    /// 按创建时间倒序查询全部文章
    fn list(&self) -> impl Future<Output = Result<Vec<ArticleRow>, sqlx::Error>> + Send {
        async move {
            let sql = format!(
                "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC, id DESC"
            );
            sqlx::query_as::<_, ArticleRow>(&sql)
                .fetch_all(self.db())
                .await
        }
    }

    /// 按 slug 精确查询文章
    ///
    /// 文章不存在时返回 `None`；slug 重复时返回最早创建的一篇。
    fn get_by_slug(
        &self,
        slug: impl AsRef<str> + Send,
    ) -> impl Future<Output = Result<Option<ArticleRow>, sqlx::Error>> + Send {
        async move {
            let sql = format!(
                "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1 ORDER BY id LIMIT 1"
            );
            sqlx::query_as::<_, ArticleRow>(&sql)
                .bind(slug.as_ref())
                .fetch_optional(self.db())
                .await
        }
    }

    /// 插入文章，返回数据库中的完整记录
    fn create(
        &self,
        article: &NewArticle,
    ) -> impl Future<Output = Result<ArticleRow, sqlx::Error>> + Send {
        async move {
            let sql = format!(
                "
                INSERT INTO articles (title, slug, content, content_type, category, tags)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING {ARTICLE_COLUMNS}
                "
            );
            sqlx::query_as::<_, ArticleRow>(&sql)
                .bind(&article.fields.title)
                .bind(&article.slug)
                .bind(&article.fields.content)
                .bind(&article.fields.content_type)
                .bind(&article.fields.category)
                .bind(&article.fields.tags)
                .fetch_one(self.db())
                .await
        }
    }

    /// 更新文章内容并刷新 `updated_at`，slug 保持不变
    ///
    /// 返回受影响的行数。
    fn update(
        &self,
        id: i32,
        fields: &ArticleFields,
    ) -> impl Future<Output = Result<u64, sqlx::Error>> + Send {
        async move {
            let result = sqlx::query(
                "
                UPDATE articles
                SET title = $1, content = $2, content_type = $3, category = $4, tags = $5,
                    updated_at = NOW()
                WHERE id = $6
                ",
            )
            .bind(&fields.title)
            .bind(&fields.content)
            .bind(&fields.content_type)
            .bind(&fields.category)
            .bind(&fields.tags)
            .bind(id)
            .execute(self.db())
            .await?;
            Ok(result.rows_affected())
        }
    }

    /// 删除文章，返回受影响的行数
    fn delete(&self, id: i32) -> impl Future<Output = Result<u64, sqlx::Error>> + Send {
        async move {
            let result = sqlx::query("DELETE FROM articles WHERE id = $1")
                .bind(id)
                .execute(self.db())
                .await?;
            Ok(result.rows_affected())
        }
    }

    /// 统计文章总数与分类数
    fn counts(&self) -> impl Future<Output = Result<ArticleCounts, sqlx::Error>> + Send {
        async move {
            sqlx::query_as::<_, ArticleCounts>(
                r#"
                SELECT COUNT(*) AS articles, COUNT(DISTINCT category) AS categories
                FROM articles
                "#,
            )
            .fetch_one(self.db())
            .await
        }
    }
}

/// 为 [`Db`] 实现 [`ArticleStorage`]
impl ArticleStorage for Db {
    fn db(&self) -> &Db {
        self
    }
}
