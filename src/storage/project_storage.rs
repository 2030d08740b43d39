use super::{Db, ProjectRow};
use crate::content::ProjectFields;

const PROJECT_COLUMNS: &str = "id, title, description, category, technologies, thumbnail_url, \
                               github_url, live_url, created_at, updated_at";

/// 项目表的读写接口
pub trait ProjectStorage: Sync {
    fn db(&self) -> &Db;

    /// 按创建时间倒序查询全部项目
    fn list(&self) -> impl Future<Output = Result<Vec<ProjectRow>, sqlx::Error>> + Send {
        async move {
            let sql = format!(
                "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC, id DESC"
            );
            sqlx::query_as::<_, ProjectRow>(&sql)
                .fetch_all(self.db())
                .await
        }
    }

    fn get(&self, id: i32) -> impl Future<Output = Result<Option<ProjectRow>, sqlx::Error>> + Send {
        async move {
            let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");
            sqlx::query_as::<_, ProjectRow>(&sql)
                .bind(id)
                .fetch_optional(self.db())
                .await
        }
    }

    /// 插入项目，返回数据库中的完整记录
    fn create(
        &self,
        fields: &ProjectFields,
    ) -> impl Future<Output = Result<ProjectRow, sqlx::Error>> + Send {
        async move {
            let sql = format!(
                "
                INSERT INTO projects
                    (title, description, category, technologies, thumbnail_url, github_url, live_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING {PROJECT_COLUMNS}
                "
            );
            sqlx::query_as::<_, ProjectRow>(&sql)
                .bind(&fields.title)
                .bind(&fields.description)
                .bind(&fields.category)
                .bind(&fields.technologies)
                .bind(&fields.thumbnail_url)
                .bind(&fields.github_url)
                .bind(&fields.live_url)
                .fetch_one(self.db())
                .await
        }
    }

    /// 整体替换项目字段并刷新 `updated_at`，返回受影响的行数
    fn update(
        &self,
        id: i32,
        fields: &ProjectFields,
    ) -> impl Future<Output = Result<u64, sqlx::Error>> + Send {
        async move {
            let result = sqlx::query(
                "
                UPDATE projects
                SET title = $1, description = $2, category = $3, technologies = $4,
                    thumbnail_url = $5, github_url = $6, live_url = $7, updated_at = NOW()
                WHERE id = $8
                ",
            )
            .bind(&fields.title)
            .bind(&fields.description)
            .bind(&fields.category)
            .bind(&fields.technologies)
            .bind(&fields.thumbnail_url)
            .bind(&fields.github_url)
            .bind(&fields.live_url)
            .bind(id)
            .execute(self.db())
            .await?;
            Ok(result.rows_affected())
        }
    }

    fn delete(&self, id: i32) -> impl Future<Output = Result<u64, sqlx::Error>> + Send {
        async move {
            let result = sqlx::query("DELETE FROM projects WHERE id = $1")
                .bind(id)
                .execute(self.db())
                .await?;
            Ok(result.rows_affected())
        }
    }
}

impl ProjectStorage for Db {
    fn db(&self) -> &Db {
        self
    }
}
