use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

/// 数据库连接池类型
pub type Db = sqlx::PgPool;

/// 根据连接 URL 创建新的数据库连接池
///
/// 连接池配置：
///
/// - 最大空闲时间 60 秒
/// - 最大生存时间 1500 秒（约 25 分钟）
/// - 最大连接数 10
/// - 获取连接超时 2 秒
/// - 获取前测试连接
/// - 最小连接数 2
pub async fn new_db_pool(conn_url: &str) -> Result<Db, sqlx::Error> {
    pool_options().connect(conn_url).await
}

/// 创建延迟连接的连接池
///
/// 不会立即建立连接，第一次执行查询时才会连接数据库。
pub fn new_lazy_db_pool(conn_url: &str) -> Result<Db, sqlx::Error> {
    pool_options().connect_lazy(conn_url)
}

fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .idle_timeout(Duration::from_secs(60))
        .max_lifetime(Duration::from_secs(1500))
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(2))
        .test_before_acquire(true)
        .min_connections(2)
}

/// 执行 SQL 文件中的建表语句
///
/// 将文件内容按 `;` 分割，每条 SQL 单独执行
pub async fn migrate(db: &Db, file: &str) -> Result<(), sqlx::Error> {
    let content = tokio::fs::read_to_string(file).await?;

    for sql in content.split(';') {
        if sql.trim().is_empty() {
            continue;
        }
        sqlx::query(sql).execute(db).await?;
    }
    Ok(())
}
