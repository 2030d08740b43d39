pub mod api;
pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod state;
pub mod storage;
pub mod upload;

use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};

use config::Config;
use state::AppState;

/// 启动服务
///
/// 读取配置、建立数据库连接池、启动 HTTP 服务，服务停止后关闭连接池。
pub async fn run() -> error::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_env_filter(EnvFilter::from_env("FOLIO_LOG"))
        .init();

    let config = Config::from_env()?;

    let pool = storage::new_db_pool(&config.database_url).await?;
    tracing::info!("connected to database");

    let app = AppState::from_config(pool.clone(), &config);
    let result = api::run_server(app, config.port, &config.cors_origins).await;

    pool.close().await;
    result
}
