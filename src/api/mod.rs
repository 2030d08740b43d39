mod articles;
mod extract;
mod projects;
mod session;
mod upload;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    middleware,
};
use chrono::{DateTime, Local};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::instrument;

pub use self::{
    articles::{Article, Stats},
    extract::{Json, Path},
    projects::Project,
    session::{LoginRequest, LoginResponse},
    upload::ImageUploadResponse,
};
use crate::{auth::require_admin, error::Result, state::AppState, upload::PUBLIC_PREFIX};

/// 更新、删除等操作的确认消息
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// 时间统一格式化为 `YYYY-MM-DD HH:MM:SS`
fn format_datetime(datetime: &DateTime<Local>) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 设置应用的路由。
///
/// - `/api` 下为公开接口
/// - `/api/admin` 下为管理接口，经过 [`require_admin`] 鉴权
/// - `/uploads` 为上传文件的静态目录
pub fn setup_route(app: AppState) -> Router {
    let admin = articles::admin_route()
        .merge(projects::admin_route())
        .merge(upload::admin_route())
        .route_layer(middleware::from_fn_with_state(app.clone(), require_admin));

    let api = articles::setup_route()
        .merge(projects::setup_route())
        .merge(session::setup_route())
        .nest("/admin", admin);

    Router::new()
        .nest("/api", api)
        .nest_service(PUBLIC_PREFIX, ServeDir::new(app.uploads().dir()))
        .with_state(app)
}

/// 启动 HTTP 服务，并使用给定的路由处理请求。
///
/// 收到 Ctrl-C 或 SIGTERM 后停止接收新连接，等待进行中的请求结束。
#[instrument(name = "http server", skip(router))]
pub async fn run_server_with_router(router: Router, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("listening on :{port}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// 启动 HTTP 服务，自动设置路由和中间件。
///
/// 1. 生成路由
/// 2. 添加跨域、日志和追踪中间件
/// 3. 启动服务器
pub async fn run_server(app: AppState, port: u16, cors_origins: &[String]) -> Result<()> {
    let router = setup_route(app);
    let router = add_middlewares(router, cors_origins);
    run_server_with_router(router, port).await
}

/// 为路由添加中间件，包括跨域、请求追踪和失败日志记录。
///
/// 日志记录会在请求失败时输出错误信息。
fn add_middlewares(router: Router, cors_origins: &[String]) -> Router {
    fn log_failure(
        err: tower_http::classify::ServerErrorsFailureClass,
        _latency: std::time::Duration,
        _span: &tracing::Span,
    ) {
        tracing::error!(error = %err, "request failed");
    }

    router.layer(cors_layer(cors_origins)).layer(
        TraceLayer::new_for_http()
            .on_failure(log_failure)
            .on_request(|_req: &_, _span: &tracing::Span| {
                // 关闭请求日志
            }),
    )
}

/// 只允许配置中的来源跨域访问，并允许携带凭据
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, %e, "ignoring invalid cors origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(%e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(%e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
