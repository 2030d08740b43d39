use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    auth::{AdminCredentials, TokenKeys},
    config::Config,
    storage::Db,
    upload::UploadStore,
};

/// 应用程序上下文
///
/// [`AppState`] 封装了数据库连接池、令牌密钥、管理员账号和上传目录，
/// 在启动时构造一次，之后各请求共享只读访问。
#[derive(Clone, FromRef)]
pub struct AppState {
    pool: Db,
    tokens: Arc<TokenKeys>,
    admin: Arc<AdminCredentials>,
    uploads: Arc<UploadStore>,
}

impl AppState {
    /// 创建一个新的 [`AppState`] 实例
    pub fn new(
        pool: Db,
        tokens: TokenKeys,
        admin: AdminCredentials,
        uploads: UploadStore,
    ) -> Self {
        Self {
            pool,
            tokens: Arc::new(tokens),
            admin: Arc::new(admin),
            uploads: Arc::new(uploads),
        }
    }

    /// 根据配置构造各组件
    pub fn from_config(pool: Db, config: &Config) -> Self {
        Self::new(
            pool,
            TokenKeys::new(&config.jwt_secret),
            AdminCredentials::new(&config.admin_email, &config.admin_password),
            UploadStore::new(&config.upload_dir),
        )
    }

    /// 获取上传目录
    pub fn uploads(&self) -> &UploadStore {
        &self.uploads
    }
}
