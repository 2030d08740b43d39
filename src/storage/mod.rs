mod article_storage;
mod models;
mod postgres;
mod project_storage;

pub use self::{
    article_storage::ArticleStorage,
    models::{ArticleCounts, ArticleRow, ProjectRow},
    postgres::{Db, migrate, new_db_pool, new_lazy_db_pool},
    project_storage::ProjectStorage,
};
