use std::io;

use axum::{
    extract::{
        multipart::MultipartError,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::config::ConfigError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Path(#[from] PathRejection),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// 错误对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) | Error::Json(_) | Error::Path(_) => StatusCode::BAD_REQUEST,
            Error::InvalidCredentials | Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Multipart(e) => e.status(),
            Error::Sqlx(_) | Error::Io(_) | Error::Token(_) | Error::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Error::Sqlx(e) => tracing::error!(%e, "sqlx error"),
            Error::Io(e) => tracing::error!(%e, "file io error"),
            Error::Token(e) => tracing::error!(%e, "token encoding error"),
            Error::Config(e) => tracing::error!(%e, "config error"),
            _ => {}
        }

        let body = match self {
            Error::Json(e) => e.body_text(),
            Error::Path(e) => e.body_text(),
            Error::Multipart(e) => e.body_text(),
            e => e.to_string(),
        };

        (status, body).into_response()
    }
}
