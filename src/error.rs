use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::hnb::RateUnavailable;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("invalid movie id: {0}")]
    InvalidId(String),

    #[error("movie code {0} already exists")]
    DuplicateCode(String),

    #[error("movie not found")]
    NotFound,

    #[error(transparent)]
    RateUnavailable(#[from] RateUnavailable),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidId(_) | Self::DuplicateCode(_) => {
                StatusCode::BAD_REQUEST
            },
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::RateUnavailable(_) | Self::Database(_) | Self::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    /// Client errors echo their message; server faults stay generic.
    fn response_message(&self) -> String {
        match self {
            Self::RateUnavailable(e) => e.to_string(),
            Self::Database(_) | Self::Other(_) => "internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }

        let body = ErrorBody {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.response_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
