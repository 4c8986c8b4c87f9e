use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("missing {0} parameter")]
    MissingParam(&'static str),

    #[error("malformed {0} parameter")]
    BadParam(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// Turns a lookup miss into a 404 naming the resource; anything else
    /// stays a store failure.
    pub fn lookup(resource: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound(resource),
            other => AppError::Store(other),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MissingParam { .. } | AppError::BadParam { .. } => StatusCode::BAD_REQUEST,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("{self}");
        }

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
