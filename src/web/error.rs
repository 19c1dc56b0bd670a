use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::database::activities_repo::DirectoryError;
use crate::models::ErrorResult;

#[derive(Debug)]
pub enum ApiError {
    Directory(DirectoryError),
    InvalidQuery(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Directory(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::Directory(e) => e.to_string(),
            ApiError::InvalidQuery(msg) => msg.clone(),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(e: DirectoryError) -> Self {
        ApiError::Directory(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        warn!(status = %status, detail = %detail, "activities request rejected");
        (status, Json(ErrorResult { detail })).into_response()
    }
}
