use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;

use crate::services::activity_directory::DirectoryError;

/// Rejection returned by the JSON handlers. Rendered as `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    Directory(DirectoryError),
    MissingQueryParam(&'static str),
    /// The path or query string could not be extracted at all.
    Rejected { status: StatusCode, detail: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Directory(DirectoryError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Directory(DirectoryError::AlreadySignedUp { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Directory(DirectoryError::NotSignedUp { .. }) => StatusCode::BAD_REQUEST,
            ApiError::MissingQueryParam(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected { status, .. } => *status,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::Directory(e) => e.to_string(),
            ApiError::MissingQueryParam(name) => {
                format!("missing required query parameter: {}", name)
            }
            ApiError::Rejected { detail, .. } => detail.clone(),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(e: DirectoryError) -> Self {
        ApiError::Directory(e)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}
