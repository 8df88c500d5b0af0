use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::Json,
};
use foodie_store::StoreError;
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    StoreFailure(#[from] StoreError),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreFailure(e) => {
                error!(error = %e, "store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Turns an empty result set into [`ApiError::NotFound`].
pub fn non_empty<T>(rows: Vec<T>, message: impl FnOnce() -> String) -> Result<Vec<T>, ApiError> {
    if rows.is_empty() {
        return Err(ApiError::NotFound(message()));
    }
    Ok(rows)
}
