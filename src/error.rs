use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum HnError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database URL cannot carry a path: {0}")]
    InvalidDatabaseUrl(String),

    #[error("invalid database path: {0:?}")]
    InvalidPath(String),

    #[error("item {0} not found")]
    ItemNotFound(String),
}

impl IntoResponse for HnError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            HnError::ItemNotFound(id) => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("Item {id} does not exist."),
                },
            ),
            HnError::InvalidPath(path) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "INVALID_ID".to_string(),
                    message: format!("{path:?} is not a valid item id."),
                },
            ),
            HnError::UrlParse(_) | HnError::InvalidDatabaseUrl(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "Database client is misconfigured.".to_string(),
                },
            ),
            HnError::Reqwest(_) | HnError::Json(_) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody {
                    code: "BAD_GATEWAY".to_string(),
                    message: "Upstream database is unavailable.".to_string(),
                },
            ),
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
