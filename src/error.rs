//! Unified application error model and HTTP mapping.
//! Every gate and handler failure funnels through `AppError` so that each
//! request terminates with exactly one response carrying a fixed status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No `Authorization` header (or no token segment inside it).
    #[error("missing credentials")]
    MissingCredentials,
    /// Signature or expiry failure on a presented token.
    #[error("invalid token: {0}")]
    InvalidToken(String),
    /// Role or ownership mismatch.
    #[error("forbidden")]
    Forbidden,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Payment provider rejected or failed the intent call.
    #[error("payment provider failure: {0}")]
    Payment(String),
    #[error("internal error")]
    Internal(anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingCredentials | AppError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Payment(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Full detail stays server-side; 5xx bodies carry a generic message.
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!(target: "guru", "internal error: {e:#}");
                "internal server error".to_string()
            }
            AppError::Payment(detail) => {
                tracing::error!(target: "guru", "payment provider failure: {detail}");
                "payment provider failure".to_string()
            }
            other => other.to_string(),
        };
        (self.status(), Json(json!({ "error": true, "message": message }))).into_response()
    }
}
