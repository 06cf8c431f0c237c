//! Typed errors and HTTP mapping.
//!
//! Every failure on a request path is a value of [`AppError`]; a single
//! translation point ([`IntoResponse`]) picks the status code and renders
//! the wire body, logging the failure first.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("config: {0}")]
    Config(String),
}

/// Wire error body. `exceptionType` names the error kind, `code` duplicates
/// the HTTP status; both are parsed by existing clients. Messages are not
/// sanitized (internal tool).
#[derive(Serialize)]
pub struct ErrorBody {
    #[serde(rename = "exceptionType")]
    pub exception_type: &'static str,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Db(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn exception_type(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NotFoundError",
            AppError::Validation(_) => "ValidationError",
            AppError::Db(_) => "DatabaseError",
            AppError::Config(_) => "ConfigError",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(error = %self, code = status.as_u16(), "failed to handle request");
        let body = ErrorBody {
            exception_type: self.exception_type(),
            code: status.as_u16(),
            error: Some(self.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = AppError::NotFound("supplier with id 7 does not exist".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["exceptionType"], "NotFoundError");
        assert_eq!(body["code"], 404);
        assert_eq!(body["error"], "supplier with id 7 does not exist");
    }

    #[tokio::test]
    async fn validation_maps_to_422() {
        let response = AppError::Validation("name must not be empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["exceptionType"], "ValidationError");
        assert_eq!(body["code"], 422);
    }

    #[tokio::test]
    async fn unclassified_maps_to_500() {
        let response = AppError::Db(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["exceptionType"], "DatabaseError");
        assert_eq!(body["code"], 500);
    }
}
