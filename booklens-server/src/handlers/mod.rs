//! Request handlers

mod catalog;
mod preferences;

pub use catalog::*;
pub use preferences::*;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use booklens_core::{CatalogError, PreferencesError};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler failure, mapped to an HTTP status
#[derive(Debug)]
pub enum ApiError {
    Catalog(CatalogError),
    Preferences(PreferencesError),
    /// Request could not be extracted (bad query string, path or body)
    Rejected { status: StatusCode, message: String },
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::Catalog(err)
    }
}

impl From<PreferencesError> for ApiError {
    fn from(err: PreferencesError) -> Self {
        ApiError::Preferences(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Catalog(CatalogError::InvalidRequest(_)) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Catalog(_) => StatusCode::BAD_GATEWAY,
            ApiError::Preferences(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Catalog(err) => err.to_string(),
            ApiError::Preferences(err) => err.to_string(),
            ApiError::Rejected { message, .. } => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("Catalog request failed: {}", self.message());
        }

        (
            status,
            Json(ErrorResponse {
                error: self.message(),
            }),
        )
            .into_response()
    }
}
