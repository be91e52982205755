use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_i18n::t;
use serde::Serialize;
use thiserror::Error;

use super::i18n::DEFAULT_LOCALE;

/// API Error with rich context and automatic error trait implementations
///
/// Each variant carries a numeric code whose range selects the HTTP status.
#[derive(Error, Debug)]
pub enum ApiError {
    // Catalog errors 2xxx
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    // Validation errors 4xxx
    #[error("Validation error: {0}")]
    ValidationError(String),

    // System errors 5xxx
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// Helper to create catalog unavailable error
    pub fn catalog_unavailable(reason: impl std::fmt::Display) -> Self {
        Self::CatalogUnavailable(reason.to_string())
    }

    /// Helper to create validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    pub fn error_code(&self) -> i32 {
        match self {
            Self::CatalogUnavailable(_) => 2001,

            Self::ValidationError(_) => 4001,

            Self::Database(_) => 5002,
            Self::Other(_) => 5001,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.error_code() {
            2001..=2999 => StatusCode::SERVICE_UNAVAILABLE,
            4001..=4999 => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Localized error message in the given bundle
    pub fn localized_message(&self, locale: &str) -> String {
        match self {
            Self::CatalogUnavailable(reason) => {
                t!("catalog.unavailable", locale = locale, reason = reason).to_string()
            },
            Self::ValidationError(details) => {
                t!("validation.failed", locale = locale, details = details).to_string()
            },
            Self::Database(err) => {
                t!("database.error", locale = locale, error = err.to_string()).to_string()
            },
            Self::Other(err) => {
                t!("internal.error", locale = locale, message = err.to_string()).to_string()
            },
        }
    }

    /// Attach the bundle the error body should be rendered in
    pub fn localized(self, locale: &'static str) -> LocalizedApiError {
        LocalizedApiError { error: self, locale }
    }
}

/// An [`ApiError`] rendered in the requesting visitor's bundle
#[derive(Debug)]
pub struct LocalizedApiError {
    pub error: ApiError,
    pub locale: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub code: i32,
    pub message: String,
}

impl IntoResponse for LocalizedApiError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let response = ApiErrorResponse {
            code: self.error.error_code(),
            message: self.error.localized_message(self.locale),
        };

        (status, Json(response)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.localized(DEFAULT_LOCALE).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::validation_error(errors.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
