//! API error kinds and their HTTP mapping

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fitlog_core::StoreError;
use serde_json::json;
use thiserror::Error;

/// Message for data routes when no store is configured
pub const STORE_UNAVAILABLE: &str = "Database client not initialized.";

/// Every failure a route can produce
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete request body
    #[error("{0}")]
    Validation(String),

    #[error("{}", STORE_UNAVAILABLE)]
    StoreUnavailable,

    /// The table store call failed, or a record could not be made into a row
    #[error(transparent)]
    Upstream(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::StoreUnavailable | ApiError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

/// Log a store failure with its context and convert it
pub fn upstream(context: &'static str) -> impl FnOnce(StoreError) -> ApiError {
    move |err| {
        tracing::error!("Error {}: {}", context, err);
        ApiError::Upstream(err)
    }
}

/// Log a failure to turn a record into a row and convert it
pub fn encoding(context: &'static str) -> impl FnOnce(StoreError) -> ApiError {
    move |err| {
        tracing::error!("Error encoding {}: {}", context, err);
        ApiError::Upstream(err)
    }
}

/// JSON body extractor whose rejections become [`ApiError::Validation`]
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);
