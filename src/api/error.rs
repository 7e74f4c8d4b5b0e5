use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{OrderError, QuoteError};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

/// Error payload returned to clients
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub detail: String,
}

impl From<OrderError> for ApiError {
    fn from(error: OrderError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<QuoteError> for ApiError {
    fn from(error: QuoteError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::InternalServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        warn!(status = %status, detail = %detail, "Rejected request");

        (status, Json(ErrorBody { detail })).into_response()
    }
}
