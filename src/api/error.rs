use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::RatingError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Missing user identity")]
    Unauthorized,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Map storage errors, surfacing validation failures to the client.
    pub fn from_storage(e: anyhow::Error) -> Self {
        match e.downcast_ref::<RatingError>() {
            Some(RatingError::UnknownLesson(_)) => ApiError::NotFound(e.to_string()),
            Some(RatingError::OutOfRange(_)) => ApiError::BadRequest(e.to_string()),
            None => ApiError::Internal(e),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Internal details stay in the server log.
        let message = match &self {
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                "Internal server error".to_string()
            }
            other => {
                tracing::warn!("Request rejected ({}): {}", status, other);
                other.to_string()
            }
        };
        (status, message).into_response()
    }
}
