use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Everything the auth endpoints can fail with. Each variant renders to the
/// exact wire payload the mobile client expects, so the messages here are
/// part of the contract.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid role")]
    InvalidRole,
    #[error("User already exists")]
    AlreadyExists,
    #[error("Invalid phone number or password")]
    InvalidCredentials,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            // Lost the check-then-insert race: the unique constraint is the
            // source of truth, so this is a conflict, not a server fault.
            StoreError::DuplicateKey => ApiError::AlreadyExists,
            StoreError::Unavailable(source) => ApiError::Internal(source),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Validation failures use the "error" key, auth outcomes use
        // "message". Lopsided, but clients match on it.
        let (status, body) = match &self {
            ApiError::MissingFields | ApiError::InvalidRole => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            ApiError::AlreadyExists | ApiError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, json!({ "message": self.to_string() }))
            }
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": e.to_string() }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
