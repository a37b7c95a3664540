// Centralized error handling for the account service

use crate::models::forms::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

/// Errors returned by the account store
#[derive(Error, Debug)]
pub enum AccountError {
    /// Missing or inconsistent input; nothing was written
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    /// Same error for an unknown username and a wrong password
    #[error("invalid credentials")]
    Authentication,

    #[error("storage unavailable: {0:#}")]
    StorageUnavailable(#[from] anyhow::Error),
}

impl AccountError {
    pub fn missing_field() -> Self {
        AccountError::Validation("missing field".to_string())
    }

    pub fn password_mismatch() -> Self {
        AccountError::Validation("password mismatch".to_string())
    }

    pub fn username_exists() -> Self {
        AccountError::Conflict("username exists".to_string())
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AccountError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AccountError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            AccountError::Authentication => (StatusCode::UNAUTHORIZED, self.to_string()),
            AccountError::StorageUnavailable(e) => {
                error!(error = ?e, "User table unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage unavailable".to_string(),
                )
            }
        };

        error_response(status, error_message)
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("missing session token")]
    MissingToken,

    #[error("session expired or unknown")]
    Expired,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        error_response(StatusCode::UNAUTHORIZED, self.to_string())
    }
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("invalid blood group: {0}")]
    InvalidBloodGroup(String),

    #[error("unknown area: {0}")]
    UnknownArea(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        match self {
            DirectoryError::Session(e) => e.into_response(),
            other => error_response(StatusCode::BAD_REQUEST, other.to_string()),
        }
    }
}

pub fn error_response(status: StatusCode, error: String) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error,
        }),
    )
        .into_response()
}
