use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl ActivityError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActivityError::NotFound => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp
            | ActivityError::NotSignedUp
            | ActivityError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
