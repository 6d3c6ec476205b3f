use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use gist_common::GistError;
use std::fmt;
use tracing::{error, warn};

use crate::types::ErrorResponse;

/// HTTP-facing wrapper around [`GistError`]
#[derive(Debug)]
pub struct ApiError(pub GistError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<GistError> for ApiError {
    fn from(err: GistError) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        if self.0.is_client_error() {
            warn!("Rejected request: {}", self.0);
        } else {
            error!("Request failed: {}", self.0);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.0.to_string(),
        })
    }
}
