use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// One of `sender`, `recipient`, `amount` was absent from the request.
    #[error("Missing values")]
    MissingValues,

    #[error("mining task failed: {0}")]
    Mining(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingValues => StatusCode::BAD_REQUEST,
            ApiError::Mining(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}
