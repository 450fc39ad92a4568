// src/api/error.rs
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::api::types::ErrorResponse;
use crate::generators::GeneratorError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<GeneratorError> for ApiError {
    fn from(e: GeneratorError) -> Self {
        match e {
            GeneratorError::InvalidLength { .. } => ApiError::BadRequest(e.to_string()),
            // Only reachable if the length bounds and class count disagree
            GeneratorError::Unsatisfiable { .. } => {
                ApiError::Internal(format!("Failed to generate password: {}", e))
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("Invalid request payload: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_maps_to_bad_request() {
        let err: ApiError = GeneratorError::InvalidLength { length: 2, min: 4, max: 128 }.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("between 4 and 128"));
    }

    #[test]
    fn unsatisfiable_maps_to_internal_error() {
        let err: ApiError = GeneratorError::Unsatisfiable { required: 5, length: 4 }.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
