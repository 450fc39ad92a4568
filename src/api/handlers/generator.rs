// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use log::{debug, warn};

use crate::api::error::ApiError;
use crate::api::types::{GenerationCriteria, PasswordGenerationRequest, PasswordGenerationResponse};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;

/// Generate a password from query parameters
///
/// Every parameter is optional; missing ones fall back to the service defaults.
#[utoipa::path(
    get,
    path = "/generate",
    tag = "Generator",
    params(PasswordGenerationRequest),
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid parameters", body = crate::api::types::ErrorResponse),
        (status = 500, description = "Server error", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn generate_password_query(
    config: web::Data<Config>,
    query: web::Query<PasswordGenerationRequest>,
) -> Result<HttpResponse, ApiError> {
    generate(&config, &query)
}

/// Generate a password from a JSON body
///
/// An empty body is treated like an empty object.
#[utoipa::path(
    post,
    path = "/generate",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid parameters or malformed JSON", body = crate::api::types::ErrorResponse),
        (status = 500, description = "Server error", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn generate_password_json(
    config: web::Data<Config>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let generation_req: PasswordGenerationRequest = if body.iter().all(u8::is_ascii_whitespace) {
        PasswordGenerationRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            warn!("Rejected malformed generation payload: {}", e);
            ApiError::from(e)
        })?
    };

    generate(&config, &generation_req)
}

fn generate(config: &Config, generation_req: &PasswordGenerationRequest) -> Result<HttpResponse, ApiError> {
    let options = generation_req.to_options(config);

    let generator = PasswordGenerator::new();
    let password = generator.generate_password(&options).map_err(|e| {
        warn!("Password generation rejected: {}", e);
        ApiError::from(e)
    })?;

    let criteria = GenerationCriteria::from(&options);
    debug!("Generated password with criteria {:?}", criteria);

    Ok(HttpResponse::Ok().json(PasswordGenerationResponse {
        strength: generator.analyze_password_strength(&password),
        password,
        criteria,
    }))
}
