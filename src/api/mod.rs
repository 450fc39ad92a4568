// src/api/mod.rs
use actix_web::{middleware::Logger, web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password_query,
        crate::api::handlers::generator::generate_password_json,

        // System endpoints
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::GenerationCriteria,
            crate::api::types::ErrorResponse,
            crate::api::types::HealthResponse
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "System", description = "Service health")
    ),
    info(
        title = "Password Generator API",
        version = "0.1.0",
        description = "Random password generation service",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    log::info!(
        "Starting password generator API server on {}:{}",
        config.web_address,
        config.web_port
    );
    if config.secret_key.is_none() {
        log::warn!("SECRET_KEY is not set; running with development settings");
    }

    let bind_address = (config.web_address.clone(), config.web_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

pub mod error;
pub mod types;
pub mod routes;
pub mod handlers;
