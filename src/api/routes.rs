// src/api/routes.rs
use actix_web::web;

use super::error::ApiError;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Bad query strings answer with the same JSON error shape as the handlers
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected malformed query string: {}", err);
        ApiError::BadRequest(format!("Invalid query parameters: {}", err)).into()
    }));

    cfg.route("/", web::get().to(handlers::system::index));
    cfg.route("/health", web::get().to(handlers::system::health));

    // GET reads the query string, POST reads a JSON body
    cfg.service(
        web::resource("/generate")
            .route(web::get().to(handlers::generator::generate_password_query))
            .route(web::post().to(handlers::generator::generate_password_json)),
    );
}
