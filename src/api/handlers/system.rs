// src/api/handlers/system.rs
use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

use crate::api::types::HealthResponse;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "password-generator".to_string(),
    })
}

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use crate::api::routes::configure_routes;
    use crate::core::config::Config;

    #[actix_web::test]
    async fn test_health_returns_payload() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Config::default()))
                .configure(configure_routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "healthy", "service": "password-generator" }));
    }

    #[actix_web::test]
    async fn test_index_serves_html() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Config::default()))
                .configure(configure_routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").and_then(|v| v.to_str().ok()),
            Some("text/html; charset=utf-8")
        );

        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("Password Generator"));
    }
}
