use crate::app::config::Settings;
use crate::app::models::HealthStatus;
use actix_web::{http, web, HttpResponse, Responder};

/// Health check endpoint
///
/// Checks whether the server is capable of responding to a request
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Api is healthy", body = String),
    ),
)]
pub async fn healthz() -> impl Responder {
    HttpResponse::build(http::StatusCode::OK).body("OK".to_owned())
}

/// Health status with the classification service in use
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Api is healthy", body = HealthStatus),
    ),
)]
pub async fn health(settings: web::Data<Settings>) -> impl Responder {
    HttpResponse::build(http::StatusCode::OK).json(HealthStatus {
        status: "healthy".to_owned(),
        classifier_url: settings.classifier_url(),
    })
}
