use crate::app::doc::ApiDoc;
use actix_web::{http, HttpResponse, Responder};
use utoipa::OpenApi;

/// OpenAPI document of the gateway
pub async fn openapi_json() -> impl Responder {
    HttpResponse::build(http::StatusCode::OK).json(ApiDoc::openapi())
}
