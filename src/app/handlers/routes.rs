use super::{doc, health, predict};
use crate::classification_client::HttpClassifier;
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(health::healthz));
    cfg.route("/health", web::get().to(health::health));
    cfg.route("/api-doc/openapi.json", web::get().to(doc::openapi_json));
    cfg.route(
        "/predict",
        web::post().to(predict::predict::<HttpClassifier>),
    );
}
