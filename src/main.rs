use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use log::info;
use predictor::app::routes;
use predictor::app::state;
use predictor::classification_client::HttpClassifier;

#[actix_web::main]
async fn main() -> Result<(), std::io::Error> {
    // Setup logger
    let env = env_logger::Env::default();
    env_logger::init_from_env(env);

    let state = state::State::new()?;
    let settings = state.config()?;
    let http_port = settings.http_port;

    info!("Starting predictor on port {http_port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(HttpClassifier::from_settings(&settings)))
            .app_data(web::Data::new(settings.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(routes)
    })
    .bind(("0.0.0.0", http_port))?
    .run()
    .await
}
