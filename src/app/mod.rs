pub mod config;
mod doc;
pub mod errors;
mod handlers;
pub mod models;
pub mod state;

pub use handlers::routes;
