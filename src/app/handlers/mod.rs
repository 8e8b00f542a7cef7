pub mod doc;
pub mod health;
pub mod predict;
mod routes;

pub use routes::routes;
