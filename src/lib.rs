pub mod app;
pub mod classification_client;
pub mod fallback;
pub mod features;
pub mod risk;
pub mod submission;
pub mod validation;
