use super::models::ApiResponse;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use derive_more::{Display, Error};
use log::error;
use std::io::Error as IoErr;

#[derive(Debug)]
pub enum ConfigErr {
    Read(config::ConfigError),
    MissingSetting(String),
}

impl From<ConfigErr> for IoErr {
    fn from(c: ConfigErr) -> Self {
        match c {
            ConfigErr::Read(e) => {
                IoErr::new::<config::ConfigError>(std::io::ErrorKind::Unsupported, e)
            }
            ConfigErr::MissingSetting(e) => {
                IoErr::new::<String>(std::io::ErrorKind::InvalidInput, e)
            }
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    MalformedRequest(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        error!(target: "deserialization_from_json", "{e}");
        Self::MalformedRequest(e.to_string())
    }
}

impl From<AppError> for ResponderErr {
    fn from(e: AppError) -> Self {
        match e {
            AppError::MalformedRequest(_) => Self::InternalError,
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum ResponderErr {
    #[display(fmt = "Failed to process prediction")]
    InternalError,
}

impl actix_web::error::ResponseError for ResponderErr {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::failed(self.to_string()))
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
