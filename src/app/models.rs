use crate::risk::PredictionResult;
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope of every `/predict` answer
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PredictionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

impl ApiResponse {
    pub fn classified(prediction: PredictionResult) -> Self {
        Self {
            success: true,
            data: Some(prediction),
            error: None,
            errors: vec![],
        }
    }

    pub fn rejected(errors: Vec<ValidationError>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some("Validation failed".to_owned()),
            errors,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            errors: vec![],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub classifier_url: String,
}
