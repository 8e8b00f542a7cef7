use super::handlers::{health, predict};
use super::models::{ApiResponse, HealthStatus};
use crate::features::FeatureVector;
use crate::risk::{PredictionResult, PredictionSource, RiskLevel};
use crate::validation::ValidationError;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        predict::predict,
        health::health,
        health::healthz,
    ),
    components(
        schemas(
            FeatureVector,
            PredictionResult,
            PredictionSource,
            RiskLevel,
            ValidationError,
            ApiResponse,
            HealthStatus,
        ),
    ),
    tags(
        (name = "predictor", description = "Network connection classification endpoints")
    ),
)]
pub struct ApiDoc;
