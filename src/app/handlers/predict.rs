use crate::app::errors::{AppError, ResponderErr};
use crate::app::models::ApiResponse;
use crate::classification_client::Classify;
use crate::features::FeatureVector;
use crate::submission::{submit, Submission};
use actix_web::{http, web, HttpResponse};

/// Classify a network connection
///
/// Validates the submitted features and, when they are well formed, asks the
/// classification service for a prediction. If the service can not be reached a
/// heuristic prediction is returned instead.
///
/// Example
///
/// ```text
/// curl -X POST -H 'Content-Type: application/json' -d @connection.json localhost:8080/predict
/// ```
#[utoipa::path(
    post,
    path = "/predict",
    request_body = FeatureVector,
    responses(
        (status = 200, description = "Connection classified", body = ApiResponse),
        (status = 422, description = "Features violate their constraints", body = ApiResponse),
        (status = 500, description = "Request could not be processed", body = ApiResponse),
    ),
)]
pub async fn predict<C: Classify + 'static>(
    classifier: web::Data<C>,
    body: web::Bytes,
) -> Result<HttpResponse, ResponderErr> {
    let vector: FeatureVector = serde_json::from_slice(&body).map_err(AppError::from)?;

    let response = match submit(classifier.get_ref(), &vector).await {
        Submission::Rejected(errors) => HttpResponse::build(http::StatusCode::UNPROCESSABLE_ENTITY)
            .json(ApiResponse::rejected(errors)),
        Submission::Classified(prediction) => {
            HttpResponse::build(http::StatusCode::OK).json(ApiResponse::classified(prediction))
        }
    };

    Ok(response)
}
