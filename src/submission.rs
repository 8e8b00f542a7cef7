use crate::classification_client::{check_payload, Classify};
use crate::fallback;
use crate::features::FeatureVector;
use crate::risk::{normalize_and_tier, PredictionResult, PredictionSource};
use crate::validation::{format_field_name, validate, ValidationError};
use log::{debug, info, warn};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The vector broke at least one constraint and was never sent for classification
    Rejected(Vec<ValidationError>),
    Classified(PredictionResult),
}

/// Validate a feature vector and classify it
///
/// Invalid vectors are returned with their violations without contacting the service.
/// When the classification service fails, the heuristic fallback answers instead and
/// the failure is only logged.
pub async fn submit<C: Classify + ?Sized>(classifier: &C, vector: &FeatureVector) -> Submission {
    submit_with_rng(classifier, vector, &mut rand::thread_rng()).await
}

pub async fn submit_with_rng<C: Classify + ?Sized, R: Rng + ?Sized>(
    classifier: &C,
    vector: &FeatureVector,
    rng: &mut R,
) -> Submission {
    let errors = validate(vector);
    if !errors.is_empty() {
        info!(
            "Rejected feature vector, invalid {}",
            errors
                .iter()
                .map(|e| format_field_name(&e.field))
                .collect::<Vec<String>>()
                .join(", ")
        );
        return Submission::Rejected(errors);
    }

    let answer = classifier
        .classify(vector)
        .await
        .and_then(|raw| check_payload(&raw).map(|_| raw));

    let result = match answer {
        Ok(raw) => normalize_and_tier(raw.probabilities, raw.label, raw.confidence)
            .with_source(PredictionSource::Model),
        Err(e) => {
            warn!("Falling back to heuristic prediction, {e}");
            fallback::predict(vector, rng)
        }
    };

    info!(
        "Classified connection as {} ({} risk, {:?})",
        result.label, result.risk_level, result.source
    );
    debug!("Most probable classes: {:?}", result.top_probabilities(3));
    Submission::Classified(result)
}
