use crate::app::config::Settings;
use crate::features::FeatureVector;
use crate::risk::PredictionResult;
use async_trait::async_trait;
use log::debug;
use std::fmt;
use std::time::Duration;

#[derive(Debug)]
pub enum ClientError {
    Transport(String),
    Status(u16),
    Payload(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "classification service unreachable: {e}"),
            Self::Status(code) => write!(f, "classification service responded with {code}"),
            Self::Payload(e) => write!(f, "invalid classification payload: {e}"),
        }
    }
}

/// Remote model which turns a feature vector into a prediction
#[async_trait(?Send)]
pub trait Classify {
    async fn classify(&self, vector: &FeatureVector) -> Result<PredictionResult, ClientError>;
}

/// Classification service reached over http
///
/// Posts the feature vector as json to `{base_url}/predict`. Any transport error,
/// timeout, unsuccessful status or undecodable body is reported as [ClientError].
pub struct HttpClassifier {
    client: awc::Client,
    base_url: String,
}

impl HttpClassifier {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: awc::Client::builder().timeout(timeout).finish(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.classifier_url(),
            Duration::from_secs(settings.classifier_timeout_secs),
        )
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

#[async_trait(?Send)]
impl Classify for HttpClassifier {
    async fn classify(&self, vector: &FeatureVector) -> Result<PredictionResult, ClientError> {
        let url = self.predict_url();
        debug!("Sending features to {url}");

        let mut response = self
            .client
            .post(url)
            .send_json(vector)
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let prediction = response
            .json::<PredictionResult>()
            .await
            .map_err(|e| ClientError::Payload(e.to_string()))?;

        check_payload(&prediction)?;

        Ok(prediction)
    }
}

/// Reject a service answer which can not be turned into a distribution
///
/// The confidence and every class probability must lie in `[0, 1]`, the mapping must
/// not be empty and the predicted label has to be one of its classes.
pub fn check_payload(prediction: &PredictionResult) -> Result<(), ClientError> {
    if !(0.0..=1.0).contains(&prediction.confidence) {
        return Err(ClientError::Payload(format!(
            "confidence {} is out of range",
            prediction.confidence
        )));
    }

    if prediction.probabilities.is_empty() {
        return Err(ClientError::Payload("no class probabilities".to_owned()));
    }

    if let Some((class, p)) = prediction
        .probabilities
        .iter()
        .find(|(_, p)| !(0.0..=1.0).contains(*p))
    {
        return Err(ClientError::Payload(format!(
            "probability {p} of {class} is out of range"
        )));
    }

    if !prediction.probabilities.contains_key(&prediction.label) {
        return Err(ClientError::Payload(format!(
            "predicted label {} has no probability",
            prediction.label
        )));
    }

    Ok(())
}
