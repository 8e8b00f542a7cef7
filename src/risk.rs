use crate::features::NORMAL_LABEL;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use utoipa::ToSchema;

const MEDIUM_RISK_BELOW: f64 = 0.7;
const HIGH_RISK_BELOW: f64 = 0.85;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ToSchema)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Risk tier of a prediction
    ///
    /// Benign traffic is always [RiskLevel::Low], for attacks the tier grows with the
    /// confidence reported by the classification source.
    pub fn from_prediction(label: &str, confidence: f64) -> Self {
        if label == NORMAL_LABEL {
            Self::Low
        } else if confidence < MEDIUM_RISK_BELOW {
            Self::Medium
        } else if confidence < HIGH_RISK_BELOW {
            Self::High
        } else {
            Self::Critical
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        };
        write!(f, "{}", name)
    }
}

/// Where a prediction came from
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PredictionSource {
    Model,
    Fallback,
}

impl Default for PredictionSource {
    fn default() -> Self {
        Self::Model
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PredictionResult {
    #[serde(rename = "prediction")]
    pub label: String,
    pub confidence: f64,
    pub probabilities: BTreeMap<String, f64>,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub source: PredictionSource,
}

impl PredictionResult {
    pub fn with_source(mut self, source: PredictionSource) -> Self {
        self.source = source;
        self
    }

    /// The `n` most probable classes, highest first
    pub fn top_probabilities(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked = self
            .probabilities
            .iter()
            .map(|(class, p)| (class.as_str(), *p))
            .collect::<Vec<(&str, f64)>>();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Scale a probability mapping so that its values sum to one
///
/// A mapping whose values do not have a positive finite sum can not be scaled, it is
/// replaced with a uniform distribution over the same classes.
pub fn normalize(probabilities: BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    let total: f64 = probabilities.values().sum();

    if total > 0.0 && total.is_finite() {
        probabilities
            .into_iter()
            .map(|(class, p)| (class, p / total))
            .collect()
    } else {
        let uniform = 1.0 / probabilities.len() as f64;
        probabilities
            .into_keys()
            .map(|class| (class, uniform))
            .collect()
    }
}

/// Build the final prediction out of raw classifier output
///
/// The risk tier is derived from the `confidence` as reported, before the
/// probabilities are normalized.
pub fn normalize_and_tier(
    probabilities: BTreeMap<String, f64>,
    label: String,
    confidence: f64,
) -> PredictionResult {
    let risk_level = RiskLevel::from_prediction(&label, confidence);

    PredictionResult {
        label,
        confidence,
        probabilities: normalize(probabilities),
        risk_level,
        source: PredictionSource::Model,
    }
}
