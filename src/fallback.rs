//! Heuristic stand-in for the classification service
//!
//! It is used only when the remote model can not be reached. The outcome is driven by a
//! handful of threshold rules and the randomness is taken from the caller, so a seeded
//! or stepping generator makes the result fully reproducible.

use crate::features::{FeatureVector, ATTACK_TYPES, NORMAL_LABEL};
use crate::risk::{normalize_and_tier, PredictionResult, PredictionSource};
use log::debug;
use rand::Rng;
use std::collections::BTreeMap;
use std::ops::Range;

const SERROR_RATE_THRESHOLD: f64 = 0.5;
const DST_HOST_COUNT_THRESHOLD: f64 = 200.0;
const SYN_WITHOUT_REPLY_FLAG: &str = "S0";

const ATTACK_CONFIDENCE: Range<f64> = 0.75..0.95;
const ATTACK_RUNNERS_UP: usize = 3;
const ATTACK_RUNNER_UP_CEILING: f64 = 0.1;

const NORMAL_CONFIDENCE: Range<f64> = 0.85..0.95;
const NORMAL_RUNNERS_UP: usize = 4;

/// Whether a connection resembles an intrusion
///
/// Any single rule is enough: a high SYN error rate, a destination host contacted by
/// many connections, an unanswered SYN or a connection which carried no data at all.
pub fn is_attack_likely(vector: &FeatureVector) -> bool {
    vector.serror_rate > SERROR_RATE_THRESHOLD
        || vector.dst_host_count > DST_HOST_COUNT_THRESHOLD
        || vector.flag == SYN_WITHOUT_REPLY_FLAG
        || (vector.src_bytes == 0.0 && vector.dst_bytes == 0.0)
}

pub fn predict<R: Rng + ?Sized>(vector: &FeatureVector, rng: &mut R) -> PredictionResult {
    let (label, confidence, probabilities) = if is_attack_likely(vector) {
        attack_guess(rng)
    } else {
        normal_guess(rng)
    };

    debug!("Fallback prediction: {label} with confidence {confidence:.3}");

    normalize_and_tier(probabilities, label, confidence).with_source(PredictionSource::Fallback)
}

fn attack_guess<R: Rng + ?Sized>(rng: &mut R) -> (String, f64, BTreeMap<String, f64>) {
    let label = ATTACK_TYPES[rng.gen_range(0..ATTACK_TYPES.len())];
    let confidence = rng.gen_range(ATTACK_CONFIDENCE);

    let mut probabilities = BTreeMap::new();
    probabilities.insert(label.to_owned(), confidence);
    probabilities.insert(NORMAL_LABEL.to_owned(), below(rng, 1.0 - confidence));
    for other in ATTACK_TYPES
        .iter()
        .filter(|attack| **attack != label)
        .take(ATTACK_RUNNERS_UP)
    {
        probabilities.insert((*other).to_owned(), below(rng, ATTACK_RUNNER_UP_CEILING));
    }

    (label.to_owned(), confidence, probabilities)
}

fn normal_guess<R: Rng + ?Sized>(rng: &mut R) -> (String, f64, BTreeMap<String, f64>) {
    let confidence = rng.gen_range(NORMAL_CONFIDENCE);
    let runner_up_ceiling = (1.0 - confidence) / NORMAL_RUNNERS_UP as f64;

    let mut probabilities = BTreeMap::new();
    probabilities.insert(NORMAL_LABEL.to_owned(), confidence);
    for attack in ATTACK_TYPES.iter().take(NORMAL_RUNNERS_UP) {
        probabilities.insert((*attack).to_owned(), below(rng, runner_up_ceiling));
    }

    (NORMAL_LABEL.to_owned(), confidence, probabilities)
}

/// Uniform draw from `[0, ceiling)`, zero for an empty range
fn below<R: Rng + ?Sized>(rng: &mut R, ceiling: f64) -> f64 {
    if ceiling > 0.0 {
        rng.gen_range(0.0..ceiling)
    } else {
        0.0
    }
}
