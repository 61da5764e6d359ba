use serde::{Deserialize, Serialize};

use super::utils::{round_to, utc_timestamp};

// Placeholders until the model reports its own uncertainty.
pub const CONFIDENCE_SCORE: f64 = 0.93;
pub const STANDARD_DEVIATION: f64 = 5.2;

/// Response body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub bone_age_months: f64,
    #[serde(rename = "confidenceScore")]
    pub confidence_score: f64,
    #[serde(rename = "standardDeviation")]
    pub standard_deviation: f64,
    pub timestamp: String,
}

impl PredictionResult {
    pub fn new(bone_age_months: f64) -> Self {
        Self {
            bone_age_months: round_to(bone_age_months, 2),
            confidence_score: CONFIDENCE_SCORE,
            standard_deviation: STANDARD_DEVIATION,
            timestamp: utc_timestamp(),
        }
    }
}

/// A prediction as the web client displayed it, posted back for logging.
///
/// Every field is optional; whatever the client sends is logged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggedPrediction {
    pub bone_age_months: f64,
    pub confidence_score: f64,
    pub standard_deviation: f64,
    pub timestamp: String,
    pub image_url: String,
}
