use serde::{Deserialize, Serialize};

pub const WEIGHT_TOTAL: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightConfig {
    pub weight_config_id: i64,
    pub verbal_weight: f64,
    pub domain_weight: f64,
    pub nonverbal_weight: f64,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWeightConfigRequest {
    pub verbal_weight: f64,
    pub domain_weight: f64,
    pub nonverbal_weight: f64,
    pub valid_weight_sum: bool,
}

impl UpdateWeightConfigRequest {
    /// The backend decides whether to accept the payload; this only reports
    /// whether the three weights add up to [`WEIGHT_TOTAL`].
    pub fn new(verbal_weight: f64, domain_weight: f64, nonverbal_weight: f64) -> Self {
        Self {
            verbal_weight,
            domain_weight,
            nonverbal_weight,
            valid_weight_sum: weights_sum_to_total(verbal_weight, domain_weight, nonverbal_weight),
        }
    }
}

pub fn weights_sum_to_total(verbal: f64, domain: f64, nonverbal: f64) -> bool {
    (verbal + domain + nonverbal - WEIGHT_TOTAL).abs() < 1e-6
}
