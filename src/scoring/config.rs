use serde::{Deserialize, Serialize};

/// Main scoring configuration.
///
/// Every field is optional; anything left out falls back to the built-in
/// behaviour.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   clamp_completion_rate: false
///   estimators:
///     sentiment: 70
///     authenticity: 85
///     diversity: 75
///     social_good: 80
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Cap watch-time completion at 100% before weighting (default: false)
    #[serde(default)]
    pub clamp_completion_rate: Option<bool>,

    /// Fixed values for the analytics signals that have no real estimator
    #[serde(default)]
    pub estimators: Option<EstimatorConfig>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            clamp_completion_rate: Some(false),
            estimators: Some(EstimatorConfig::default()),
        }
    }
}

/// Constant estimator values, each on a 0-100 scale.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EstimatorConfig {
    /// Share of positive audience reaction (default: 70)
    #[serde(default)]
    pub sentiment: Option<f64>,

    /// Engine-level authenticity signal (default: 85)
    #[serde(default)]
    pub authenticity: Option<f64>,

    /// Audience diversity (default: 75)
    #[serde(default)]
    pub diversity: Option<f64>,

    /// Positive social impact (default: 80)
    #[serde(default)]
    pub social_good: Option<f64>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        use super::estimators::{
            DEFAULT_AUTHENTICITY, DEFAULT_DIVERSITY, DEFAULT_SENTIMENT, DEFAULT_SOCIAL_GOOD,
        };

        Self {
            sentiment: Some(DEFAULT_SENTIMENT),
            authenticity: Some(DEFAULT_AUTHENTICITY),
            diversity: Some(DEFAULT_DIVERSITY),
            social_good: Some(DEFAULT_SOCIAL_GOOD),
        }
    }
}
