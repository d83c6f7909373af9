//! Analytics signals that feed the value score but have no real model yet.
//!
//! Sentiment, authenticity, diversity and social good would come from
//! comment NLP, descriptor analysis, audience demographics and content
//! safety checks. Until those exist each signal is an [`Estimator`], and the
//! defaults return fixed values.

use super::config::EstimatorConfig;
use super::metrics::RawContentMetrics;

/// 70% positive comments
pub const DEFAULT_SENTIMENT: f64 = 70.0;
pub const DEFAULT_AUTHENTICITY: f64 = 85.0;
pub const DEFAULT_DIVERSITY: f64 = 75.0;
pub const DEFAULT_SOCIAL_GOOD: f64 = 80.0;

/// Produces one 0-100 signal from a video's metrics.
pub trait Estimator: Send + Sync {
    fn estimate(&self, metrics: &RawContentMetrics) -> f64;
}

impl<F> Estimator for F
where
    F: Fn(&RawContentMetrics) -> f64 + Send + Sync,
{
    fn estimate(&self, metrics: &RawContentMetrics) -> f64 {
        self(metrics)
    }
}

/// Ignores the metrics and always returns the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantEstimator(pub f64);

impl Estimator for ConstantEstimator {
    fn estimate(&self, _metrics: &RawContentMetrics) -> f64 {
        self.0
    }
}

/// Signal values for one video, each clamped to 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    pub sentiment: f64,
    pub authenticity: f64,
    pub diversity: f64,
    pub social_good: f64,
}

/// The full set of estimators used by the value scorer.
pub struct Estimators {
    pub sentiment: Box<dyn Estimator>,
    pub authenticity: Box<dyn Estimator>,
    pub diversity: Box<dyn Estimator>,
    pub social_good: Box<dyn Estimator>,
}

impl Default for Estimators {
    fn default() -> Self {
        Self::from_config(&EstimatorConfig::default())
    }
}

impl Estimators {
    /// Build constant estimators, using the defaults for unset values.
    pub fn from_config(config: &EstimatorConfig) -> Self {
        let constant = |value: Option<f64>, default: f64| -> Box<dyn Estimator> {
            Box::new(ConstantEstimator(value.unwrap_or(default)))
        };

        Self {
            sentiment: constant(config.sentiment, DEFAULT_SENTIMENT),
            authenticity: constant(config.authenticity, DEFAULT_AUTHENTICITY),
            diversity: constant(config.diversity, DEFAULT_DIVERSITY),
            social_good: constant(config.social_good, DEFAULT_SOCIAL_GOOD),
        }
    }

    pub fn with_sentiment(mut self, estimator: impl Estimator + 'static) -> Self {
        self.sentiment = Box::new(estimator);
        self
    }

    pub fn with_authenticity(mut self, estimator: impl Estimator + 'static) -> Self {
        self.authenticity = Box::new(estimator);
        self
    }

    pub fn with_diversity(mut self, estimator: impl Estimator + 'static) -> Self {
        self.diversity = Box::new(estimator);
        self
    }

    pub fn with_social_good(mut self, estimator: impl Estimator + 'static) -> Self {
        self.social_good = Box::new(estimator);
        self
    }

    pub fn estimate(&self, metrics: &RawContentMetrics) -> Signals {
        use super::engine::clamp_score;

        Signals {
            sentiment: clamp_score(self.sentiment.estimate(metrics)),
            authenticity: clamp_score(self.authenticity.estimate(metrics)),
            diversity: clamp_score(self.diversity.estimate(metrics)),
            social_good: clamp_score(self.social_good.estimate(metrics)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_signals() {
        let signals = Estimators::default().estimate(&RawContentMetrics::default());
        assert_eq!(
            signals,
            Signals {
                sentiment: 70.0,
                authenticity: 85.0,
                diversity: 75.0,
                social_good: 80.0,
            }
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = EstimatorConfig {
            sentiment: Some(40.0),
            authenticity: None,
            diversity: None,
            social_good: None,
        };
        let signals = Estimators::from_config(&config).estimate(&RawContentMetrics::default());
        assert_eq!(signals.sentiment, 40.0);
        assert_eq!(signals.authenticity, 85.0);
    }

    #[test]
    fn test_closure_estimator() {
        let estimators = Estimators::default()
            .with_sentiment(|m: &RawContentMetrics| if m.comments > 100.0 { 90.0 } else { 50.0 });

        let quiet = RawContentMetrics::default();
        let busy = RawContentMetrics {
            comments: 500.0,
            ..Default::default()
        };
        assert_eq!(estimators.estimate(&quiet).sentiment, 50.0);
        assert_eq!(estimators.estimate(&busy).sentiment, 90.0);
    }

    #[test]
    fn test_estimates_are_clamped() {
        let estimators = Estimators::default()
            .with_diversity(ConstantEstimator(250.0))
            .with_social_good(ConstantEstimator(-3.0))
            .with_authenticity(ConstantEstimator(f64::NAN));
        let signals = estimators.estimate(&RawContentMetrics::default());
        assert_eq!(signals.diversity, 100.0);
        assert_eq!(signals.social_good, 0.0);
        assert_eq!(signals.authenticity, 0.0);
    }
}
