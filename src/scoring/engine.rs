use serde::Serialize;
use tracing::debug;

use super::config::ScoringConfig;
use super::estimators::Estimators;
use super::metrics::RawContentMetrics;

/// The five additive terms of the value score.
///
/// `ValueScoreResult::score` is the clamped total of these terms and
/// `ValueScoreResult::breakdown` is the same terms rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreComponents {
    /// engagement x watch-time factor / 100
    pub engagement_component: f64,
    /// ripple effect x sentiment / 100
    pub ripple_component: f64,
    pub authenticity_bonus: f64,
    pub diversity_bonus: f64,
    pub social_good_bonus: f64,
}

impl ScoreComponents {
    pub fn total(&self) -> f64 {
        self.engagement_component
            + self.ripple_component
            + self.authenticity_bonus
            + self.diversity_bonus
            + self.social_good_bonus
    }

    /// Copy with every term rounded to 2 decimals, for display.
    pub fn rounded(&self) -> Self {
        Self {
            engagement_component: round2(self.engagement_component),
            ripple_component: round2(self.ripple_component),
            authenticity_bonus: round2(self.authenticity_bonus),
            diversity_bonus: round2(self.diversity_bonus),
            social_good_bonus: round2(self.social_good_bonus),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueScoreResult {
    /// The metrics after normalization
    pub metrics: RawContentMetrics,
    pub engagement: f64,
    pub watch_time_factor: f64,
    pub ripple_effect: f64,
    pub sentiment: f64,
    pub authenticity_score: f64,
    pub diversity_score: f64,
    pub social_good_score: f64,
    /// Final value score, 0-100
    pub score: f64,
    /// Unclamped sum of the components
    pub raw_total: f64,
    /// Components rounded to 2 decimals
    pub breakdown: ScoreComponents,
}

/// Computes value scores with a fixed set of estimators and settings.
pub struct ValueScorer {
    clamp_completion_rate: bool,
    estimators: Estimators,
}

impl Default for ValueScorer {
    fn default() -> Self {
        Self::new(Estimators::default())
    }
}

impl ValueScorer {
    pub fn new(estimators: Estimators) -> Self {
        Self {
            clamp_completion_rate: false,
            estimators,
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        let estimators = config
            .estimators
            .as_ref()
            .map(Estimators::from_config)
            .unwrap_or_default();

        Self::new(estimators).clamp_completion_rate(config.clamp_completion_rate.unwrap_or(false))
    }

    /// Cap completion rate at 1.0 so watch time beyond the video length
    /// stops adding to the score.
    pub fn clamp_completion_rate(mut self, enabled: bool) -> Self {
        self.clamp_completion_rate = enabled;
        self
    }

    pub fn score(&self, metrics: &RawContentMetrics) -> ValueScoreResult {
        let metrics = metrics.normalized();

        let engagement = engagement(&metrics);
        let watch_time_factor = watch_time_factor(
            metrics.watch_time,
            metrics.video_length,
            self.clamp_completion_rate,
        );
        let ripple_effect = ripple_effect(&metrics);
        let signals = self.estimators.estimate(&metrics);

        let components = ScoreComponents {
            engagement_component: engagement * watch_time_factor * 0.01,
            ripple_component: ripple_effect * signals.sentiment * 0.01,
            authenticity_bonus: signals.authenticity * 0.5,
            diversity_bonus: signals.diversity * 0.3,
            social_good_bonus: signals.social_good * 0.4,
        };
        let raw_total = components.total();
        let score = clamp_score(raw_total);

        debug!(
            engagement,
            watch_time_factor,
            ripple_effect,
            sentiment = signals.sentiment,
            raw_total,
            score,
            "computed value score"
        );

        ValueScoreResult {
            metrics,
            engagement,
            watch_time_factor,
            ripple_effect,
            sentiment: signals.sentiment,
            authenticity_score: signals.authenticity,
            diversity_score: signals.diversity,
            social_good_score: signals.social_good,
            score,
            raw_total,
            breakdown: components.rounded(),
        }
    }
}

/// Value score with the default estimators and settings.
pub fn compute_value_score(metrics: &RawContentMetrics) -> ValueScoreResult {
    ValueScorer::default().score(metrics)
}

/// Weighted interactions per view: likes 40%, comments 35%, shares 25%.
/// The rate is scaled by 10 so typical rates spread across 0-100.
pub fn engagement(metrics: &RawContentMetrics) -> f64 {
    if metrics.views == 0.0 {
        return 0.0;
    }

    let weighted = metrics.likes * 0.4 + metrics.comments * 0.35 + metrics.shares * 0.25;
    let rate = (weighted / metrics.views) * 100.0;
    clamp_score(rate * 10.0)
}

/// Completion rate weighted at 70 plus up to 30 points for raw watch time
/// (10 points per minute).
pub fn watch_time_factor(watch_time: f64, video_length: f64, clamp_completion: bool) -> f64 {
    if video_length == 0.0 {
        return 0.0;
    }

    let mut completion = watch_time / video_length;
    if clamp_completion {
        completion = completion.clamp(0.0, 1.0);
    }

    let completion_score = completion * 70.0;
    let watch_time_score = ((watch_time / 60.0) * 10.0).min(30.0);
    clamp_score(completion_score + watch_time_score)
}

/// Derivative content (stitches 40%, duets 35%, remixes 25%) on a log10
/// scale, 20 points per decade.
pub fn ripple_effect(metrics: &RawContentMetrics) -> f64 {
    let weighted = metrics.stitches * 0.4 + metrics.duets * 0.35 + metrics.remixes * 0.25;
    clamp_score((weighted + 1.0).log10() * 20.0)
}

/// Clamp to the 0-100 score range. NaN maps to 0.
pub(crate) fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::estimators::ConstantEstimator;
    use crate::scoring::sample::sample_metrics;
    use approx::assert_abs_diff_eq;

    fn metrics_with(f: impl FnOnce(&mut RawContentMetrics)) -> RawContentMetrics {
        let mut metrics = RawContentMetrics::default();
        f(&mut metrics);
        metrics
    }

    fn ripple_for_stitches(stitches: f64) -> f64 {
        ripple_effect(&metrics_with(|m| m.stitches = stitches))
    }

    #[test]
    fn test_zero_views_zero_engagement() {
        let metrics = metrics_with(|m| {
            m.likes = 500.0;
            m.comments = 20.0;
        });
        assert_eq!(engagement(&metrics), 0.0);
        assert_eq!(compute_value_score(&metrics).engagement, 0.0);
    }

    #[test]
    fn test_engagement_caps_at_100() {
        let metrics = metrics_with(|m| {
            m.views = 100.0;
            m.likes = 100.0;
        });
        assert_eq!(engagement(&metrics), 100.0);
    }

    #[test]
    fn test_zero_video_length_zero_watch_factor() {
        assert_eq!(watch_time_factor(45.0, 0.0, false), 0.0);
    }

    #[test]
    fn test_zero_video_length_is_coerced_before_scoring() {
        let metrics = metrics_with(|m| {
            m.watch_time = 0.5;
            m.video_length = 0.0;
        });
        let result = compute_value_score(&metrics);
        assert_eq!(result.metrics.video_length, 1.0);
        // completion 0.5 * 70 + (0.5 / 60) * 10
        assert_abs_diff_eq!(result.watch_time_factor, 35.0 + 5.0 / 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_watch_time_over_length_inflates_unless_clamped() {
        // completion 2.0 -> 140, capped at 100
        assert_eq!(watch_time_factor(20.0, 10.0, false), 100.0);
        // completion 1.0 -> 70, plus 20/60*10
        assert_abs_diff_eq!(
            watch_time_factor(20.0, 10.0, true),
            70.0 + 10.0 / 3.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_watch_time_bonus_caps_at_30() {
        // completion 0.1 -> 7, ten minutes of watch time -> capped 30
        assert_abs_diff_eq!(watch_time_factor(600.0, 6000.0, false), 37.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ripple_zero_without_derivatives() {
        assert_eq!(ripple_for_stitches(0.0), 0.0);
    }

    #[test]
    fn test_ripple_monotonic_in_each_input() {
        let base = ripple_effect(&RawContentMetrics::default());
        let setters: [fn(&mut RawContentMetrics); 3] = [
            |m| m.stitches = 10.0,
            |m| m.duets = 10.0,
            |m| m.remixes = 10.0,
        ];
        for setter in setters {
            let mut metrics = RawContentMetrics::default();
            setter(&mut metrics);
            assert!(ripple_effect(&metrics) > base);
        }

        let mut previous = 0.0;
        for stitches in [1.0, 5.0, 50.0, 500.0, 5000.0] {
            let ripple = ripple_for_stitches(stitches);
            assert!(ripple >= previous);
            previous = ripple;
        }
    }

    #[test]
    fn test_ripple_marginal_gain_shrinks() {
        let early = ripple_for_stitches(20.0) - ripple_for_stitches(10.0);
        let late = ripple_for_stitches(110.0) - ripple_for_stitches(100.0);
        assert!(late < early);
    }

    #[test]
    fn test_ripple_caps_at_100() {
        assert_eq!(ripple_for_stitches(1e9), 100.0);
    }

    #[test]
    fn test_sample_regression() {
        let result = compute_value_score(&sample_metrics());

        assert_abs_diff_eq!(result.engagement, 21.51, epsilon = 1e-9);
        assert_abs_diff_eq!(result.watch_time_factor, 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.ripple_effect, 40.489713, epsilon = 1e-6);
        assert_eq!(result.sentiment, 70.0);
        assert_eq!(result.authenticity_score, 85.0);
        assert_eq!(result.diversity_score, 75.0);
        assert_eq!(result.social_good_score, 80.0);
        assert_abs_diff_eq!(result.raw_total, 138.248799, epsilon = 1e-6);
        assert_eq!(result.score, 100.0);

        assert_abs_diff_eq!(result.breakdown.engagement_component, 12.91, epsilon = 1e-9);
        assert_abs_diff_eq!(result.breakdown.ripple_component, 28.34, epsilon = 1e-9);
        assert_abs_diff_eq!(result.breakdown.authenticity_bonus, 42.5, epsilon = 1e-9);
        assert_abs_diff_eq!(result.breakdown.diversity_bonus, 22.5, epsilon = 1e-9);
        assert_abs_diff_eq!(result.breakdown.social_good_bonus, 32.0, epsilon = 1e-9);
    }

    #[test]
    fn test_score_is_clamped_total_of_components() {
        let estimators = Estimators::default()
            .with_authenticity(ConstantEstimator(20.0))
            .with_diversity(ConstantEstimator(10.0))
            .with_social_good(ConstantEstimator(5.0));
        let result = ValueScorer::new(estimators).score(&sample_metrics());

        // 12.906 + 28.3428 + 10 + 3 + 2
        assert_abs_diff_eq!(result.raw_total, 56.248799, epsilon = 1e-6);
        assert_abs_diff_eq!(result.score, result.raw_total, epsilon = 1e-12);
        assert_abs_diff_eq!(result.breakdown.total(), result.score, epsilon = 0.05);
    }

    #[test]
    fn test_empty_metrics_score_only_bonuses() {
        let result = compute_value_score(&RawContentMetrics::default());
        assert_eq!(result.engagement, 0.0);
        assert_eq!(result.watch_time_factor, 0.0);
        assert_eq!(result.ripple_effect, 0.0);
        // 85 * 0.5 + 75 * 0.3 + 80 * 0.4
        assert_abs_diff_eq!(result.score, 97.0, epsilon = 1e-9);
    }

    #[test]
    fn test_all_outputs_in_range() {
        let cases = [
            RawContentMetrics::default(),
            sample_metrics(),
            metrics_with(|m| {
                m.views = 1.0;
                m.likes = 1e12;
                m.watch_time = 1e9;
                m.video_length = 0.001;
                m.stitches = 1e15;
            }),
            metrics_with(|m| {
                m.views = -10.0;
                m.likes = f64::NAN;
                m.watch_time = f64::INFINITY;
            }),
        ];

        for metrics in &cases {
            let result = compute_value_score(metrics);
            for value in [
                result.engagement,
                result.watch_time_factor,
                result.ripple_effect,
                result.sentiment,
                result.authenticity_score,
                result.diversity_score,
                result.social_good_score,
                result.score,
            ] {
                assert!((0.0..=100.0).contains(&value), "{} out of range", value);
            }
        }
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let scorer = ValueScorer::default();
        let metrics = sample_metrics();
        assert_eq!(scorer.score(&metrics), scorer.score(&metrics));
    }

    #[test]
    fn test_from_config_applies_settings() {
        let config = ScoringConfig {
            clamp_completion_rate: Some(true),
            estimators: Some(crate::scoring::EstimatorConfig {
                sentiment: Some(0.0),
                authenticity: Some(0.0),
                diversity: Some(0.0),
                social_good: Some(0.0),
            }),
        };
        let metrics = metrics_with(|m| {
            m.views = 1000.0;
            m.likes = 50.0;
            m.watch_time = 120.0;
            m.video_length = 60.0;
            m.stitches = 100.0;
        });
        let result = ValueScorer::from_config(&config).score(&metrics);

        // engagement 50*0.4/1000*1000 = 20, watch factor 70 + 20 = 90
        assert_abs_diff_eq!(result.engagement, 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.watch_time_factor, 90.0, epsilon = 1e-9);
        assert_eq!(result.breakdown.ripple_component, 0.0);
        assert_abs_diff_eq!(result.score, 18.0, epsilon = 1e-9);
    }
}
