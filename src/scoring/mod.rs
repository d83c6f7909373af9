pub mod authenticity;
pub mod config;
pub mod descriptors;
pub mod engine;
pub mod estimators;
mod lenient;
pub mod metrics;
pub mod rating;
pub mod sample;
pub mod validation;

pub use authenticity::{
    compute_audio_score, compute_authenticity, compute_content_score, compute_filter_score,
    AuthenticityReport, Scored,
};
pub use config::*;
pub use descriptors::*;
pub use engine::{compute_value_score, ScoreComponents, ValueScoreResult, ValueScorer};
pub use estimators::{ConstantEstimator, Estimator, Estimators, Signals};
pub use metrics::RawContentMetrics;
pub use rating::{CreatorTier, ScoreGrade};
pub use sample::{sample_descriptors, sample_metrics};
pub use validation::validate_scoring;
