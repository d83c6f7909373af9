use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref estimators) = config.estimators {
        let fields = [
            ("sentiment", estimators.sentiment),
            ("authenticity", estimators.authenticity),
            ("diversity", estimators.diversity),
            ("social_good", estimators.social_good),
        ];

        for (name, value) in fields {
            if let Some(value) = value {
                if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                    errors.push(format!(
                        "scoring.estimators.{}: must be between 0 and 100, got {}",
                        name, value
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
