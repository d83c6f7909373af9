use serde::Serialize;
use std::fmt;

/// Qualitative band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreGrade {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreGrade {
    /// Bands for the value score: 80 / 60 / 40
    pub fn for_value_score(score: f64) -> Self {
        Self::banded(score, [80.0, 60.0, 40.0])
    }

    /// Authenticity is graded more strictly: 90 / 80 / 70
    pub fn for_authenticity(score: f64) -> Self {
        Self::banded(score, [90.0, 80.0, 70.0])
    }

    fn banded(score: f64, [excellent, good, fair]: [f64; 3]) -> Self {
        if score >= excellent {
            ScoreGrade::Excellent
        } else if score >= good {
            ScoreGrade::Good
        } else if score >= fair {
            ScoreGrade::Fair
        } else {
            ScoreGrade::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "Excellent",
            ScoreGrade::Good => "Good",
            ScoreGrade::Fair => "Fair",
            ScoreGrade::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for ScoreGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Creator standing derived from an authenticity score. Higher tiers earn a
/// larger multiplier on gift (diamond) earnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CreatorTier {
    Elite,
    Authentic,
    Growing,
    Emerging,
}

impl CreatorTier {
    pub fn from_authenticity(score: f64) -> Self {
        if score >= 90.0 {
            CreatorTier::Elite
        } else if score >= 80.0 {
            CreatorTier::Authentic
        } else if score >= 70.0 {
            CreatorTier::Growing
        } else {
            CreatorTier::Emerging
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CreatorTier::Elite => "Elite Creator",
            CreatorTier::Authentic => "Authentic Creator",
            CreatorTier::Growing => "Growing Creator",
            CreatorTier::Emerging => "Emerging Creator",
        }
    }

    pub fn diamond_multiplier(&self) -> f64 {
        match self {
            CreatorTier::Elite => 2.0,
            CreatorTier::Authentic => 1.5,
            CreatorTier::Growing => 1.2,
            CreatorTier::Emerging => 1.0,
        }
    }

    pub fn project_earnings(&self, monthly_earnings: f64) -> f64 {
        monthly_earnings * self.diamond_multiplier()
    }
}

impl fmt::Display for CreatorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
