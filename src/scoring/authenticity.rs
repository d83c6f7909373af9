use serde::Serialize;
use tracing::debug;

use super::descriptors::{
    AudioDescriptor, AuthenticityDescriptors, BackgroundNoise, Brightness, Category,
    ContentDescriptor, ContentQuality, DuplicateCheck, FilterDescriptor, Originality, Saturation,
    VoiceClarity,
};
use super::engine::clamp_score;

/// Descriptors paired with their 0-100 sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticityReport {
    pub audio: Scored<AudioDescriptor>,
    pub filter: Scored<FilterDescriptor>,
    pub content: Scored<ContentDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scored<T> {
    #[serde(flatten)]
    pub descriptor: T,
    pub score: f64,
}

impl AuthenticityReport {
    /// Mean of the three sub-scores
    pub fn overall(&self) -> f64 {
        (self.audio.score + self.filter.score + self.content.score) / 3.0
    }
}

pub fn compute_authenticity(descriptors: &AuthenticityDescriptors) -> AuthenticityReport {
    let report = AuthenticityReport {
        audio: Scored {
            score: compute_audio_score(&descriptors.audio),
            descriptor: descriptors.audio.clone(),
        },
        filter: Scored {
            score: compute_filter_score(&descriptors.filter),
            descriptor: descriptors.filter.clone(),
        },
        content: Scored {
            score: compute_content_score(&descriptors.content),
            descriptor: descriptors.content.clone(),
        },
    };

    debug!(
        audio = report.audio.score,
        filter = report.filter.score,
        content = report.content.score,
        "computed authenticity scores"
    );

    report
}

pub fn compute_audio_score(audio: &AudioDescriptor) -> f64 {
    let mut score = 50.0;

    if audio.original_audio {
        score += 25.0;
    }

    score += match audio.voice_clarity {
        VoiceClarity::High => 15.0,
        VoiceClarity::Medium => 10.0,
        VoiceClarity::Low => 5.0,
        VoiceClarity::Other(_) => 0.0,
    };

    score += match audio.background_noise {
        BackgroundNoise::Minimal => 10.0,
        BackgroundNoise::Moderate => 5.0,
        BackgroundNoise::High => -5.0,
        BackgroundNoise::Other(_) => 0.0,
    };

    if let Some(ref quality) = audio.audio_quality {
        if quality.contains("HD") {
            score += 5.0;
        }
        if quality.contains("320kbps") {
            score += 3.0;
        }
    }

    clamp_score(score)
}

pub fn compute_filter_score(filter: &FilterDescriptor) -> f64 {
    let mut score = 100.0;

    score -= f64::from(filter.filter_count) * 3.0;
    score -= f64::from(filter.beauty_filters) * 5.0;

    if filter.natural_lighting {
        score += 5.0;
    } else {
        score -= 10.0;
    }

    if filter.color_enhancement {
        score -= 5.0;
    }

    score -= match filter.saturation {
        Saturation::High => 8.0,
        Saturation::Medium => 3.0,
        Saturation::Natural | Saturation::Other(_) => 0.0,
    };

    score -= match filter.brightness {
        Brightness::HighlyEnhanced => 10.0,
        Brightness::SlightlyEnhanced => 5.0,
        Brightness::Other(_) => 0.0,
    };

    clamp_score(score)
}

pub fn compute_content_score(content: &ContentDescriptor) -> f64 {
    let mut score = 50.0;

    score += match content.originality {
        Originality::High => 20.0,
        Originality::Medium => 10.0,
        Originality::Low => 5.0,
        Originality::Other(_) => 0.0,
    };

    score += match content.duplicate_check {
        DuplicateCheck::NoDuplicates => 15.0,
        DuplicateCheck::MinorSimilarities => 8.0,
        DuplicateCheck::PotentialDuplicates => -10.0,
        DuplicateCheck::Other(_) => 0.0,
    };

    score += match content.content_quality {
        ContentQuality::Educational => 10.0,
        ContentQuality::Entertainment => 5.0,
        ContentQuality::LowValue => -5.0,
        ContentQuality::Other(_) => 0.0,
    };

    score += finite_or_zero(content.educational_value) * 1.5;
    score += finite_or_zero(content.creativity_score) * 1.5;

    score += match content.content_length.as_deref() {
        None | Some("") => 0.0,
        Some(length) => match parse_leading_seconds(length) {
            Some(secs) if (15.0..=60.0).contains(&secs) => 5.0,
            Some(secs) if secs > 60.0 => 2.0,
            _ => 1.0,
        },
    };

    score += match content.category {
        Category::Educational => 5.0,
        Category::Creative => 3.0,
        Category::Other(_) => 0.0,
    };

    clamp_score(score)
}

/// Read the leading integer of a duration label such as "45 seconds".
///
/// Leading whitespace and a sign are accepted; parsing stops at the first
/// non-digit. Returns `None` when no digits lead the string.
pub fn parse_leading_seconds(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (negative, rest) = if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let value: f64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
