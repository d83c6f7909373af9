use super::descriptors::{
    AudioDescriptor, AuthenticityDescriptors, BackgroundNoise, Brightness, Category,
    ContentDescriptor, ContentQuality, DuplicateCheck, FilterDescriptor, Originality, Saturation,
    VoiceClarity,
};
use super::metrics::RawContentMetrics;

/// Counters for a well-performing educational video.
pub fn sample_metrics() -> RawContentMetrics {
    RawContentMetrics {
        views: 2_500_000.0,
        likes: 125_000.0,
        comments: 8_500.0,
        shares: 3_200.0,
        watch_time: 45.0,
        video_length: 60.0,
        stitches: 156.0,
        duets: 89.0,
        remixes: 45.0,
    }
}

/// Descriptors matching [`sample_metrics`].
pub fn sample_descriptors() -> AuthenticityDescriptors {
    AuthenticityDescriptors {
        audio: AudioDescriptor {
            original_audio: true,
            voice_clarity: VoiceClarity::High,
            background_noise: BackgroundNoise::Minimal,
            audio_quality: Some("HD (320kbps)".to_string()),
            music_detection: Some("Original composition".to_string()),
            duration: Some("45 seconds".to_string()),
        },
        filter: FilterDescriptor {
            filter_count: 3,
            beauty_filters: 2,
            natural_lighting: false,
            color_enhancement: true,
            saturation: Saturation::Medium,
            brightness: Brightness::SlightlyEnhanced,
            filter_types: vec![
                "Beauty".to_string(),
                "Color".to_string(),
                "Lighting".to_string(),
            ],
        },
        content: ContentDescriptor {
            originality: Originality::High,
            duplicate_check: DuplicateCheck::NoDuplicates,
            content_quality: ContentQuality::Educational,
            educational_value: 8.0,
            creativity_score: 7.0,
            content_length: Some("45 seconds".to_string()),
            category: Category::Educational,
        },
    }
}
