use serde::{Deserialize, Serialize};
use std::fmt;

use super::lenient;

/// Declares a categorical descriptor whose known values are matched by exact
/// text. Anything else lands in `Other` and keeps its original spelling.
macro_rules! descriptor_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Other(s) => s,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::Other(String::new())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $($text => $name::$variant,)+
                    _ => $name::Other(s),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name::from(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(s) => s,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

descriptor_enum!(
    /// Perceived clarity of the speaking voice
    VoiceClarity {
        High => "High quality",
        Medium => "Medium quality",
        Low => "Low quality",
    }
);

descriptor_enum!(
    BackgroundNoise {
        Minimal => "Minimal",
        Moderate => "Moderate",
        High => "High",
    }
);

descriptor_enum!(
    Saturation {
        High => "High",
        Medium => "Medium",
        Natural => "Natural",
    }
);

descriptor_enum!(
    Brightness {
        HighlyEnhanced => "Highly enhanced",
        SlightlyEnhanced => "Slightly enhanced",
    }
);

descriptor_enum!(
    Originality {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
);

descriptor_enum!(
    /// Result of the near-duplicate lookup
    DuplicateCheck {
        NoDuplicates => "No duplicates found",
        MinorSimilarities => "Minor similarities",
        PotentialDuplicates => "Potential duplicates",
    }
);

descriptor_enum!(
    ContentQuality {
        Educational => "Educational value",
        Entertainment => "Entertainment",
        LowValue => "Low value",
    }
);

descriptor_enum!(
    Category {
        Educational => "Educational",
        Creative => "Creative",
    }
);

/// Audio characteristics of a video.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioDescriptor {
    pub original_audio: bool,
    pub voice_clarity: VoiceClarity,
    pub background_noise: BackgroundNoise,
    /// Free-form quality label, e.g. "HD (320kbps)"
    pub audio_quality: Option<String>,
    /// Informational only, not scored
    pub music_detection: Option<String>,
    /// Informational only, not scored
    pub duration: Option<String>,
}

/// Visual filter usage of a video.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterDescriptor {
    #[serde(deserialize_with = "lenient::count")]
    pub filter_count: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub beauty_filters: u32,
    pub natural_lighting: bool,
    pub color_enhancement: bool,
    pub saturation: Saturation,
    pub brightness: Brightness,
    /// Informational only, not scored
    pub filter_types: Vec<String>,
}

/// Originality and substance of a video.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentDescriptor {
    pub originality: Originality,
    pub duplicate_check: DuplicateCheck,
    pub content_quality: ContentQuality,
    /// 0-10
    #[serde(deserialize_with = "lenient::number")]
    pub educational_value: f64,
    /// 0-10
    #[serde(deserialize_with = "lenient::number")]
    pub creativity_score: f64,
    /// Duration text whose leading integer is read as seconds, e.g. "45 seconds"
    pub content_length: Option<String>,
    pub category: Category,
}

/// The three descriptor records scored together.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthenticityDescriptors {
    pub audio: AudioDescriptor,
    pub filter: FilterDescriptor,
    pub content: ContentDescriptor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_parse_exactly() {
        assert_eq!(VoiceClarity::from("High quality"), VoiceClarity::High);
        assert_eq!(Brightness::from("Slightly enhanced"), Brightness::SlightlyEnhanced);
        assert_eq!(
            DuplicateCheck::from("No duplicates found"),
            DuplicateCheck::NoDuplicates
        );
    }

    #[test]
    fn test_unknown_value_is_preserved() {
        let clarity = VoiceClarity::from("Crystal");
        assert_eq!(clarity, VoiceClarity::Other("Crystal".to_string()));
        assert_eq!(clarity.as_str(), "Crystal");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(
            VoiceClarity::from("high quality"),
            VoiceClarity::Other("high quality".to_string())
        );
    }

    #[test]
    fn test_default_is_empty_other() {
        assert_eq!(Category::default(), Category::Other(String::new()));
    }

    #[test]
    fn test_descriptor_yaml_parse() {
        let yaml = r#"
audio:
  original_audio: true
  voice_clarity: "High quality"
  background_noise: "Minimal"
  audio_quality: "HD (320kbps)"
filter:
  filter_count: 3
  saturation: "Medium"
  brightness: "Sparkly"
content:
  originality: "High"
  educational_value: 8
  content_length: "45 seconds"
"#;
        let parsed: AuthenticityDescriptors = serde_saphyr::from_str(yaml).unwrap();
        assert!(parsed.audio.original_audio);
        assert_eq!(parsed.audio.voice_clarity, VoiceClarity::High);
        assert_eq!(parsed.filter.filter_count, 3);
        assert_eq!(parsed.filter.saturation, Saturation::Medium);
        assert_eq!(parsed.filter.brightness, Brightness::Other("Sparkly".to_string()));
        assert!(!parsed.filter.natural_lighting);
        assert_eq!(parsed.content.originality, Originality::High);
        assert_eq!(parsed.content.category, Category::default());
    }

    #[test]
    fn test_descriptor_json_serializes_text() {
        let audio = AudioDescriptor {
            voice_clarity: VoiceClarity::Medium,
            ..Default::default()
        };
        let json = serde_json::to_value(&audio).unwrap();
        assert_eq!(json["voice_clarity"], "Medium quality");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "filter_count: 1\nsparkles: 3\n";
        let parsed: Result<FilterDescriptor, _> = serde_saphyr::from_str(yaml);
        assert!(parsed.is_err());
    }
}
