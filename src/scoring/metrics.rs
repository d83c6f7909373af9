use serde::{Deserialize, Serialize};

use super::lenient;

/// Raw engagement counters for one video.
///
/// Missing fields deserialize to zero, except `video_length` which defaults
/// to one second so completion rate never divides by zero. `null` and
/// non-numeric values also read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawContentMetrics {
    #[serde(deserialize_with = "lenient::number")]
    pub views: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub likes: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub comments: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub shares: f64,
    /// Average watch time in seconds
    #[serde(deserialize_with = "lenient::number")]
    pub watch_time: f64,
    /// Video length in seconds
    #[serde(deserialize_with = "lenient::number")]
    pub video_length: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub stitches: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub duets: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub remixes: f64,
}

impl Default for RawContentMetrics {
    fn default() -> Self {
        Self {
            views: 0.0,
            likes: 0.0,
            comments: 0.0,
            shares: 0.0,
            watch_time: 0.0,
            video_length: 1.0,
            stitches: 0.0,
            duets: 0.0,
            remixes: 0.0,
        }
    }
}

impl RawContentMetrics {
    /// Coerce malformed counters to safe values.
    ///
    /// NaN, infinite and negative values become 0. A zero video length
    /// becomes 1.
    pub fn normalized(&self) -> Self {
        let video_length = sanitize(self.video_length);
        Self {
            views: sanitize(self.views),
            likes: sanitize(self.likes),
            comments: sanitize(self.comments),
            shares: sanitize(self.shares),
            watch_time: sanitize(self.watch_time),
            video_length: if video_length == 0.0 { 1.0 } else { video_length },
            stitches: sanitize(self.stitches),
            duets: sanitize(self.duets),
            remixes: sanitize(self.remixes),
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let metrics: RawContentMetrics = serde_saphyr::from_str("views: 1000\n").unwrap();
        assert_eq!(metrics.views, 1000.0);
        assert_eq!(metrics.likes, 0.0);
        assert_eq!(metrics.video_length, 1.0);
    }

    #[test]
    fn test_normalize_zero_video_length() {
        let metrics = RawContentMetrics {
            video_length: 0.0,
            ..Default::default()
        };
        assert_eq!(metrics.normalized().video_length, 1.0);
    }

    #[test]
    fn test_normalize_malformed_values() {
        let metrics = RawContentMetrics {
            views: f64::NAN,
            likes: -5.0,
            shares: f64::INFINITY,
            video_length: f64::NAN,
            ..Default::default()
        };
        let normalized = metrics.normalized();
        assert_eq!(normalized.views, 0.0);
        assert_eq!(normalized.likes, 0.0);
        assert_eq!(normalized.shares, 0.0);
        assert_eq!(normalized.video_length, 1.0);
    }

    #[test]
    fn test_normalize_keeps_valid_values() {
        let metrics = RawContentMetrics {
            views: 10.0,
            watch_time: 45.5,
            video_length: 60.0,
            ..Default::default()
        };
        assert_eq!(metrics.normalized(), metrics);
    }
}
