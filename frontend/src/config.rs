use log::{warn, Level};

use crate::motion::load_gate::LoadingTimings;
use crate::motion::visibility::Threshold;

/// How far above a section's top edge it already counts as active, in px.
pub const ACTIVATION_MARGIN: f64 = 100.0;

pub const REVEAL_THRESHOLD: &str = "top 80%";
pub const FOOTER_THRESHOLD: &str = "top 90%";

pub const LOADING: LoadingTimings = LoadingTimings {
    text_in: 0.8,
    progress: 2.5,
    pause: 0.3,
    fade_out: 1.0,
};

pub const CONTENT_FADE_SECS: f64 = 1.5;
pub const INTRO_DELAY_SECS: f64 = 0.5;
pub const DRAWER_SLIDE_SECS: f64 = 0.4;
pub const SUBMIT_DELAY_MS: u32 = 2000;

/// Longest step a single animation frame may advance, in seconds.
pub const MAX_FRAME_DELTA_SECS: f64 = 0.1;

/// Width of the mobile navigation drawer, in px. The drawer hides by sliding
/// this far to the right.
pub const MOBILE_DRAWER_WIDTH: f64 = 320.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn trace_level() -> tracing::Level {
    tracing::Level::DEBUG
}

#[cfg(not(debug_assertions))]
pub fn trace_level() -> tracing::Level {
    tracing::Level::INFO
}

pub fn reveal_threshold() -> Threshold {
    parse_threshold(REVEAL_THRESHOLD)
}

pub fn footer_threshold() -> Threshold {
    parse_threshold(FOOTER_THRESHOLD)
}

fn parse_threshold(raw: &str) -> Threshold {
    raw.parse().unwrap_or_else(|e| {
        warn!("{}, falling back to the default threshold", e);
        Threshold::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_thresholds_parse() {
        assert!(REVEAL_THRESHOLD.parse::<Threshold>().is_ok());
        assert!(FOOTER_THRESHOLD.parse::<Threshold>().is_ok());
        assert!((footer_threshold().viewport_fraction - 0.9).abs() < 1e-12);
    }

    #[test]
    fn loading_timeline_lasts_four_point_six_seconds() {
        assert!((LOADING.total() - 4.6).abs() < 1e-9);
    }
}
