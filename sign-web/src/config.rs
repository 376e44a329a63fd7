//! Recognition thresholds and timings
//!
//! All values are normalized image units (x, y in 0-1, z relative depth) or
//! milliseconds. Defaults are the hand-tuned values the tutorial ships with;
//! JS may override any subset through `configure()` with a JSON object.

use serde::Deserialize;
use std::fmt;
use wasm_bindgen::JsValue;

/// Largest accepted motion history capacity (several seconds of frames)
pub const MAX_HISTORY_LEN: usize = 240;

/// Configuration for gesture recognition
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Capacity of the index-fingertip trace
    pub fingertip_history_len: usize,
    /// Capacity of the thumb+index trace
    pub dual_history_len: usize,

    /// Horizontal travel for "moved left/right"
    pub move_min_distance: f32,
    /// Horizontal travel for the "bad" sweep (shorter than a plain move)
    pub bad_move_min_distance: f32,
    /// Travel per half of a wave
    pub wave_min_distance: f32,

    /// Fingertip clustering tolerance for a closed hand
    pub closed_tolerance: f32,
    /// Thumb-to-index tolerance for the "how are you" pinch
    pub pinch_tolerance: f32,
    /// Minimum index/middle separation for the "how are you" pinch
    pub pinch_min_spread: f32,
    /// Index tip to index knuckle tolerance for "you"
    pub you_tolerance: f32,
    /// Outward thumb offset for "bad"
    pub bad_thumb_margin: f32,

    pub circle_timeout_ms: f64,
    /// Direction flips that count as one circle
    pub circle_min_changes: u32,

    pub rise_fall_margin: f32,
    pub rise_fall_timeout_ms: f64,

    /// Forward wrist travel (z decrease) for the lunge
    pub lunge_min_depth: f32,
    pub lunge_timeout_ms: f64,

    pub bounce_margin: f32,
    pub bounce_timeout_ms: f64,

    /// Wrist distance below which the hands count as together
    pub clap_distance: f32,
    pub clap_count: u32,
    pub clap_timeout_ms: f64,

    /// Window for the open -> closed sequence
    pub sequence_window_ms: f64,

    /// Minimum display time of a recognized word
    pub hold_ms: f64,

    /// Also evaluate the lunge, rise-fall and clap gestures
    pub experimental_gestures: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            fingertip_history_len: 15,
            dual_history_len: 20,
            move_min_distance: 0.1,
            bad_move_min_distance: 0.07,
            wave_min_distance: 0.1,
            closed_tolerance: 0.05,
            pinch_tolerance: 0.02,
            pinch_min_spread: 0.005,
            you_tolerance: 0.08,
            bad_thumb_margin: 0.03,
            circle_timeout_ms: 1200.0,
            circle_min_changes: 4,
            rise_fall_margin: 0.001,
            rise_fall_timeout_ms: 1200.0,
            lunge_min_depth: 0.05,
            lunge_timeout_ms: 1200.0,
            bounce_margin: 0.02,
            bounce_timeout_ms: 1500.0,
            clap_distance: 0.05,
            clap_count: 2,
            clap_timeout_ms: 1000.0,
            sequence_window_ms: 1500.0,
            hold_ms: 1000.0,
            experimental_gestures: false,
        }
    }
}

impl GestureConfig {
    /// Parse a (possibly partial) JSON object; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GestureConfig = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_HISTORY_LEN).contains(&self.fingertip_history_len) {
            return Err(ConfigError::Invalid("fingertip_history_len must be between 2 and 240"));
        }
        if !(2..=MAX_HISTORY_LEN).contains(&self.dual_history_len) {
            return Err(ConfigError::Invalid("dual_history_len must be between 2 and 240"));
        }
        if self.circle_min_changes == 0 {
            return Err(ConfigError::Invalid("circle_min_changes must be at least 1"));
        }
        if self.clap_count == 0 {
            return Err(ConfigError::Invalid("clap_count must be at least 1"));
        }

        let distances = [
            ("move_min_distance", self.move_min_distance),
            ("bad_move_min_distance", self.bad_move_min_distance),
            ("wave_min_distance", self.wave_min_distance),
            ("closed_tolerance", self.closed_tolerance),
            ("pinch_tolerance", self.pinch_tolerance),
            ("pinch_min_spread", self.pinch_min_spread),
            ("you_tolerance", self.you_tolerance),
            ("bad_thumb_margin", self.bad_thumb_margin),
            ("rise_fall_margin", self.rise_fall_margin),
            ("lunge_min_depth", self.lunge_min_depth),
            ("bounce_margin", self.bounce_margin),
            ("clap_distance", self.clap_distance),
        ];
        if let Some((name, _)) = distances.iter().find(|(_, v)| !(v.is_finite() && *v >= 0.0)) {
            log::warn!("Rejecting gesture config: {} is negative or not finite", name);
            return Err(ConfigError::Invalid(
                "distances and margins must be finite and not negative",
            ));
        }

        let durations = [
            ("circle_timeout_ms", self.circle_timeout_ms),
            ("rise_fall_timeout_ms", self.rise_fall_timeout_ms),
            ("lunge_timeout_ms", self.lunge_timeout_ms),
            ("bounce_timeout_ms", self.bounce_timeout_ms),
            ("clap_timeout_ms", self.clap_timeout_ms),
            ("sequence_window_ms", self.sequence_window_ms),
            ("hold_ms", self.hold_ms),
        ];
        if let Some((name, _)) = durations.iter().find(|(_, v)| !(v.is_finite() && *v >= 0.0)) {
            log::warn!("Rejecting gesture config: {} is negative or not finite", name);
            return Err(ConfigError::Invalid("timeouts and hold must be finite and not negative"));
        }

        Ok(())
    }
}

/// Errors from loading a configuration
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Invalid gesture config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid gesture config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
