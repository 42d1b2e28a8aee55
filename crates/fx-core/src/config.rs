//! Tunables for the two animation loops.
//!
//! Both configs default to the values in [`crate::constants`]. The web
//! front-end may override individual fields from `data-*` attributes, so
//! every config is validated before a component is built from it.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("ease must be in (0, 1], got {0}")]
    EaseOutOfRange(f64),
    #[error("convergence epsilon must be positive, got {0}")]
    NonPositiveEpsilon(f64),
    #[error("LED pulse radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("trace duration bounds are inverted: min {min} > max {max}")]
    InvertedTraceBounds { min: f64, max: f64 },
    #[error("trace hysteresis must be non-negative, got {0}")]
    NegativeHysteresis(f64),
}

#[inline]
fn check_ease(ease: f64) -> Result<(), ConfigError> {
    // NaN fails both comparisons and is rejected here too
    if ease > 0.0 && ease <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::EaseOutOfRange(ease))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    pub ease: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { ease: SCROLL_EASE }
    }
}

impl ScrollConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ease(self.ease)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxConfig {
    pub ease: f64,
    pub epsilon: f64,
    /// Scene translation in px per unit of normalized offset, (x, y).
    pub scene_shift: (f64, f64),
    pub trace_min: f64,
    pub trace_max: f64,
    pub trace_hysteresis: f64,
    pub led_radius: f64,
    pub blob_factor_base: f64,
    pub blob_factor_step: f64,
    /// Blob rotation in degrees per px of blob translation.
    pub blob_rotation_ratio: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            ease: PARALLAX_EASE,
            epsilon: CONVERGENCE_EPSILON,
            scene_shift: (SCENE_SHIFT_X, SCENE_SHIFT_Y),
            trace_min: TRACE_DURATION_MIN,
            trace_max: TRACE_DURATION_MAX,
            trace_hysteresis: TRACE_DURATION_HYSTERESIS,
            led_radius: LED_PULSE_RADIUS,
            blob_factor_base: BLOB_FACTOR_BASE,
            blob_factor_step: BLOB_FACTOR_STEP,
            blob_rotation_ratio: BLOB_ROTATION_RATIO,
        }
    }
}

impl ParallaxConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ease(self.ease)?;
        if !(self.epsilon > 0.0) {
            return Err(ConfigError::NonPositiveEpsilon(self.epsilon));
        }
        if !(self.led_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(self.led_radius));
        }
        if !(self.trace_min <= self.trace_max) {
            return Err(ConfigError::InvertedTraceBounds {
                min: self.trace_min,
                max: self.trace_max,
            });
        }
        if !(self.trace_hysteresis >= 0.0) {
            return Err(ConfigError::NegativeHysteresis(self.trace_hysteresis));
        }
        Ok(())
    }
}

/// Parse an optional ease override, keeping `fallback` when the value is
/// missing, unparsable or out of range.
pub fn parse_ease_override(raw: Option<&str>, fallback: f64) -> f64 {
    let Some(raw) = raw else {
        return fallback;
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if check_ease(v).is_ok() => v,
        Ok(v) => {
            log::warn!("[config] ignoring ease override {v}: {}", ConfigError::EaseOutOfRange(v));
            fallback
        }
        Err(e) => {
            log::warn!("[config] ignoring ease override {raw:?}: {e}");
            fallback
        }
    }
}
