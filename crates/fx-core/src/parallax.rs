//! Cursor parallax animator.
//!
//! One eased 2D offset (cursor relative to viewport center) drives four
//! independent visual categories: scene translation, trace animation speed,
//! LED proximity pulses and blob parallax. The loop stops scheduling frames
//! once the offset settles and is woken again by the next mouse move.

use crate::config::{ConfigError, ParallaxConfig};
use crate::damp::{approach2, settled2};
use crate::schedule::FrameLoop;
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Signed offset of `mouse` from the viewport center, about [-0.5, 0.5]
/// per axis. A degenerate axis reads as centered.
#[inline]
pub fn normalized_offset(mouse: DVec2, viewport: Viewport) -> DVec2 {
    let axis = |p: f64, extent: f64| if extent > 0.0 { p / extent - 0.5 } else { 0.0 };
    DVec2::new(axis(mouse.x, viewport.width), axis(mouse.y, viewport.height))
}

/// Trace animation duration for a horizontal offset: traces run faster
/// near the horizontal center.
#[inline]
pub fn trace_duration(current_x: f64, config: &ParallaxConfig) -> f64 {
    // speed factor stays within [1, 2] even for a cursor far off-screen
    let speed_factor = 1.0 + (1.0 - current_x.abs().min(1.0));
    (config.trace_max / speed_factor).clamp(config.trace_min, config.trace_max)
}

/// Whether a trace whose style currently says `previous` seconds needs a
/// rewrite to `desired`. Small changes are skipped to avoid restarting the
/// CSS animation.
#[inline]
pub fn trace_needs_rewrite(previous: f64, desired: f64, hysteresis: f64) -> bool {
    (previous - desired).abs() > hysteresis
}

#[inline]
pub fn led_pulsing(mouse: DVec2, center: DVec2, radius: f64) -> bool {
    mouse.distance(center) < radius
}

/// Center of an element's bounding box.
#[inline]
pub fn rect_center(left: f64, top: f64, width: f64, height: f64) -> DVec2 {
    DVec2::new(left + width / 2.0, top + height / 2.0)
}

/// Leading-number parse of a CSS time value such as `"2.1s"`. Anything
/// without a numeric prefix reads as 0.
pub fn parse_seconds(raw: &str) -> f64 {
    let s = raw.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_exp = false;
    let bytes = s.as_bytes();
    while end < bytes.len() {
        let c = bytes[end];
        let ok = match c {
            b'0'..=b'9' => true,
            b'+' | b'-' => end == 0 || matches!(bytes[end - 1], b'e' | b'E'),
            b'.' if !seen_dot && !seen_exp => {
                seen_dot = true;
                true
            }
            b'e' | b'E' if !seen_exp && end > 0 => {
                seen_exp = true;
                true
            }
            _ => false,
        };
        if !ok {
            break;
        }
        end += 1;
    }
    // back off a dangling exponent or sign so the prefix parses
    let mut prefix = &s[..end];
    while !prefix.is_empty() {
        if let Ok(v) = prefix.parse::<f64>() {
            return v;
        }
        prefix = &prefix[..prefix.len() - 1];
    }
    0.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobTransform {
    pub dx: f64,
    pub dy: f64,
    pub rotate_deg: f64,
}

impl BlobTransform {
    pub fn for_index(current: DVec2, index: usize, config: &ParallaxConfig) -> Self {
        let factor = config.blob_factor_base + index as f64 * config.blob_factor_step;
        Self {
            dx: current.x * factor,
            dy: current.y * factor,
            rotate_deg: current.x * factor * config.blob_rotation_ratio,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) rotate({}deg)",
            self.dx, self.dy, self.rotate_deg
        )
    }
}

/// Presentation side of the animator. Each category reports its own size,
/// so an absent category is simply empty.
pub trait ParallaxSurface {
    fn has_scene(&self) -> bool;
    fn translate_scene(&mut self, dx: f64, dy: f64);

    fn trace_count(&self) -> usize;
    /// Current animation duration of a trace in seconds, 0 when unset.
    fn trace_duration(&self, index: usize) -> f64;
    fn set_trace_duration(&mut self, index: usize, seconds: f64);

    fn led_count(&self) -> usize;
    fn set_led_pulse(&mut self, index: usize, on: bool);

    fn blob_count(&self) -> usize;
    fn transform_blob(&mut self, index: usize, transform: BlobTransform);
}

/// LED centers in viewport px, refreshed on load and resize only.
pub type LedPositionCache = SmallVec<[DVec2; 8]>;

#[derive(Debug, Clone)]
pub struct ParallaxAnimator {
    config: ParallaxConfig,
    mouse: DVec2,
    target: DVec2,
    current: DVec2,
    leds: LedPositionCache,
    frame_loop: FrameLoop,
}

impl ParallaxAnimator {
    pub fn new(config: ParallaxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            mouse: DVec2::ZERO,
            target: DVec2::ZERO,
            current: DVec2::ZERO,
            leds: LedPositionCache::new(),
            frame_loop: FrameLoop::until_settled(),
        })
    }

    #[inline]
    pub fn target(&self) -> DVec2 {
        self.target
    }

    #[inline]
    pub fn current(&self) -> DVec2 {
        self.current
    }

    #[inline]
    pub fn led_positions(&self) -> &[DVec2] {
        &self.leds
    }

    #[inline]
    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    pub fn is_settled(&self) -> bool {
        settled2(self.current, self.target, self.config.epsilon)
    }

    /// Records the cursor and retargets. Returns true when the host must
    /// request an animation frame.
    pub fn on_mouse_move(&mut self, x: f64, y: f64, viewport: Viewport) -> bool {
        self.mouse = DVec2::new(x, y);
        self.target = normalized_offset(self.mouse, viewport);
        self.frame_loop.wake()
    }

    pub fn refresh_led_positions<I>(&mut self, centers: I)
    where
        I: IntoIterator<Item = DVec2>,
    {
        self.leds.clear();
        self.leds.extend(centers);
    }

    /// One frame. Returns true while the offset is still moving.
    pub fn frame_tick<S: ParallaxSurface>(&mut self, surface: &mut S) -> bool {
        self.frame_loop.begin_frame();
        self.current = approach2(self.current, self.target, self.config.ease);
        let c = self.current;

        if surface.has_scene() {
            let (sx, sy) = self.config.scene_shift;
            surface.translate_scene(c.x * sx, c.y * sy);
        }

        let desired = trace_duration(c.x, &self.config);
        for i in 0..surface.trace_count() {
            let prev = surface.trace_duration(i);
            if trace_needs_rewrite(prev, desired, self.config.trace_hysteresis) {
                surface.set_trace_duration(i, desired);
            }
        }

        for i in 0..surface.led_count() {
            let Some(center) = self.leds.get(i) else {
                continue;
            };
            surface.set_led_pulse(i, led_pulsing(self.mouse, *center, self.config.led_radius));
        }

        for i in 0..surface.blob_count() {
            surface.transform_blob(i, BlobTransform::for_index(c, i, &self.config));
        }

        self.frame_loop.end_frame(self.is_settled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_offset_edges() {
        let vp = Viewport::new(1000.0, 800.0);
        assert_eq!(normalized_offset(DVec2::new(0.0, 0.0), vp), DVec2::new(-0.5, -0.5));
        assert_eq!(normalized_offset(DVec2::new(1000.0, 800.0), vp), DVec2::new(0.5, 0.5));
        assert_eq!(normalized_offset(DVec2::new(500.0, 400.0), vp), DVec2::ZERO);
    }

    #[test]
    fn degenerate_viewport_reads_centered() {
        let vp = Viewport::new(0.0, 800.0);
        let off = normalized_offset(DVec2::new(10.0, 200.0), vp);
        assert_eq!(off.x, 0.0);
        assert_eq!(off.y, -0.25);
    }

    #[test]
    fn trace_duration_bounds() {
        let cfg = ParallaxConfig::default();
        assert!((trace_duration(0.0, &cfg) - 2.1).abs() < 1e-12);
        assert!((trace_duration(0.5, &cfg) - 2.8).abs() < 1e-12);
        assert!((trace_duration(-0.5, &cfg) - 2.8).abs() < 1e-12);
        // far outside the viewport the duration is still bounded
        assert_eq!(trace_duration(5.0, &cfg), cfg.trace_max);
    }

    #[test]
    fn parse_seconds_like_css() {
        assert_eq!(parse_seconds("2.1s"), 2.1);
        assert_eq!(parse_seconds(" 3s"), 3.0);
        assert_eq!(parse_seconds(""), 0.0);
        assert_eq!(parse_seconds("auto"), 0.0);
        assert_eq!(parse_seconds("1e0s"), 1.0);
        assert_eq!(parse_seconds("4.e"), 4.0);
    }

    #[test]
    fn blob_factor_grows_with_index() {
        let cfg = ParallaxConfig::default();
        let c = DVec2::new(0.25, -0.1);
        let b0 = BlobTransform::for_index(c, 0, &cfg);
        let b2 = BlobTransform::for_index(c, 2, &cfg);
        assert!((b0.dx - 2.0).abs() < 1e-12);
        assert!((b0.rotate_deg - 4.0).abs() < 1e-12);
        assert!((b2.dx - 4.0).abs() < 1e-12);
        assert!((b2.dy + 1.6).abs() < 1e-12);
        assert!((b2.rotate_deg - 8.0).abs() < 1e-12);
    }

    #[test]
    fn blob_rotation_follows_config() {
        let cfg = ParallaxConfig {
            blob_rotation_ratio: 0.5,
            ..ParallaxConfig::default()
        };
        let b = BlobTransform::for_index(DVec2::new(0.25, 0.0), 0, &cfg);
        assert!((b.dx - 2.0).abs() < 1e-12);
        assert!((b.rotate_deg - 1.0).abs() < 1e-12);
    }

    #[test]
    fn blob_css_format() {
        let t = BlobTransform {
            dx: 2.0,
            dy: -1.5,
            rotate_deg: 4.0,
        };
        assert_eq!(t.css(), "translate3d(2px, -1.5px, 0) rotate(4deg)");
    }

    #[test]
    fn rect_center_is_midpoint() {
        assert_eq!(rect_center(10.0, 20.0, 30.0, 40.0), DVec2::new(25.0, 40.0));
    }
}
