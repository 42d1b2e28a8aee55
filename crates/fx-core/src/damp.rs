//! Damped approach: each frame closes a fixed fraction of the remaining
//! distance to the target (exponential decay, no overshoot for ease in (0, 1]).

use glam::DVec2;

#[inline]
pub fn approach(current: f64, target: f64, ease: f64) -> f64 {
    current + (target - current) * ease
}

/// Per-axis [`approach`] on a 2D value.
#[inline]
pub fn approach2(current: DVec2, target: DVec2, ease: f64) -> DVec2 {
    DVec2::new(
        approach(current.x, target.x, ease),
        approach(current.y, target.y, ease),
    )
}

/// True when every axis of `current` is within `epsilon` of `target`.
#[inline]
pub fn settled2(current: DVec2, target: DVec2, epsilon: f64) -> bool {
    let d = (target - current).abs();
    d.x <= epsilon && d.y <= epsilon
}
