// Animation tuning shared by the scroll integrator and the parallax animator.

// Inertial scroll
pub const SCROLL_EASE: f64 = 0.08; // fraction of remaining distance closed per frame

// Cursor parallax
pub const PARALLAX_EASE: f64 = 0.12;
pub const CONVERGENCE_EPSILON: f64 = 0.001; // per-axis, normalized units

// Decorative scene translation per unit of normalized offset (px)
pub const SCENE_SHIFT_X: f64 = 12.0;
pub const SCENE_SHIFT_Y: f64 = 8.0;

// Trace animation duration (seconds)
pub const TRACE_DURATION_MIN: f64 = 1.6;
pub const TRACE_DURATION_MAX: f64 = 4.2;
pub const TRACE_DURATION_HYSTERESIS: f64 = 0.05; // smaller changes are not written

// LED proximity pulse radius (device px)
pub const LED_PULSE_RADIUS: f64 = 140.0;

// Blob parallax: factor = BASE + index * STEP, rotation = 2 * factor
pub const BLOB_FACTOR_BASE: f64 = 8.0;
pub const BLOB_FACTOR_STEP: f64 = 4.0;
pub const BLOB_ROTATION_RATIO: f64 = 2.0;
