// Host-side tests for the cursor parallax animator.

use fx_core::{
    trace_duration, BlobTransform, LoopState, ParallaxAnimator, ParallaxConfig, ParallaxSurface,
    Viewport, CONVERGENCE_EPSILON, TRACE_DURATION_MAX, TRACE_DURATION_MIN,
};
use glam::DVec2;
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Write {
    Scene(f64, f64),
    Trace(usize, f64),
    Led(usize, bool),
    Blob(usize, BlobTransform),
}

#[derive(Default)]
struct RecordingSurface {
    scene: bool,
    traces: Vec<f64>,
    leds: Vec<bool>,
    blobs: usize,
    writes: Vec<Write>,
}

impl RecordingSurface {
    fn full() -> Self {
        Self {
            scene: true,
            traces: vec![0.0; 2],
            leds: vec![false; 2],
            blobs: 3,
            writes: Vec::new(),
        }
    }

    fn trace_writes(&self) -> usize {
        self.writes
            .iter()
            .filter(|w| matches!(w, Write::Trace(..)))
            .count()
    }
}

impl ParallaxSurface for RecordingSurface {
    fn has_scene(&self) -> bool {
        self.scene
    }
    fn translate_scene(&mut self, dx: f64, dy: f64) {
        self.writes.push(Write::Scene(dx, dy));
    }
    fn trace_count(&self) -> usize {
        self.traces.len()
    }
    fn trace_duration(&self, index: usize) -> f64 {
        self.traces[index]
    }
    fn set_trace_duration(&mut self, index: usize, seconds: f64) {
        self.traces[index] = seconds;
        self.writes.push(Write::Trace(index, seconds));
    }
    fn led_count(&self) -> usize {
        self.leds.len()
    }
    fn set_led_pulse(&mut self, index: usize, on: bool) {
        self.leds[index] = on;
        self.writes.push(Write::Led(index, on));
    }
    fn blob_count(&self) -> usize {
        self.blobs
    }
    fn transform_blob(&mut self, index: usize, transform: BlobTransform) {
        self.writes.push(Write::Blob(index, transform));
    }
}

const VIEWPORT: Viewport = Viewport {
    width: 1000.0,
    height: 800.0,
};

fn animator() -> ParallaxAnimator {
    ParallaxAnimator::new(ParallaxConfig::default()).unwrap()
}

/// Runs frames the way the host does: only while the animator asks for one.
fn run_until_idle(a: &mut ParallaxAnimator, surface: &mut RecordingSurface, cap: usize) -> usize {
    let mut frames = 0;
    while frames < cap {
        frames += 1;
        if !a.frame_tick(surface) {
            break;
        }
    }
    frames
}

#[test]
fn mouse_move_end_to_end() {
    let mut a = animator();
    let mut surface = RecordingSurface::full();

    assert!(a.on_mouse_move(750.0, 400.0, VIEWPORT));
    assert_eq!(a.target(), DVec2::new(0.25, 0.0));

    assert!(a.frame_tick(&mut surface));
    assert!((a.current().x - 0.03).abs() < 1e-12);
    assert_eq!(a.current().y, 0.0);

    let frames = run_until_idle(&mut a, &mut surface, 1_000);
    assert!(frames < 100, "took {frames} frames to settle");
    assert!((a.current().x - 0.25).abs() <= CONVERGENCE_EPSILON);
    assert!(a.is_settled());
    assert_eq!(a.frame_loop().state(), LoopState::Idle);
}

#[test]
fn halts_exactly_when_both_axes_within_epsilon() {
    let mut a = animator();
    let mut surface = RecordingSurface::default();
    a.on_mouse_move(0.0, 800.0, VIEWPORT);
    loop {
        let again = a.frame_tick(&mut surface);
        let d = (a.target() - a.current()).abs();
        let settled = d.x <= CONVERGENCE_EPSILON && d.y <= CONVERGENCE_EPSILON;
        assert_eq!(again, !settled);
        if !again {
            break;
        }
    }
}

#[test]
fn moves_while_pending_do_not_double_schedule() {
    let mut a = animator();
    assert!(a.on_mouse_move(100.0, 100.0, VIEWPORT));
    assert!(!a.on_mouse_move(200.0, 100.0, VIEWPORT));
    assert!(!a.on_mouse_move(300.0, 100.0, VIEWPORT));
    // the pending frame picks up the latest target
    assert!((a.target().x + 0.2).abs() < 1e-12);
    assert_eq!(a.target().y, -0.375);
}

#[test]
fn settled_loop_restarts_on_next_move() {
    let mut a = animator();
    let mut surface = RecordingSurface::default();
    a.on_mouse_move(500.0, 400.0, VIEWPORT);
    assert!(!a.frame_tick(&mut surface));
    assert!(a.on_mouse_move(900.0, 400.0, VIEWPORT));
    assert!(a.frame_tick(&mut surface));
}

#[test]
fn updates_run_in_category_order() {
    let mut a = animator();
    let mut surface = RecordingSurface::full();
    a.refresh_led_positions([DVec2::new(10.0, 10.0), DVec2::new(900.0, 700.0)]);
    a.on_mouse_move(750.0, 400.0, VIEWPORT);
    a.frame_tick(&mut surface);

    let rank = |w: &Write| match w {
        Write::Scene(..) => 0,
        Write::Trace(..) => 1,
        Write::Led(..) => 2,
        Write::Blob(..) => 3,
    };
    let ranks: Vec<_> = surface.writes.iter().map(rank).collect();
    let mut sorted = ranks.clone();
    sorted.sort();
    assert_eq!(ranks, sorted);
    assert_eq!(ranks, vec![0, 1, 1, 2, 2, 3, 3, 3]);
}

#[test]
fn scene_translation_scales_per_axis() {
    let mut a = animator();
    let mut surface = RecordingSurface::full();
    a.on_mouse_move(1000.0, 800.0, VIEWPORT);
    a.frame_tick(&mut surface);
    // one frame: current = 0.5 * 0.12 = 0.06 on both axes
    assert_eq!(surface.writes[0], Write::Scene(0.06 * 12.0, 0.06 * 8.0));
}

#[test]
fn missing_categories_do_not_block_others() {
    let mut a = animator();
    let mut surface = RecordingSurface {
        scene: false,
        traces: Vec::new(),
        leds: vec![false],
        blobs: 1,
        writes: Vec::new(),
    };
    a.refresh_led_positions([DVec2::new(750.0, 400.0)]);
    a.on_mouse_move(750.0, 400.0, VIEWPORT);
    a.frame_tick(&mut surface);
    assert!(!surface.writes.iter().any(|w| matches!(w, Write::Scene(..))));
    assert_eq!(surface.leds, vec![true]);
    assert!(matches!(surface.writes.last(), Some(Write::Blob(0, _))));
}

#[test]
fn led_without_cached_position_is_skipped() {
    let mut a = animator();
    let mut surface = RecordingSurface::full();
    a.refresh_led_positions([DVec2::new(0.0, 0.0)]);
    a.on_mouse_move(0.0, 0.0, VIEWPORT);
    a.frame_tick(&mut surface);
    let led_writes: Vec<_> = surface
        .writes
        .iter()
        .filter(|w| matches!(w, Write::Led(..)))
        .collect();
    assert_eq!(led_writes, vec![&Write::Led(0, true)]);
}

#[test]
fn led_pulse_boundary_is_strict() {
    let mut a = animator();
    let mut surface = RecordingSurface {
        leds: vec![false],
        ..Default::default()
    };
    a.refresh_led_positions([DVec2::new(500.0, 400.0)]);

    for (x, expected) in [(639.0, true), (640.0, false), (641.0, false), (639.0, true)] {
        a.on_mouse_move(x, 400.0, VIEWPORT);
        a.frame_tick(&mut surface);
        assert_eq!(surface.leds[0], expected, "distance {}", x - 500.0);
    }
}

#[test]
fn led_cache_is_replaced_on_refresh() {
    let mut a = animator();
    a.refresh_led_positions([DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0)]);
    a.refresh_led_positions([DVec2::new(5.0, 6.0)]);
    assert_eq!(a.led_positions(), &[DVec2::new(5.0, 6.0)]);
}

#[test]
fn small_duration_changes_are_not_written() {
    let mut a = animator();
    let mut surface = RecordingSurface {
        traces: vec![0.0],
        ..Default::default()
    };
    a.on_mouse_move(500.0, 400.0, VIEWPORT);
    a.frame_tick(&mut surface);
    assert_eq!(surface.trace_writes(), 1);
    assert!((surface.traces[0] - 2.1).abs() < 1e-12);

    // current.x drifts to 0.01: desired duration moves by ~0.01s
    a.on_mouse_move(510.0, 400.0, VIEWPORT);
    run_until_idle(&mut a, &mut surface, 1_000);
    assert_eq!(surface.trace_writes(), 1);
}

#[test]
fn large_duration_changes_are_written() {
    let mut a = animator();
    let mut surface = RecordingSurface {
        traces: vec![0.0],
        ..Default::default()
    };
    a.on_mouse_move(500.0, 400.0, VIEWPORT);
    a.frame_tick(&mut surface);
    a.on_mouse_move(1000.0, 400.0, VIEWPORT);
    run_until_idle(&mut a, &mut surface, 1_000);
    assert!(surface.trace_writes() > 1);
    // settled near x = 0.5, i.e. 4.2 / 1.5 = 2.8s, give or take the hysteresis band
    assert!((surface.traces[0] - 2.8).abs() < 0.06);
}

#[test]
fn blobs_follow_current_offset() {
    let mut a = animator();
    let mut surface = RecordingSurface {
        blobs: 2,
        ..Default::default()
    };
    a.on_mouse_move(1000.0, 400.0, VIEWPORT);
    run_until_idle(&mut a, &mut surface, 1_000);
    let c = a.current();
    let cfg = ParallaxConfig::default();
    let expected = BlobTransform::for_index(c, 1, &cfg);
    assert_eq!(surface.writes.last(), Some(&Write::Blob(1, expected)));
    assert!((expected.dx - c.x * 12.0).abs() < 1e-12);
    assert!((expected.rotate_deg - c.x * 24.0).abs() < 1e-12);
}

proptest! {
    #[test]
    fn target_stays_in_half_unit_box(x in 0.0f64..=1000.0, y in 0.0f64..=800.0) {
        let mut a = animator();
        a.on_mouse_move(x, y, VIEWPORT);
        let t = a.target();
        prop_assert!((-0.5..=0.5).contains(&t.x));
        prop_assert!((-0.5..=0.5).contains(&t.y));
    }

    #[test]
    fn trace_duration_stays_in_bounds(x in -0.5f64..=0.5) {
        let d = trace_duration(x, &ParallaxConfig::default());
        prop_assert!((TRACE_DURATION_MIN..=TRACE_DURATION_MAX).contains(&d));
    }

    #[test]
    fn loop_halts_for_any_in_viewport_target(x in 0.0f64..=1000.0, y in 0.0f64..=800.0) {
        let mut a = animator();
        let mut surface = RecordingSurface::default();
        a.on_mouse_move(x, y, VIEWPORT);
        // 0.5 * 0.88^n <= 0.001 for n >= 49
        let frames = run_until_idle(&mut a, &mut surface, 1_000);
        prop_assert!(frames <= 50);
        prop_assert!(a.is_settled());
    }

    #[test]
    fn current_never_overshoots(x in 0.0f64..=1000.0, frames in 1usize..80) {
        let mut a = animator();
        let mut surface = RecordingSurface::default();
        a.on_mouse_move(x, 400.0, VIEWPORT);
        for _ in 0..frames {
            a.frame_tick(&mut surface);
        }
        let t = a.target().x;
        let c = a.current().x;
        prop_assert!(c.abs() <= t.abs() + 1e-12);
        prop_assert!(c == 0.0 || c.signum() == t.signum());
    }
}
