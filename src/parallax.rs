use crate::constants::*;
use crate::dom;
use crate::frame::FrameDriver;
use fx_core::{
    parse_ease_override, parse_seconds, rect_center, BlobTransform, ParallaxAnimator,
    ParallaxConfig, ParallaxSurface,
};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Parallax targets found at startup. Any category may be empty.
pub struct DomParallaxSurface {
    scene: Option<web::CssStyleDeclaration>,
    traces: Vec<web::CssStyleDeclaration>,
    leds: Vec<web::Element>,
    blobs: Vec<web::CssStyleDeclaration>,
}

impl DomParallaxSurface {
    pub fn collect(document: &web::Document) -> Self {
        let styles = |sel: &str| -> Vec<web::CssStyleDeclaration> {
            dom::query_all(document, sel)
                .iter()
                .filter_map(dom::inline_style)
                .collect()
        };
        let surface = Self {
            scene: dom::query(document, SCENE_SELECTOR).and_then(|el| dom::inline_style(&el)),
            traces: styles(TRACE_SELECTOR),
            leds: dom::query_all(document, LED_SELECTOR),
            blobs: styles(BLOB_SELECTOR),
        };
        if surface.scene.is_none() {
            log::debug!("[parallax] no scene ({SCENE_SELECTOR})");
        }
        log::debug!(
            "[parallax] traces={} leds={} blobs={}",
            surface.traces.len(),
            surface.leds.len(),
            surface.blobs.len()
        );
        surface
    }

    /// Viewport-space LED centers. Forces layout, so only called on load
    /// and resize.
    pub fn led_centers(&self) -> Vec<DVec2> {
        self.leds
            .iter()
            .map(|led| {
                let r = led.get_bounding_client_rect();
                rect_center(r.left(), r.top(), r.width(), r.height())
            })
            .collect()
    }
}

impl ParallaxSurface for DomParallaxSurface {
    fn has_scene(&self) -> bool {
        self.scene.is_some()
    }

    fn translate_scene(&mut self, dx: f64, dy: f64) {
        if let Some(style) = &self.scene {
            _ = style.set_property("transform", &format!("translate3d({dx}px, {dy}px, 0)"));
        }
    }

    fn trace_count(&self) -> usize {
        self.traces.len()
    }

    fn trace_duration(&self, index: usize) -> f64 {
        self.traces
            .get(index)
            .and_then(|s| s.get_property_value("animation-duration").ok())
            .map(|v| parse_seconds(&v))
            .unwrap_or(0.0)
    }

    fn set_trace_duration(&mut self, index: usize, seconds: f64) {
        if let Some(style) = self.traces.get(index) {
            _ = style.set_property("animation-duration", &format!("{seconds}s"));
        }
    }

    fn led_count(&self) -> usize {
        self.leds.len()
    }

    fn set_led_pulse(&mut self, index: usize, on: bool) {
        if let Some(led) = self.leds.get(index) {
            _ = led.class_list().toggle_with_force(LED_PULSE_CLASS, on);
        }
    }

    fn blob_count(&self) -> usize {
        self.blobs.len()
    }

    fn transform_blob(&mut self, index: usize, transform: BlobTransform) {
        if let Some(style) = self.blobs.get(index) {
            _ = style.set_property("transform", &transform.css());
        }
    }
}

pub struct CursorParallax {
    pub animator: ParallaxAnimator,
    pub surface: DomParallaxSurface,
    pub driver: Option<FrameDriver>,
}

impl CursorParallax {
    #[inline]
    fn tick(&mut self) -> bool {
        self.animator.frame_tick(&mut self.surface)
    }

    pub fn refresh_led_positions(&mut self) {
        let centers = self.surface.led_centers();
        self.animator.refresh_led_positions(centers);
    }

    /// Mouse moved: retarget and restart the loop if it had settled.
    pub fn on_mouse_move(&mut self, x: f64, y: f64, viewport: fx_core::Viewport) {
        if self.animator.on_mouse_move(x, y, viewport) {
            if let Some(driver) = &self.driver {
                driver.request();
            }
        }
    }
}

pub fn wire_parallax(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Rc<RefCell<CursorParallax>>> {
    let ease_override = document
        .body()
        .and_then(|b| b.get_attribute(PARALLAX_EASE_ATTR));
    let defaults = ParallaxConfig::default();
    let config = ParallaxConfig {
        ease: parse_ease_override(ease_override.as_deref(), defaults.ease),
        ..defaults
    };

    let fx = Rc::new(RefCell::new(CursorParallax {
        animator: ParallaxAnimator::new(config)?,
        surface: DomParallaxSurface::collect(document),
        driver: None,
    }));

    let fx_tick = fx.clone();
    let driver = FrameDriver::new(move || fx_tick.borrow_mut().tick());
    fx.borrow_mut().driver = Some(driver);

    crate::events::wire_pointer_handlers(window, fx.clone());

    let fx_resize = fx.clone();
    dom::listen(window, "resize", move |_| {
        fx_resize.borrow_mut().refresh_led_positions();
    });

    log::info!("[parallax] cursor parallax on, ease={}", config.ease);
    Ok(fx)
}
