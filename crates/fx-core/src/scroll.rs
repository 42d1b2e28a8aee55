//! Inertial scroll integrator.
//!
//! The browser keeps scrolling natively; the integrator eases a rendered
//! offset toward the native one and presents it as a transform on a
//! content wrapper. Body height is synthesized so the native scroll range
//! still covers the transformed content.

use crate::config::{ConfigError, ScrollConfig};
use crate::damp::approach;
use crate::schedule::FrameLoop;

/// Presentation side of the integrator.
pub trait ScrollSurface {
    /// Native `scrollHeight` of the document body.
    fn body_scroll_height(&self) -> f64;
    /// Rendered height of the content wrapper.
    fn content_height(&self) -> f64;
    fn set_body_height(&mut self, px: f64);
    /// Vertical translation of the content wrapper, in px.
    fn translate_content(&mut self, y: f64);
}

/// The element inertial scroll could not find. Either one leaves the page
/// on native scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingScrollTarget {
    Content,
    Body,
}

/// Pairs the content wrapper with the body, reporting the first one missing.
pub fn scroll_targets<T>(
    content: Option<T>,
    body: Option<T>,
) -> Result<(T, T), MissingScrollTarget> {
    let content = content.ok_or(MissingScrollTarget::Content)?;
    let body = body.ok_or(MissingScrollTarget::Body)?;
    Ok((content, body))
}

#[derive(Debug, Clone)]
pub struct ScrollIntegrator {
    target: f64,
    current: f64,
    ease: f64,
    body_height: Option<f64>,
    frame_loop: FrameLoop,
}

impl ScrollIntegrator {
    pub fn new(config: ScrollConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            target: 0.0,
            current: 0.0,
            ease: config.ease,
            body_height: None,
            frame_loop: FrameLoop::perpetual(),
        })
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn body_height(&self) -> Option<f64> {
        self.body_height
    }

    #[inline]
    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    /// Page-load setup: sizes the body, samples the initial offset and
    /// returns true when the first frame must be requested.
    pub fn start<S: ScrollSurface>(&mut self, surface: &mut S, scroll_offset: f64) -> bool {
        self.sync_body_height(surface);
        self.on_scroll(scroll_offset);
        self.frame_loop.wake()
    }

    #[inline]
    pub fn on_scroll(&mut self, scroll_offset: f64) {
        self.target = scroll_offset;
    }

    /// Viewport changed size: re-synthesize body height, then re-sample the
    /// native offset, which the browser may have clamped.
    pub fn on_resize<S: ScrollSurface>(&mut self, surface: &mut S, scroll_offset: f64) -> f64 {
        let h = self.sync_body_height(surface);
        self.on_scroll(scroll_offset);
        h
    }

    /// One frame. Always returns true: the scroll loop never stops.
    pub fn frame_tick<S: ScrollSurface>(&mut self, surface: &mut S) -> bool {
        self.frame_loop.begin_frame();
        if self.body_height.is_none() {
            self.sync_body_height(surface);
        }
        self.current = approach(self.current, self.target, self.ease);
        surface.translate_content(-self.current);
        self.frame_loop.end_frame(false)
    }

    fn sync_body_height<S: ScrollSurface>(&mut self, surface: &mut S) -> f64 {
        let h = surface.body_scroll_height().max(surface.content_height());
        surface.set_body_height(h);
        self.body_height = Some(h);
        h
    }
}
