use crate::constants::{SCROLL_EASE_ATTR, SMOOTH_CONTENT_ID};
use crate::dom;
use crate::frame::FrameDriver;
use fx_core::{
    parse_ease_override, scroll_targets, MissingScrollTarget, ScrollConfig, ScrollIntegrator,
    ScrollSurface,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct DomScrollSurface {
    body: web::HtmlElement,
    content: web::HtmlElement,
}

impl ScrollSurface for DomScrollSurface {
    fn body_scroll_height(&self) -> f64 {
        self.body.scroll_height() as f64
    }

    fn content_height(&self) -> f64 {
        self.content.get_bounding_client_rect().height()
    }

    fn set_body_height(&mut self, px: f64) {
        _ = self.body.style().set_property("height", &format!("{px}px"));
    }

    fn translate_content(&mut self, y: f64) {
        _ = self
            .content
            .style()
            .set_property("transform", &format!("translate3d(0,{y}px,0)"));
    }
}

pub struct InertialScroll {
    pub integrator: ScrollIntegrator,
    pub surface: DomScrollSurface,
}

impl InertialScroll {
    #[inline]
    fn tick(&mut self) -> bool {
        self.integrator.frame_tick(&mut self.surface)
    }
}

/// Wires the inertial scroll loop onto `#smooth-content`. Without the
/// wrapper or the body the page keeps native scrolling and `Ok(None)` is
/// returned.
pub fn wire_inertial_scroll(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Option<Rc<RefCell<InertialScroll>>>> {
    let content = document
        .get_element_by_id(SMOOTH_CONTENT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let (content, body) = match scroll_targets(content, document.body()) {
        Ok(targets) => targets,
        Err(MissingScrollTarget::Content) => {
            log::debug!("[scroll] no #{SMOOTH_CONTENT_ID}; inertial scroll stays off");
            return Ok(None);
        }
        Err(MissingScrollTarget::Body) => {
            log::debug!("[scroll] no document body; inertial scroll stays off");
            return Ok(None);
        }
    };

    // native smooth scrolling would fight the integrator
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = root.style().set_property("scroll-behavior", "auto");
    }

    let config = ScrollConfig {
        ease: parse_ease_override(
            content.get_attribute(SCROLL_EASE_ATTR).as_deref(),
            ScrollConfig::default().ease,
        ),
    };
    let fx = Rc::new(RefCell::new(InertialScroll {
        integrator: ScrollIntegrator::new(config)?,
        surface: DomScrollSurface { body, content },
    }));

    let fx_tick = fx.clone();
    let driver = FrameDriver::new(move || fx_tick.borrow_mut().tick());

    let fx_scroll = fx.clone();
    let window_scroll = window.clone();
    dom::listen_passive(window, "scroll", move |_| {
        fx_scroll
            .borrow_mut()
            .integrator
            .on_scroll(dom::scroll_y(&window_scroll));
    });

    let fx_resize = fx.clone();
    let window_resize = window.clone();
    dom::listen(window, "resize", move |_| {
        let mut guard = fx_resize.borrow_mut();
        let InertialScroll { integrator, surface } = &mut *guard;
        let h = integrator.on_resize(surface, dom::scroll_y(&window_resize));
        log::debug!("[scroll] body height {h}px");
    });

    let first_frame = {
        let mut guard = fx.borrow_mut();
        let InertialScroll { integrator, surface } = &mut *guard;
        integrator.start(surface, dom::scroll_y(window))
    };
    if first_frame {
        driver.request();
    }
    log::info!("[scroll] inertial scroll on, ease={}", config.ease);
    Ok(Some(fx))
}
