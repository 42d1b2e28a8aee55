use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns one `requestAnimationFrame` callback. The callback runs `step`
/// and requests the next frame whenever `step` returns true; stimuli call
/// [`FrameDriver::request`] to restart an idle loop.
#[derive(Clone)]
pub struct FrameDriver {
    tick: TickSlot,
}

impl FrameDriver {
    pub fn new(mut step: impl FnMut() -> bool + 'static) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if step() {
                request_frame(&tick_clone);
            }
        }) as Box<dyn FnMut()>));
        Self { tick }
    }

    #[inline]
    pub fn request(&self) {
        request_frame(&self.tick);
    }
}

fn request_frame(tick: &TickSlot) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("[frame] requestAnimationFrame failed: {e:?}");
        }
    }
}
