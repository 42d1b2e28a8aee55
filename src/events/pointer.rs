use crate::constants::HOVER_SELECTOR;
use crate::dom;
use crate::parallax::CursorParallax;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(window: &web::Window, fx: Rc<RefCell<CursorParallax>>) {
    let window_move = window.clone();
    dom::listen_passive(window, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let viewport = dom::viewport(&window_move);
        fx.borrow_mut()
            .on_mouse_move(ev.client_x() as f64, ev.client_y() as f64, viewport);
    });
}

/// Gives hoverable elements an explicit resting transform so CSS hover
/// transitions have a starting point.
pub fn wire_hover_defaults(document: &web::Document) {
    for el in dom::query_all(document, HOVER_SELECTOR) {
        let Some(style) = dom::inline_style(&el) else {
            continue;
        };
        dom::listen(&el, "mouseenter", move |_| {
            dom::set_style_default(&style, "transform", "scale(1)");
        });
    }
}
