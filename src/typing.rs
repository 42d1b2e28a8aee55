use crate::constants::{TYPING_SELECTOR, TYPING_TEXT_KEY};
use crate::dom;
use fx_core::page::{Typewriter, TYPING_INTERVAL_MS, TYPING_START_DELAY_MS};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Clears the hero `.typing` element and types its text back in.
pub fn start_typing(window: &web::Window, document: &web::Document) {
    let Some(el) = dom::query(document, TYPING_SELECTOR) else {
        return;
    };
    let text = el
        .dyn_ref::<web::HtmlElement>()
        .and_then(|h| h.dataset().get(TYPING_TEXT_KEY))
        .filter(|t| !t.is_empty())
        .or_else(|| el.text_content())
        .unwrap_or_default();
    el.set_text_content(Some(""));

    let writer = Typewriter::new(text);
    let start = Closure::once_into_js(move || type_out(el, writer));
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        start.unchecked_ref(),
        TYPING_START_DELAY_MS,
    ) {
        log::warn!("[typing] setTimeout failed: {e:?}");
    }
}

fn type_out(el: web::Element, mut writer: Typewriter) {
    let Some(window) = web::window() else {
        return;
    };
    let handle = Rc::new(Cell::new(None::<i32>));
    let handle_tick = handle.clone();
    let tick = Closure::wrap(Box::new(move || {
        if let Some(visible) = writer.step() {
            el.set_text_content(Some(visible));
        }
        if writer.is_done() {
            if let (Some(w), Some(h)) = (web::window(), handle_tick.take()) {
                w.clear_interval_with_handle(h);
            }
        }
    }) as Box<dyn FnMut()>);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        TYPING_INTERVAL_MS,
    ) {
        Ok(h) => handle.set(Some(h)),
        Err(e) => log::warn!("[typing] setInterval failed: {e:?}"),
    }
    tick.forget();
}
