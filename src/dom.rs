use fx_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Inline style of an HTML or SVG element.
pub fn inline_style(el: &web::Element) -> Option<web::CssStyleDeclaration> {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        return Some(h.style());
    }
    el.dyn_ref::<web::SvgElement>().map(|s| s.style())
}

/// Sets an inline style property only when the element has none yet.
pub fn set_style_default(style: &web::CssStyleDeclaration, property: &str, value: &str) {
    let existing = style.get_property_value(property).unwrap_or_default();
    let value = fx_core::page::style_or_default(&existing, value);
    if value != existing {
        _ = style.set_property(property, value);
    }
}

fn node_list_elements(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => node_list_elements(list),
        Err(e) => {
            log::warn!("[dom] bad selector {selector:?}: {e:?}");
            Vec::new()
        }
    }
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Registers a listener for the page lifetime.
pub fn listen(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] {event} listener failed: {e:?}");
    }
    closure.forget();
}

/// Like [`listen`], but promises the browser the handler never calls
/// `preventDefault`, which keeps scrolling off the main thread.
pub fn listen_passive(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[dom] passive {event} listener failed: {e:?}");
    }
    closure.forget();
}

/// Resolves once the window `load` event has fired (immediately if it
/// already has), i.e. once layout is stable enough to measure.
pub async fn window_loaded(window: &web::Window, document: &web::Document) {
    if document.ready_state() == "complete" {
        return;
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "load", &resolve, &opts,
        );
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
