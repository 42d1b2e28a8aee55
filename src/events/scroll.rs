use crate::constants::*;
use crate::dom;
use fx_core::page::{active_section, header_style, nav_link_is_active};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Nav-link highlighting and header styling, both re-evaluated on every
/// scroll event.
pub fn wire_page_scroll(window: &web::Window, document: &web::Document) {
    let window_scroll = window.clone();
    let document_scroll = document.clone();
    dom::listen_passive(window, "scroll", move |_| {
        let y = dom::scroll_y(&window_scroll);
        highlight_nav(&document_scroll, y);
        style_header(&document_scroll, y);
    });
}

fn highlight_nav(document: &web::Document, scroll_y: f64) {
    let sections: Vec<(String, f64)> = dom::query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|s| s.dyn_into::<web::HtmlElement>().ok())
        .map(|s| (s.id(), s.offset_top() as f64))
        .collect();
    let active = active_section(sections.iter().map(|(id, top)| (id.as_str(), *top)), scroll_y);

    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let Some(style) = dom::inline_style(&link) else {
            continue;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        let color = if nav_link_is_active(&href, active) {
            NAV_COLOR_ACTIVE
        } else {
            NAV_COLOR_IDLE
        };
        _ = style.set_property("color", color);
    }
}

fn style_header(document: &web::Document, scroll_y: f64) {
    let Some(style) = dom::query(document, NAVBAR_SELECTOR).and_then(|el| dom::inline_style(&el))
    else {
        return;
    };
    let hs = header_style(scroll_y);
    _ = style.set_property("backdrop-filter", hs.backdrop_filter);
    _ = style.set_property("box-shadow", hs.box_shadow);
}
