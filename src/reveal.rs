use crate::constants::*;
use crate::dom;
use fx_core::page::{
    parse_reveal_index, reveal_kinds, transition_delay, RevealKind, CLASS_REVEAL, CLASS_VISIBLE,
    REVEAL_OFFSET_CHILD, REVEAL_OFFSET_TARGET, REVEAL_ROOT_MARGIN, REVEAL_TARGETS,
    REVEAL_THRESHOLD, REVEAL_TRANSITION,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply_baseline(el: &web::Element, offset: &str) {
    if let Some(style) = dom::inline_style(el) {
        dom::set_style_default(&style, "opacity", "0");
        dom::set_style_default(&style, "transform", offset);
        dom::set_style_default(&style, "transition", REVEAL_TRANSITION);
    }
}

fn stagger_index(document: &web::Document, el: &web::Element, kind: RevealKind) -> usize {
    match kind {
        RevealKind::SectionChild => {
            parse_reveal_index(el.get_attribute(REVEAL_INDEX_ATTR).as_deref())
        }
        RevealKind::ProjectCard | RevealKind::TimelineItem => {
            dom::query_all(document, &format!(".{}", kind.class_name()))
                .iter()
                .position(|e| e == el)
                .unwrap_or(0)
        }
    }
}

fn on_intersect(document: &web::Document, entries: js_sys::Array, observer: &web::IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
            continue;
        };
        if !entry.is_intersecting() {
            continue;
        }
        let target = entry.target();
        let classes = target.class_list();
        _ = classes.add_1(CLASS_VISIBLE);
        if let Some(style) = dom::inline_style(&target) {
            for kind in reveal_kinds(|c| classes.contains(c)) {
                let idx = stagger_index(document, &target, kind);
                _ = style.set_property("transition-delay", &transition_delay(kind, idx));
            }
        }
        observer.unobserve(&target);
    }
}

/// Fades sections in as they scroll into view. Returns the number of
/// observed elements.
pub fn wire_reveal(document: &web::Document) -> anyhow::Result<usize> {
    let document_cb = document.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            on_intersect(&document_cb, entries, &observer);
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    opts.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let mut observed = 0usize;
    for el in dom::query_all(document, REVEAL_TARGETS) {
        apply_baseline(&el, REVEAL_OFFSET_TARGET);
        observer.observe(&el);
        observed += 1;
    }

    for section in dom::query_all(document, REVEAL_SECTION_SELECTOR) {
        let container = section
            .query_selector(REVEAL_CONTAINER_SELECTOR)
            .ok()
            .flatten()
            .unwrap_or_else(|| section.clone());
        let children = container.children();
        for i in 0..children.length() {
            let Some(child) = children.item(i) else {
                continue;
            };
            let classes = child.class_list();
            if classes.contains(CLASS_REVEAL) || classes.contains(CLASS_VISIBLE) {
                continue;
            }
            _ = classes.add_1(CLASS_REVEAL);
            _ = child.set_attribute(REVEAL_INDEX_ATTR, &i.to_string());
            apply_baseline(&child, REVEAL_OFFSET_CHILD);
            observer.observe(&child);
            observed += 1;
        }
    }
    log::info!("[reveal] observing {observed} elements");
    Ok(observed)
}
