use crate::constants::ANCHOR_SELECTOR;
use crate::dom;
use fx_core::page::anchor_selector;
use web_sys as web;

/// In-page links scroll smoothly to their target instead of jumping.
pub fn wire_anchor_links(document: &web::Document) {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR);
    log::debug!("[anchors] {} in-page links", anchors.len());
    for anchor in anchors {
        let document = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            let Some(target) = anchor_selector(&href).and_then(|sel| dom::query(&document, sel))
            else {
                return;
            };
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
}
