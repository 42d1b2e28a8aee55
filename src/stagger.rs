use crate::constants::{CODE_LINE_SELECTOR, STAT_SELECTOR};
use crate::dom;
use fx_core::page::{code_line_animation, stat_animation_delay};
use web_sys as web;

/// Staggered entrance animations for the hero code block and the stats row.
pub fn apply_staggers(document: &web::Document) {
    for (i, line) in dom::query_all(document, CODE_LINE_SELECTOR).iter().enumerate() {
        if let Some(style) = dom::inline_style(line) {
            _ = style.set_property("opacity", "0");
            _ = style.set_property("animation", &code_line_animation(i));
        }
    }
    for (i, stat) in dom::query_all(document, STAT_SELECTOR).iter().enumerate() {
        if let Some(style) = dom::inline_style(stat) {
            _ = style.set_property("animation-delay", &stat_animation_delay(i));
        }
    }
}
