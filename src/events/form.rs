use crate::constants::CONTACT_FORM_SELECTOR;
use crate::dom;
use fx_core::page::{ContactMessage, CONTACT_RECIPIENT};
use wasm_bindgen::JsCast;
use web_sys as web;

fn input_value(form: &web::HtmlFormElement, selector: &str) -> String {
    form.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|i| i.value())
        .unwrap_or_default()
}

fn textarea_value(form: &web::HtmlFormElement) -> String {
    form.query_selector("textarea")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|t| t.value())
        .unwrap_or_default()
}

/// Submitting the contact form opens a prefilled mail instead of posting.
pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = dom::query(document, CONTACT_FORM_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::debug!("[form] no contact form");
        return;
    };
    let form_submit = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let msg = ContactMessage {
            name: input_value(&form_submit, "input[type=\"text\"]"),
            email: input_value(&form_submit, "input[type=\"email\"]"),
            message: textarea_value(&form_submit),
        };
        let href = msg.mailto_href(CONTACT_RECIPIENT, |s| js_sys::encode_uri_component(s).into());
        if let Some(w) = web::window() {
            if let Err(e) = w.location().set_href(&href) {
                log::warn!("[form] mailto navigation failed: {e:?}");
            }
        }
        form_submit.reset();
    });
}
