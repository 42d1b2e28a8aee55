#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod inertial;
mod parallax;
mod reveal;
mod stagger;
mod typing;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    events::wire_anchor_links(&document);
    if let Err(e) = reveal::wire_reveal(&document) {
        // content stays visible without the observer, only the fade is lost
        log::warn!("[reveal] disabled: {:?}", e);
    }
    typing::start_typing(&window, &document);

    if let Err(e) = inertial::wire_inertial_scroll(&window, &document) {
        log::warn!("[scroll] inertial scroll disabled: {:?}", e);
    }
    let parallax = match parallax::wire_parallax(&window, &document) {
        Ok(fx) => Some(fx),
        Err(e) => {
            log::warn!("[parallax] disabled: {:?}", e);
            None
        }
    };

    events::wire_page_scroll(&window, &document);
    events::wire_contact_form(&document);
    events::wire_hover_defaults(&document);
    stagger::apply_staggers(&document);

    log::info!("{}", constants::WELCOME_MESSAGE);

    let Some(parallax) = parallax else {
        return Ok(());
    };
    // LED centers are only meaningful once layout has settled
    dom::window_loaded(&window, &document).await;
    parallax.borrow_mut().refresh_led_positions();
    log::info!(
        "[parallax] cached {} LED positions",
        parallax.borrow().animator.led_positions().len()
    );
    Ok(())
}
