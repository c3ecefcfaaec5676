#![cfg(target_arch = "wasm32")]
use crate::core::{presets, DeviceProfile, EffectGroup};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod core;
mod degrade;
mod dom;
mod effects;
mod env;
mod events;
mod form;
mod frame;
mod perf;
mod scroll;
mod text;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let once = Closure::once_into_js(move || {
            if let Err(e) = init() {
                log::error!("init error: {:?}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", once.unchecked_ref())?;
    } else if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let profile = env::read_device_profile(&window);
    log::info!(
        "[fx] mobile={} low_end={} reduced_motion={}",
        profile.is_mobile(),
        profile.is_low_end(),
        profile.prefers_reduced_motion
    );

    // Letters must exist before degraded mode so they are revealed with the rest.
    text::letter_reveal(&document);

    let registry = frame::TickerRegistry::new();
    wire_effects(&document, &profile, &registry);
    wire_reveals(&document);

    events::wire_button_ripple(&document);
    scroll::wire_anchor_scroll(&document, profile.prefers_reduced_motion);
    form::wire_contact_form(&document);

    if profile.degraded() {
        degrade::apply_degraded_mode(&document);
    }
    if profile.prefers_reduced_motion {
        degrade::apply_reduced_motion_about(&document);
    }

    events::wire_visibility_gate(&document, registry.clone());
    events::wire_page_teardown(registry.clone());
    if registry.is_empty() {
        log::info!("[fx] no frame-driven effects on this device");
    } else {
        log::info!("[fx] {} tickers registered", registry.len());
    }

    if profile.allows(EffectGroup::LongTaskMonitor) {
        if let Err(e) = perf::watch_long_tasks() {
            log::debug!("[perf] long task monitor unavailable: {:?}", e);
        }
    }
    wire_load_cleanup(&window, &document);
    Ok(())
}

fn wire_effects(document: &web::Document, profile: &DeviceProfile, registry: &Rc<frame::TickerRegistry>) {
    if profile.allows(EffectGroup::Cursor) {
        effects::mount(document, presets::cursor(), registry);
        events::wire_cursor_states(document);
    }
    if profile.allows(EffectGroup::ProjectTilt) {
        events::wire_project_tilt(document);
    }
    if profile.allows(EffectGroup::HeroParallax) {
        effects::mount(document, presets::hero_parallax(), registry);
    }
    if profile.allows(EffectGroup::Magnetic) {
        effects::mount(document, presets::magnetic_buttons(), registry);
    }
    if profile.allows(EffectGroup::AboutSection) {
        effects::mount(document, presets::about_gradient(), registry);
        effects::mount(document, presets::skill_card_tilt(), registry);
        events::wire_particle_burst(document);
        events::wire_about_cursor(document);
    }
}

fn wire_reveals(document: &web::Document) {
    let configs = [
        presets::fade_in_sections(),
        presets::project_stagger(),
        presets::about_section(),
    ];
    for config in configs {
        let name = config.name;
        if let Err(e) = scroll::observe_reveal(document, config) {
            log::warn!("[reveal] {} not observed: {:?}", name, e);
        }
    }
}

fn wire_load_cleanup(window: &web::Window, document: &web::Document) {
    if document.ready_state() == "complete" {
        perf::schedule_will_change_cleanup(document);
        return;
    }
    let doc = document.clone();
    dom::listen(window, "load", move |_: web::Event| {
        perf::schedule_will_change_cleanup(&doc);
    });
}
