use crate::core::selectors::{AMBIENT_SHAPES, HERO_BACKGROUND};
use crate::dom;
use crate::frame::TickerRegistry;
use std::rc::Rc;
use web_sys as web;

/// Suspend tickers and CSS ambient animations while the tab is hidden.
pub fn wire_visibility_gate(document: &web::Document, registry: Rc<TickerRegistry>) {
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_: web::Event| {
        let hidden = doc.hidden();
        if hidden {
            registry.suspend();
        } else {
            registry.resume();
        }
        set_ambient_play_state(&doc, if hidden { "paused" } else { "running" });
        log::debug!("[fx] visibility hidden={}", hidden);
    });
}

fn set_ambient_play_state(document: &web::Document, state: &str) {
    for shape in dom::query_all(document, AMBIENT_SHAPES) {
        dom::set_style(&shape, "animation-play-state", state);
    }
    if let Some(bg) = dom::query(document, HERO_BACKGROUND) {
        dom::set_style(&bg, "animation-play-state", state);
    }
}

/// Dispose every ticker when the page is torn down. A page entering the
/// back/forward cache is only suspended and resumes on `pageshow`.
pub fn wire_page_teardown(registry: Rc<TickerRegistry>) {
    let Some(window) = web::window() else {
        return;
    };
    let on_hide = registry.clone();
    dom::listen(&window, "pagehide", move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            on_hide.suspend();
        } else {
            let disposed = on_hide.dispose_all();
            log::info!("[frame] disposed {} tickers", disposed);
        }
    });
    dom::listen(&window, "pageshow", move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            registry.resume();
        }
    });
}
