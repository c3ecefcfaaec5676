use crate::core::selectors::WILL_CHANGE_INLINE;
use crate::core::constants::{LONG_TASK_WARN_MS, WILL_CHANGE_CLEANUP_MS};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Warn about main-thread tasks longer than the threshold. Best effort: browsers
/// without the Long Tasks API reject the observe call and we carry on.
pub fn watch_long_tasks() -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |list: web::PerformanceObserverEntryList, _observer: web::PerformanceObserver| {
            for entry in list.get_entries().iter() {
                let Ok(entry) = entry.dyn_into::<web::PerformanceEntry>() else {
                    continue;
                };
                if entry.duration() > LONG_TASK_WARN_MS {
                    log::warn!("Long task detected: {:.2} ms", entry.duration());
                }
            }
        },
    )
        as Box<dyn FnMut(web::PerformanceObserverEntryList, web::PerformanceObserver)>);

    let observer = web::PerformanceObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("PerformanceObserver: {:?}", e))?;

    let init = js_sys::Object::new();
    let entry_types = js_sys::Array::of1(&JsValue::from_str("longtask"));
    js_sys::Reflect::set(&init, &JsValue::from_str("entryTypes"), &entry_types)
        .map_err(|e| anyhow::anyhow!("observer init: {:?}", e))?;
    observer
        .observe_with_options(init.unchecked_ref())
        .map_err(|e| anyhow::anyhow!("longtask observe: {:?}", e))?;

    callback.forget();
    Ok(())
}

/// Some time after load, drop inline `will-change` hints that are no longer needed.
pub fn schedule_will_change_cleanup(document: &web::Document) {
    let doc = document.clone();
    dom::after(WILL_CHANGE_CLEANUP_MS, move || {
        let mut cleared = 0;
        for el in dom::query_all(&doc, WILL_CHANGE_INLINE) {
            if el.matches(":hover").unwrap_or(false) {
                continue;
            }
            dom::set_style(&el, "will-change", "auto");
            cleared += 1;
        }
        log::debug!("[perf] will-change cleared on {} elements", cleared);
    });
}
