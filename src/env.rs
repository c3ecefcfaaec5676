use crate::core::selectors::REDUCED_MOTION_QUERY;
use crate::core::DeviceProfile;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Read the capability hints once. Missing APIs leave the hint unset.
pub fn read_device_profile(window: &web::Window) -> DeviceProfile {
    let navigator = window.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default();

    let concurrency = navigator.hardware_concurrency();
    let hardware_concurrency = (concurrency.is_finite() && concurrency > 0.0).then(|| concurrency as u32);

    // Not exposed by web-sys; Chromium-only.
    let device_memory = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64());

    let prefers_reduced_motion = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);

    DeviceProfile {
        user_agent,
        hardware_concurrency,
        device_memory,
        prefers_reduced_motion,
    }
}
