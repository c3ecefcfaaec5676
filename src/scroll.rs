use crate::core::selectors::{ANCHOR_LINKS, VISIBLE_CLASS};
use crate::core::{
    ItemScope, MarkTarget, RevealConfig, RevealRegistry, StepAction, StepTarget,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Observe every root of `config` and run its staggered reveal once per root.
pub fn observe_reveal(document: &web::Document, config: RevealConfig) -> anyhow::Result<()> {
    let roots = dom::query_all(document, config.root);
    if roots.is_empty() {
        return Ok(());
    }
    let key_attr = config.key_attribute();
    for (i, root) in roots.iter().enumerate() {
        _ = root.set_attribute(&key_attr, &i.to_string());
    }

    let config = Rc::new(config);
    let registry = Rc::new(RefCell::new(RevealRegistry::new()));
    let doc = document.clone();
    let cfg = config.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let root = entry.target();
                let Some(key) = root
                    .get_attribute(&key_attr)
                    .and_then(|k| k.parse::<u32>().ok())
                else {
                    continue;
                };
                if !registry.borrow_mut().claim(key) {
                    continue;
                }
                observer.unobserve(&root);
                run_reveal(&doc, &cfg, &root);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(config.threshold));
    if let Some(margin) = config.root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    for root in &roots {
        observer.observe(root);
    }
    callback.forget();
    log::info!("[reveal] {} observing {} roots", config.name, roots.len());
    Ok(())
}

fn run_reveal(document: &web::Document, config: &RevealConfig, root: &web::Element) {
    let items = match config.items {
        Some(items) => match items.scope {
            ItemScope::WithinRoot => dom::query_all_within(root, items.selector),
            ItemScope::Document => dom::query_all(document, items.selector),
        },
        None => Vec::new(),
    };
    let steps = config.schedule(items.len());
    log::debug!("[reveal] {}: {} steps", config.name, steps.len());

    for step in steps {
        let el: Option<web::Element> = match step.target {
            StepTarget::Mark(MarkTarget::Root) => Some(root.clone()),
            StepTarget::Mark(MarkTarget::Selector(sel)) => {
                dom::query(document, sel).map(Into::into)
            }
            StepTarget::Item(i) => items.get(i).cloned().map(Into::into),
        };
        let Some(el) = el else {
            continue;
        };
        let action = step.action;
        let run = move || match action {
            StepAction::MarkVisible => dom::add_class(&el, VISIBLE_CLASS),
            StepAction::ResetWillChange => {
                if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                    dom::set_style(html, "will-change", "auto");
                }
            }
        };
        if step.at_ms == 0 {
            run();
        } else {
            dom::after(step.at_ms, run);
        }
    }
}

/// In-page anchor links scroll instead of jumping; instant under reduced motion.
pub fn wire_anchor_scroll(document: &web::Document, reduced_motion: bool) {
    for anchor in dom::query_all(document, ANCHOR_LINKS) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = doc.query_selector(&href).ok().flatten() else {
                return;
            };
            let options = web::ScrollIntoViewOptions::new();
            options.set_behavior(if reduced_motion {
                web::ScrollBehavior::Auto
            } else {
                web::ScrollBehavior::Smooth
            });
            options.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}
