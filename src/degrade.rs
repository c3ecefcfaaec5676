use crate::core::{degraded_rules, reduced_motion_rules, FallbackRule};
use crate::dom;
use web_sys as web;

fn apply_rule(document: &web::Document, rule: &FallbackRule) -> usize {
    let targets = if rule.all {
        dom::query_all(document, rule.selector)
    } else {
        dom::query(document, rule.selector).into_iter().collect()
    };
    for el in &targets {
        if let Some(class) = rule.fallback.class() {
            dom::add_class(el, class);
        }
        dom::apply_static_styles(el, rule.fallback.styles());
    }
    targets.len()
}

/// Low-end or reduced-motion mode: no scroll/letter animations and no ambient decoration.
pub fn apply_degraded_mode(document: &web::Document) -> usize {
    let touched: usize = degraded_rules()
        .iter()
        .map(|rule| apply_rule(document, rule))
        .sum();
    log::info!("[fx] degraded mode: {} elements forced to their final state", touched);
    touched
}

/// Reduced motion also reveals the about text and skill cards up front.
pub fn apply_reduced_motion_about(document: &web::Document) {
    for rule in reduced_motion_rules() {
        apply_rule(document, &rule);
    }
}
