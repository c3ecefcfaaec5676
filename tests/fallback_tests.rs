// Host-side tests for the degraded and reduced-motion fallbacks.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod follower {
        include!("../src/core/follower.rs");
    }
    pub mod effect {
        include!("../src/core/effect.rs");
    }
    pub mod selectors {
        include!("../src/core/selectors.rs");
    }
    pub mod fallback {
        include!("../src/core/fallback.rs");
    }
}

use fx::fallback::*;
use fx::selectors::*;

/// Final value of a property after the writes are applied in order.
fn final_value(fallback: &Fallback, property: &str) -> Option<&'static str> {
    fallback
        .styles()
        .iter()
        .rev()
        .find(|(p, _)| *p == property)
        .map(|(_, v)| *v)
}

fn rule_for(rules: &[FallbackRule], selector: &str) -> FallbackRule {
    *rules
        .iter()
        .find(|r| r.selector == selector)
        .unwrap_or_else(|| panic!("no rule for {}", selector))
}

#[test]
fn degraded_mode_reveals_every_animated_element() {
    let rules = degraded_rules();
    let rule = rule_for(&rules, ANIMATED_ELEMENTS);
    assert!(rule.all);
    for class in [".reveal-text", ".fade-in-section", ".stagger-item", ".letter"] {
        assert!(rule.selector.split(", ").any(|s| s == class), "{} not covered", class);
    }
    assert_eq!(rule.fallback.class(), Some(VISIBLE_CLASS));
    assert_eq!(final_value(&rule.fallback, "opacity"), Some("1"));
    assert_eq!(final_value(&rule.fallback, "transform"), Some("none"));
    assert_eq!(final_value(&rule.fallback, "animation"), Some("none"));
    assert_eq!(final_value(&rule.fallback, "transition"), Some("none"));
}

#[test]
fn degraded_mode_switches_off_ambient_decoration() {
    let rules = degraded_rules();
    let shapes = rule_for(&rules, AMBIENT_SHAPES);
    assert!(shapes.all);
    assert_eq!(final_value(&shapes.fallback, "display"), Some("none"));
    assert_eq!(shapes.fallback.class(), None);

    let bg = rule_for(&rules, HERO_BACKGROUND);
    assert_eq!(final_value(&bg.fallback, "animation"), Some("none"));
    assert_eq!(final_value(&bg.fallback, "display"), None);

    let grain = rule_for(&rules, GRAIN_OVERLAY);
    assert_eq!(final_value(&grain.fallback, "display"), Some("none"));
}

#[test]
fn reduced_motion_shows_about_section_up_front() {
    let rules = reduced_motion_rules();

    let text = rule_for(&rules, ABOUT_TEXT);
    assert!(!text.all);
    assert_eq!(text.fallback.class(), Some(VISIBLE_CLASS));
    assert_eq!(final_value(&text.fallback, "opacity"), Some("1"));
    assert_eq!(final_value(&text.fallback, "transform"), Some("none"));
    assert_eq!(final_value(&text.fallback, "animation"), None);

    let cards = rule_for(&rules, SKILL_CARD);
    assert!(cards.all);
    assert_eq!(cards.fallback.class(), Some(VISIBLE_CLASS));
    assert_eq!(final_value(&cards.fallback, "animation"), Some("none"));
    assert_eq!(final_value(&cards.fallback, "opacity"), Some("1"));
    assert_eq!(final_value(&cards.fallback, "transform"), Some("none"));
}
