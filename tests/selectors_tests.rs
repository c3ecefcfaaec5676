// Host-side tests for the markup hooks shared by the effects.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod selectors {
    include!("../src/core/selectors.rs");
}

use selectors::*;

fn parts(list: &str) -> Vec<&str> {
    list.split(',').map(str::trim).collect()
}

#[test]
fn submit_label_is_looked_up_inside_the_submit_button() {
    // Resolved below the contact form element.
    assert!(!SUBMIT_BUTTON.contains(CONTACT_FORM));
    let (button, label) = SUBMIT_LABEL
        .split_once(' ')
        .expect("label selector has a descendant part");
    assert_eq!(button, SUBMIT_BUTTON);
    assert_eq!(label, "span");
}

#[test]
fn submit_button_gets_the_ripple() {
    assert!(parts(RIPPLE_BUTTONS).contains(&SUBMIT_BUTTON));
}

#[test]
fn degraded_list_reuses_the_reveal_roots() {
    let animated = parts(ANIMATED_ELEMENTS);
    assert!(animated.contains(&FADE_IN_SECTION));
    assert!(animated.contains(&STAGGER_ITEM));
    assert!(animated.contains(&format!(".{}", LETTER_CLASS).as_str()));
}

#[test]
fn cursor_reacts_to_cards() {
    let interactive = parts(CURSOR_INTERACTIVE);
    assert!(interactive.contains(&PROJECT_CARD));
    assert!(interactive.contains(&SKILL_CARD));
}
