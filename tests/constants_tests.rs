// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn follower_rates_are_fractions() {
    for rate in [
        CURSOR_DOT_RATE,
        CURSOR_OUTLINE_RATE,
        PARALLAX_RATE,
        MAGNETIC_RATE,
        TILT_RATE,
        GRADIENT_RATE,
    ] {
        assert!(rate > 0.0 && rate < 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // The dot leads and the outline trails
    assert!(CURSOR_DOT_RATE > CURSOR_OUTLINE_RATE);

    // Background moves slower than the content for depth
    assert!(PARALLAX_BACKGROUND_SCALE < PARALLAX_CONTENT_SCALE);

    // Thresholds are intersection ratios
    assert!(SECTION_THRESHOLD > 0.0 && SECTION_THRESHOLD <= 1.0);
    assert!(ABOUT_THRESHOLD > 0.0 && ABOUT_THRESHOLD <= 1.0);

    // About text shows before the first card
    assert!(ABOUT_TEXT_DELAY_MS < ABOUT_CARD_BASE_MS);

    assert!(SETTLE_EPSILON > 0.0 && SETTLE_EPSILON < 0.1);
}

#[test]
fn mobile_tokens_are_lowercase() {
    for token in MOBILE_UA_TOKENS {
        assert_eq!(token, token.to_ascii_lowercase());
    }
}
