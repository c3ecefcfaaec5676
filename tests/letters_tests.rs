// Host-side tests for the hero letter reveal.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod letters {
        include!("../src/core/letters.rs");
    }
}

use fx::letters::*;

#[test]
fn one_span_per_character_with_nbsp() {
    let letters = split_letters("Hi there");
    let texts: Vec<&str> = letters.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["H", "i", "\u{00A0}", "t", "h", "e", "r", "e"]);
}

#[test]
fn delays_increase_by_50ms() {
    let letters = split_letters("Hi there");
    for (i, l) in letters.iter().enumerate() {
        assert_eq!(l.delay_ms, i as u32 * 50);
    }
    assert!(letters.windows(2).all(|w| w[0].delay_ms < w[1].delay_ms));
    let delays: Vec<String> = letters.iter().take(4).map(Letter::animation_delay).collect();
    assert_eq!(delays, vec!["0s", "0.05s", "0.1s", "0.15s"]);
}

#[test]
fn empty_text_yields_nothing() {
    assert!(split_letters("").is_empty());
}

#[test]
fn non_ascii_characters_stay_whole() {
    let letters = split_letters("José");
    assert_eq!(letters.len(), 4);
    assert_eq!(letters[3].text, "é");
}
