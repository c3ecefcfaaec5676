use super::constants::{LETTER_DELAY_STEP_MS, NBSP};

#[derive(Clone, Debug, PartialEq)]
pub struct Letter {
    pub text: String,
    pub delay_ms: u32,
}

impl Letter {
    /// CSS `animation-delay` value, e.g. `0.15s`.
    pub fn animation_delay(&self) -> String {
        format!("{}s", self.delay_ms as f64 / 1000.0)
    }
}

/// One entry per character in order; spaces become non-breaking so the span keeps its width.
pub fn split_letters(text: &str) -> Vec<Letter> {
    text.chars()
        .enumerate()
        .map(|(i, c)| Letter {
            text: if c == ' ' { NBSP.to_string() } else { c.to_string() },
            delay_ms: i as u32 * LETTER_DELAY_STEP_MS,
        })
        .collect()
}
