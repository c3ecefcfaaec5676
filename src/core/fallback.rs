use super::effect::StaticStyle;
use super::selectors::{
    ABOUT_TEXT, AMBIENT_SHAPES, ANIMATED_ELEMENTS, GRAIN_OVERLAY, HERO_BACKGROUND, SKILL_CARD,
    VISIBLE_CLASS,
};

const REVEALED: &[StaticStyle] = &[
    ("animation", "none"),
    ("transition", "none"),
    ("opacity", "1"),
    ("transform", "none"),
];
const ABOUT_TEXT_REVEALED: &[StaticStyle] = &[("opacity", "1"), ("transform", "none")];
const CARD_REVEALED: &[StaticStyle] = &[
    ("animation", "none"),
    ("opacity", "1"),
    ("transform", "none"),
];
const HIDDEN: &[StaticStyle] = &[("display", "none")];
const STILL: &[StaticStyle] = &[("animation", "none")];

/// What happens to the elements matched by one rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// Jump to the final revealed state: visible class plus styles.
    Reveal(&'static [StaticStyle]),
    Restyle(&'static [StaticStyle]),
}

impl Fallback {
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Fallback::Reveal(_) => Some(VISIBLE_CLASS),
            Fallback::Restyle(_) => None,
        }
    }

    pub fn styles(&self) -> &'static [StaticStyle] {
        match self {
            Fallback::Reveal(styles) | Fallback::Restyle(styles) => styles,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallbackRule {
    pub selector: &'static str,
    /// Every match, or only the first one.
    pub all: bool,
    pub fallback: Fallback,
}

/// Low-end or reduced-motion devices: animated elements start revealed and
/// the ambient decoration is switched off.
pub fn degraded_rules() -> [FallbackRule; 4] {
    [
        FallbackRule {
            selector: ANIMATED_ELEMENTS,
            all: true,
            fallback: Fallback::Reveal(REVEALED),
        },
        FallbackRule {
            selector: AMBIENT_SHAPES,
            all: true,
            fallback: Fallback::Restyle(HIDDEN),
        },
        FallbackRule {
            selector: HERO_BACKGROUND,
            all: false,
            fallback: Fallback::Restyle(STILL),
        },
        FallbackRule {
            selector: GRAIN_OVERLAY,
            all: false,
            fallback: Fallback::Restyle(HIDDEN),
        },
    ]
}

/// Reduced motion also shows the about section without its scroll reveal.
pub fn reduced_motion_rules() -> [FallbackRule; 2] {
    [
        FallbackRule {
            selector: ABOUT_TEXT,
            all: false,
            fallback: Fallback::Reveal(ABOUT_TEXT_REVEALED),
        },
        FallbackRule {
            selector: SKILL_CARD,
            all: true,
            fallback: Fallback::Reveal(CARD_REVEALED),
        },
    ]
}
