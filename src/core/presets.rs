use super::constants::*;
use super::effect::{
    Axes, HoverEffectConfig, LeaveBehavior, Lifecycle, PointerMapping, Response, Source, Track,
    TrackTarget,
};
use super::reveal::{ItemScope, MarkTarget, RevealConfig, RevealItems, RootMark, Stagger};
use super::selectors::*;
use glam::Vec2;

// Interpolated hover effects used on the portfolio page.

pub fn cursor() -> HoverEffectConfig {
    HoverEffectConfig {
        name: "cursor",
        source: Source::Document,
        mapping: PointerMapping::ClientPx,
        axes: Axes::Both,
        initial: Vec2::ZERO,
        lifecycle: Lifecycle::Continuous,
        tracks: vec![
            Track {
                target: TrackTarget::Selector(CURSOR_DOT),
                rate: CURSOR_DOT_RATE,
                response: Response::Position,
            },
            Track {
                target: TrackTarget::Selector(CURSOR_OUTLINE),
                rate: CURSOR_OUTLINE_RATE,
                response: Response::Position,
            },
        ],
        enter_styles: &[],
        leave_styles: &[],
        settled_styles: &[],
    }
}

pub fn hero_parallax() -> HoverEffectConfig {
    HoverEffectConfig {
        name: "hero-parallax",
        source: Source::Each(HERO),
        mapping: PointerMapping::CenteredUnit,
        axes: Axes::Both,
        initial: Vec2::ZERO,
        lifecycle: Lifecycle::Continuous,
        tracks: vec![
            Track {
                target: TrackTarget::Selector(HERO_CONTENT),
                rate: PARALLAX_RATE,
                response: Response::Translate {
                    scale: PARALLAX_CONTENT_SCALE,
                    suffix: "",
                },
            },
            Track {
                target: TrackTarget::Selector(HERO_BACKGROUND),
                rate: PARALLAX_RATE,
                response: Response::Translate {
                    scale: PARALLAX_BACKGROUND_SCALE,
                    suffix: " scale(1.1)",
                },
            },
        ],
        enter_styles: &[],
        leave_styles: &[],
        settled_styles: &[],
    }
}

pub fn magnetic_buttons() -> HoverEffectConfig {
    HoverEffectConfig {
        name: "magnetic",
        source: Source::Each(MAGNETIC_BUTTON),
        mapping: PointerMapping::CenteredUnit,
        axes: Axes::Both,
        initial: Vec2::ZERO,
        lifecycle: Lifecycle::WhileHovering {
            on_leave: LeaveBehavior::Snap,
        },
        tracks: vec![Track {
            target: TrackTarget::SourceElement,
            rate: MAGNETIC_RATE,
            response: Response::Translate {
                scale: MAGNETIC_SCALE,
                suffix: "",
            },
        }],
        enter_styles: &[("transition", "box-shadow 0.2s, border-color 0.2s")],
        leave_styles: &[
            ("transition", "all 0.3s cubic-bezier(0.33, 1, 0.68, 1)"),
            ("transform", "translate(0, 0)"),
        ],
        settled_styles: &[],
    }
}

pub fn skill_card_tilt() -> HoverEffectConfig {
    HoverEffectConfig {
        name: "skill-tilt",
        source: Source::Each(SKILL_CARD),
        mapping: PointerMapping::SignedUnit,
        axes: Axes::Both,
        initial: Vec2::ZERO,
        lifecycle: Lifecycle::WhileHovering {
            on_leave: LeaveBehavior::Settle {
                epsilon: SETTLE_EPSILON,
            },
        },
        tracks: vec![Track {
            target: TrackTarget::SourceElement,
            rate: TILT_RATE,
            response: Response::Tilt {
                max_deg: TILT_MAX_DEG,
            },
        }],
        enter_styles: &[],
        leave_styles: &[],
        settled_styles: &[("transform", "")],
    }
}

pub fn about_gradient() -> HoverEffectConfig {
    HoverEffectConfig {
        name: "about-gradient",
        source: Source::Each(ABOUT_SECTION),
        mapping: PointerMapping::Percent,
        axes: Axes::Both,
        initial: Vec2::splat(GRADIENT_CENTER_PERCENT),
        lifecycle: Lifecycle::Continuous,
        tracks: vec![Track {
            target: TrackTarget::Selector(ABOUT_BACKGROUND),
            rate: GRADIENT_RATE,
            response: Response::CustomPercent,
        }],
        enter_styles: &[],
        leave_styles: &[],
        settled_styles: &[],
    }
}

// Scroll reveals.

pub fn fade_in_sections() -> RevealConfig {
    RevealConfig {
        name: "section",
        root: FADE_IN_SECTION,
        threshold: SECTION_THRESHOLD,
        root_margin: Some(SECTION_ROOT_MARGIN),
        root_mark: Some(RootMark {
            target: MarkTarget::Root,
            delay_ms: 0,
        }),
        items: None,
        will_change_reset_ms: Some(SECTION_WILL_CHANGE_RESET_MS),
    }
}

pub fn project_stagger() -> RevealConfig {
    RevealConfig {
        name: "projects",
        root: PROJECTS_SECTION,
        threshold: SECTION_THRESHOLD,
        root_margin: Some(SECTION_ROOT_MARGIN),
        root_mark: None,
        items: Some(RevealItems {
            selector: STAGGER_ITEM,
            scope: ItemScope::WithinRoot,
            stagger: Stagger {
                base_ms: 0,
                step_ms: PROJECT_STAGGER_STEP_MS,
            },
        }),
        will_change_reset_ms: Some(PROJECT_WILL_CHANGE_RESET_MS),
    }
}

pub fn about_section() -> RevealConfig {
    RevealConfig {
        name: "about",
        root: ABOUT_SECTION,
        threshold: ABOUT_THRESHOLD,
        root_margin: None,
        root_mark: Some(RootMark {
            target: MarkTarget::Selector(ABOUT_TEXT),
            delay_ms: ABOUT_TEXT_DELAY_MS,
        }),
        items: Some(RevealItems {
            selector: SKILL_CARD,
            scope: ItemScope::Document,
            stagger: Stagger {
                base_ms: ABOUT_CARD_BASE_MS,
                step_ms: ABOUT_CARD_STEP_MS,
            },
        }),
        will_change_reset_ms: None,
    }
}
