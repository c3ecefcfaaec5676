use crate::core::constants::RIPPLE_COLLAPSE_MS;
use crate::core::selectors::*;
use crate::core::{burst, direct_tilt_neutral, direct_tilt_styles, BurstGuard};
use crate::dom;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Hover/press classes on the custom cursor, plus the "View" label over project cards.
pub fn wire_cursor_states(document: &web::Document) {
    let Some(cursor) = dom::query(document, CURSOR) else {
        return;
    };
    let cursor_text = dom::query(document, CURSOR_TEXT);

    for el in dom::query_all(document, CURSOR_INTERACTIVE) {
        let is_project = el.class_list().contains(&PROJECT_CARD[1..]);

        let (c, text) = (cursor.clone(), cursor_text.clone());
        dom::listen(&el, "mouseenter", move |_: web::MouseEvent| {
            dom::add_class(&c, CURSOR_HOVER_CLASS);
            if is_project {
                if let Some(t) = &text {
                    t.set_text_content(Some(CURSOR_VIEW_LABEL));
                    dom::set_style(t, "opacity", "1");
                }
            }
        });

        let (c, text) = (cursor.clone(), cursor_text.clone());
        dom::listen(&el, "mouseleave", move |_: web::MouseEvent| {
            dom::remove_class(&c, CURSOR_HOVER_CLASS);
            if let Some(t) = &text {
                dom::set_style(t, "opacity", "0");
            }
        });

        let c = cursor.clone();
        dom::listen(&el, "mousedown", move |_: web::MouseEvent| {
            dom::add_class(&c, CURSOR_ACTIVE_CLASS);
        });

        let c = cursor.clone();
        dom::listen(&el, "mouseup", move |_: web::MouseEvent| {
            dom::remove_class(&c, CURSOR_ACTIVE_CLASS);
        });
    }
}

/// Indigo cursor while the pointer is inside the about section.
pub fn wire_about_cursor(document: &web::Document) {
    let (Some(section), Some(dot), Some(outline)) = (
        dom::query(document, ABOUT_SECTION),
        dom::query(document, CURSOR_DOT),
        dom::query(document, CURSOR_OUTLINE),
    ) else {
        return;
    };
    if dom::query(document, CURSOR).is_none() {
        return;
    }

    let (d, o) = (dot.clone(), outline.clone());
    dom::listen(&section, "mouseenter", move |_: web::MouseEvent| {
        dom::apply_static_styles(&d, &ABOUT_CURSOR_DOT_STYLES);
        dom::apply_static_styles(&o, &ABOUT_CURSOR_OUTLINE_STYLES);
    });

    dom::listen(&section, "mouseleave", move |_: web::MouseEvent| {
        let dot_props: Vec<&str> = ABOUT_CURSOR_DOT_STYLES.iter().map(|(p, _)| *p).collect();
        let outline_props: Vec<&str> =
            ABOUT_CURSOR_OUTLINE_STYLES.iter().map(|(p, _)| *p).collect();
        dom::clear_styles(&dot, &dot_props);
        dom::clear_styles(&outline, &outline_props);
    });
}

/// Direct tilt and light reflection on project cards.
pub fn wire_project_tilt(document: &web::Document) {
    for card in dom::query_all(document, PROJECT_CARD) {
        let c = card.clone();
        dom::listen(&card, "mousemove", move |ev: web::MouseEvent| {
            let rect = dom::rect_of(&c);
            if rect.is_degenerate() {
                return;
            }
            let local = Vec2::new(ev.client_x() as f32, ev.client_y() as f32) - rect.origin();
            dom::apply_styles(&c, &direct_tilt_styles(local, rect.size()));
        });

        let c = card.clone();
        dom::listen(&card, "mouseleave", move |_: web::MouseEvent| {
            let (property, value) = direct_tilt_neutral();
            dom::set_style(&c, property, &value);
        });
    }
}

/// Ripple grows to the button's larger side on click and collapses afterwards.
pub fn wire_button_ripple(document: &web::Document) {
    for button in dom::query_all(document, RIPPLE_BUTTONS) {
        let b = button.clone();
        let doc = document.clone();
        dom::listen(&button, "click", move |_: web::MouseEvent| {
            let selector = format!(".{}", RIPPLE_CLASS);
            let ripple = match dom::query_within(&b, &selector) {
                Some(r) => r,
                None => {
                    let Some(r) = create_with_class(&doc, "span", RIPPLE_CLASS) else {
                        return;
                    };
                    _ = b.append_child(&r);
                    r
                }
            };
            dom::set_style(&ripple, "width", "0");
            dom::set_style(&ripple, "height", "0");

            let rect = dom::rect_of(&b);
            let size = format!("{}px", rect.width.max(rect.height));
            dom::set_style(&ripple, "width", &size);
            dom::set_style(&ripple, "height", &size);

            dom::after(RIPPLE_COLLAPSE_MS, move || {
                dom::set_style(&ripple, "width", "0");
                dom::set_style(&ripple, "height", "0");
            });
        });
    }
}

/// One particle burst per skill card, on its first hover ever.
pub fn wire_particle_burst(document: &web::Document) {
    for card in dom::query_all(document, SKILL_CARD) {
        let Some(container) = dom::query_within(&card, PARTICLE_CONTAINER) else {
            continue;
        };
        let guard = Rc::new(Cell::new(BurstGuard::from_attribute(
            card.get_attribute(HOVERED_ATTR).as_deref(),
        )));

        let c = card.clone();
        let doc = document.clone();
        dom::listen(&card, "mouseenter", move |_: web::MouseEvent| {
            let mut g = guard.get();
            let fired = g.fire();
            guard.set(g);
            if !fired {
                return;
            }
            _ = c.set_attribute(HOVERED_ATTR, "true");

            let rect = dom::rect_of(&c);
            for particle in burst(rect.size()) {
                let Some(el) = create_with_class(&doc, "div", PARTICLE_CLASS) else {
                    continue;
                };
                dom::apply_styles(&el, &particle.styles());
                _ = container.append_child(&el);
                dom::after(particle.remove_after_ms, move || el.remove());
            }
        });
    }
}

fn create_with_class(document: &web::Document, tag: &str, class: &str) -> Option<web::HtmlElement> {
    use wasm_bindgen::JsCast;
    let el = document.create_element(tag).ok()?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>().ok()
}
