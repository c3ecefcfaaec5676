use crate::core::selectors::{HERO_TEXT_ATTR, HERO_TITLE, LETTER_CLASS, LETTER_CONTAINER};
use crate::core::split_letters;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Replace the hero title's letter container with one animated span per character.
pub fn letter_reveal(document: &web::Document) -> usize {
    let Some(title) = dom::query(document, HERO_TITLE) else {
        return 0;
    };
    let Some(text) = title.get_attribute(HERO_TEXT_ATTR) else {
        return 0;
    };
    let Some(container) = dom::query_within(&title, LETTER_CONTAINER) else {
        return 0;
    };

    container.set_inner_html("");
    let letters = split_letters(&text);
    for letter in &letters {
        let Some(span) = document
            .create_element("span")
            .ok()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        span.set_class_name(LETTER_CLASS);
        span.set_text_content(Some(&letter.text));
        dom::set_style(&span, "animation-delay", &letter.animation_delay());
        _ = container.append_child(&span);
    }
    letters.len()
}
