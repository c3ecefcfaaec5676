use crate::core::selectors::{CONTACT_FORM, SUBMIT_BUTTON, SUBMIT_LABEL};
use crate::core::{outcome_for_status, ButtonView, SubmitError, SubmitMachine};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct SubmitUi {
    form: web::HtmlFormElement,
    button: web::HtmlButtonElement,
    label: web::HtmlElement,
    machine: RefCell<SubmitMachine>,
}

impl SubmitUi {
    fn render(&self, view: &ButtonView) {
        self.label.set_text_content(Some(&view.label));
        self.button.set_disabled(view.disabled);
        if view.clear_form {
            self.form.reset();
        }
    }
}

/// Intercept the contact form and post it in the background.
pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = dom::query(document, CONTACT_FORM)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let Some(button) = dom::query_within(&form, SUBMIT_BUTTON)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        return;
    };
    let Some(label) = dom::query_within(&form, SUBMIT_LABEL) else {
        return;
    };
    let original = label.text_content().unwrap_or_default();
    let ui = Rc::new(SubmitUi {
        form: form.clone(),
        button,
        label,
        machine: RefCell::new(SubmitMachine::new(original)),
    });

    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let view = match ui.machine.borrow_mut().begin() {
            Ok(view) => view,
            Err(e) => {
                log::debug!("[form] {}", e);
                return;
            }
        };
        ui.render(&view);

        let ui = ui.clone();
        spawn_local(async move {
            let result = post_form(&ui.form).await;
            if let Err(e) = &result {
                log::error!("[form] submission error: {}", e);
            }
            let mut machine = ui.machine.borrow_mut();
            let Some(view) = machine.complete(&result) else {
                return;
            };
            log::info!("[form] submission finished: {:?}", machine.state());
            drop(machine);
            ui.render(&view);
            if let Some(ms) = view.reset_after_ms {
                let ui = ui.clone();
                dom::after(ms, move || {
                    if let Some(view) = ui.machine.borrow_mut().reset() {
                        ui.render(&view);
                    }
                });
            }
        });
    });
}

async fn post_form(form: &web::HtmlFormElement) -> Result<(), SubmitError> {
    let js_err = |e: wasm_bindgen::JsValue| SubmitError::Network(format!("{:?}", e));
    let window = web::window().ok_or_else(|| SubmitError::Network("no window".into()))?;

    let body = web::FormData::new_with_form(form).map_err(js_err)?;
    let headers = web::Headers::new().map_err(js_err)?;
    headers.set("Accept", "application/json").map_err(js_err)?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&body);
    init.set_headers(&headers);

    let request = web::Request::new_with_str_and_init(&form.action(), &init).map_err(js_err)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: web::Response = response.dyn_into().map_err(js_err)?;
    outcome_for_status(response.status())
}
