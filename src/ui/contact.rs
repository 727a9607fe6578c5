use crate::constants::{CONTACT_BUTTON_SELECTOR, CONTACT_FORM_SELECTOR};
use crate::dom;
use crate::ui::Notifier;
use blob_core::ui::{ButtonView, ContactEffect, ContactFlow, ContactForm};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct ContactView {
    form: web::HtmlFormElement,
    button: Option<web::HtmlButtonElement>,
    notifier: Notifier,
    flow: Rc<RefCell<ContactFlow>>,
}

impl ContactView {
    fn field(&self, selector: &str) -> String {
        let Ok(Some(el)) = self.form.query_selector(selector) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn read_form(&self) -> ContactForm {
        ContactForm::new(
            &self.field("input[type=\"text\"]"),
            &self.field("input[type=\"email\"]"),
            &self.field("textarea"),
        )
    }

    fn show_button(&self, view: &ButtonView) {
        let Some(button) = self.button.as_ref() else {
            return;
        };
        button.set_text_content(Some(&view.label));
        button.set_disabled(view.disabled);
        dom::set_style(button, "opacity", view.opacity);
        dom::set_style(button, "background", view.background);
    }

    fn apply<I: IntoIterator<Item = ContactEffect>>(&self, effects: I) {
        for effect in effects {
            match effect {
                ContactEffect::Notify { kind, message } => self.notifier.show(kind, &message),
                ContactEffect::Button(view) => self.show_button(&view),
                ContactEffect::ResetForm => self.form.reset(),
                ContactEffect::Schedule { delay_ms, timer } => {
                    let me = self.clone();
                    dom::set_timeout(delay_ms as i32, move || {
                        let next = me.flow.borrow_mut().on_timer(timer);
                        me.apply(next);
                    });
                }
            }
        }
    }
}

/// Validate and "send" the contact form. There is no backend; the send is
/// a fixed delay.
pub fn wire_contact_form(document: &web::Document, notifier: Notifier) {
    let Some(form) = dom::query(document, CONTACT_FORM_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let button = form
        .query_selector(CONTACT_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
    let label = button
        .as_ref()
        .and_then(|b| b.text_content())
        .unwrap_or_default();
    let view = ContactView {
        form: form.clone(),
        button,
        notifier,
        flow: Rc::new(RefCell::new(ContactFlow::new(label))),
    };
    dom::on(form.as_ref(), "submit", move |ev: web::Event| {
        ev.prevent_default();
        let data = view.read_form();
        let effects = view.flow.borrow_mut().submit(&data);
        view.apply(effects);
    });
}
