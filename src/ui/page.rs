use crate::constants::{BODY_FADE_DELAY_MS, WELCOME_DELAY_MS, WELCOME_MESSAGE};
use crate::dom;
use crate::ui::Notifier;
use blob_core::ui::ToastKind;
use web_sys as web;

/// Fade the body in once the page has loaded, then greet the visitor.
pub fn wire_page_load(document: &web::Document, notifier: Notifier) {
    let (Some(window), Some(body)) = (web::window(), document.body()) else {
        return;
    };
    dom::set_style(&body, "opacity", "0");
    dom::set_style(&body, "transition", "opacity 0.8s ease-in");

    let on_load = move || {
        let body = body.clone();
        dom::set_timeout(BODY_FADE_DELAY_MS, move || dom::set_style(&body, "opacity", "1"));
        let notifier = notifier.clone();
        dom::set_timeout(WELCOME_DELAY_MS, move || {
            notifier.show(ToastKind::Info, WELCOME_MESSAGE)
        });
    };

    // The module may start after `load` has already fired
    if document.ready_state() == "complete" {
        on_load();
        return;
    }
    let mut on_load = Some(on_load);
    dom::on(window.as_ref(), "load", move |_ev: web::Event| {
        if let Some(f) = on_load.take() {
            f();
        }
    });
}
