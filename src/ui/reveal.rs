use crate::constants::{HOVER_CARD_SELECTOR, REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEAL_TRANSITION};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Cards start hidden 30px low and slide in when 10% of them is on screen.
pub fn wire_scroll_reveal(document: &web::Document) {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(el) = entry.target().dyn_into::<web::HtmlElement>() {
                    dom::set_style(&el, "opacity", "1");
                    dom::set_style(&el, "transform", "translateY(0)");
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin("0px 0px -50px 0px");
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[ui] IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();
    for el in &targets {
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transform", "translateY(30px)");
        dom::set_style(el, "transition", REVEAL_TRANSITION);
        observer.observe(el);
    }
    log::debug!("[ui] revealing {} elements on scroll", targets.len());
}

/// Lift glass cards under the pointer.
pub fn wire_card_hover(document: &web::Document) {
    for card in dom::query_all(document, HOVER_CARD_SELECTOR) {
        let enter = card.clone();
        dom::on(card.as_ref(), "mouseenter", move |_ev: web::MouseEvent| {
            dom::set_style(&enter, "background", "rgba(255, 255, 255, 0.15)");
            dom::set_style(&enter, "transform", "translateY(-5px) scale(1.02)");
            dom::set_style(&enter, "box-shadow", "0 15px 35px rgba(0, 212, 255, 0.3)");
            dom::set_style(&enter, "transition", "all 0.3s cubic-bezier(0.33, 1, 0.68, 1)");
        });
        let leave = card.clone();
        dom::on(card.as_ref(), "mouseleave", move |_ev: web::MouseEvent| {
            dom::set_style(&leave, "background", "rgba(255, 255, 255, 0.1)");
            dom::set_style(&leave, "transform", "translateY(0) scale(1)");
            dom::set_style(&leave, "box-shadow", "0 8px 32px rgba(0, 0, 0, 0.3)");
        });
    }
}
