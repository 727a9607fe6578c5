use crate::constants::{
    ACTIVE_CLASS, FILTER_BUTTON_SELECTOR, PROJECT_CARD_SELECTOR, SHOW_TRANSITION,
};
use crate::dom;
use blob_core::ui::CardTransition;
use web_sys as web;

pub fn wire_project_filters(document: &web::Document) {
    let buttons = dom::query_all(document, FILTER_BUTTON_SELECTOR);
    let cards = dom::query_all(document, PROJECT_CARD_SELECTOR);
    if buttons.is_empty() {
        return;
    }
    for button in buttons.iter().cloned() {
        let all_buttons = buttons.clone();
        let cards = cards.clone();
        let this = button.clone();
        dom::on(button.as_ref(), "click", move |_ev: web::MouseEvent| {
            let filter = this.get_attribute("data-filter").unwrap_or_default();
            for b in &all_buttons {
                _ = b.class_list().remove_1(ACTIVE_CLASS);
            }
            _ = this.class_list().add_1(ACTIVE_CLASS);
            log::debug!("[ui] filter {:?}", filter);
            for card in &cards {
                let category = card.get_attribute("data-category");
                apply(card, CardTransition::for_card(&filter, category.as_deref()));
            }
        });
    }
}

fn apply(card: &web::HtmlElement, t: CardTransition) {
    let (display, opacity, transform, transition) = t.immediate();
    if let Some(d) = display {
        dom::set_style(card, "display", d);
    }
    if let Some(tr) = transition {
        dom::set_style(card, "transition", tr);
    }
    dom::set_style(card, "opacity", opacity);
    dom::set_style(card, "transform", transform);

    let card = card.clone();
    dom::set_timeout(t.delay_ms() as i32, move || match t {
        CardTransition::Show => {
            dom::set_style(&card, "transition", SHOW_TRANSITION);
            dom::set_style(&card, "opacity", "1");
            dom::set_style(&card, "transform", "translateY(0)");
        }
        CardTransition::Hide => dom::set_style(&card, "display", "none"),
    });
}
