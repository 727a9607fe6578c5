use crate::constants::{
    ACTIVE_CLASS, NAV_BAR_SELECTOR, NAV_LINK_SELECTOR, PROGRESS_BAR_CSS, SECTION_SELECTOR,
};
use crate::dom;
use crate::input;
use blob_core::ui::scroll::{nav_scroll_target, PROGRESS_THROTTLE_MS, SCROLL_SPY_THROTTLE_MS};
use blob_core::ui::{active_section, scroll_progress_percent, SectionBounds, Throttle};
use wasm_bindgen::JsCast;
use web_sys as web;

fn set_active(links: &[web::HtmlElement], active: Option<&web::HtmlElement>) {
    for l in links {
        _ = l.class_list().remove_1(ACTIVE_CLASS);
    }
    if let Some(a) = active {
        _ = a.class_list().add_1(ACTIVE_CLASS);
    }
}

/// Nav clicks scroll smoothly to their section, leaving room for the fixed bar.
pub fn wire_nav_links(document: &web::Document) {
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    for link in links.iter().cloned() {
        let all = links.clone();
        let doc = document.clone();
        let this = link.clone();
        dom::on(link.as_ref(), "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = this.get_attribute("href") else {
                return;
            };
            let Some(id) = input::anchor_id(&href) else {
                return;
            };
            let Some(section) = doc
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            let nav_height = dom::query(&doc, NAV_BAR_SELECTOR)
                .map(|n| n.offset_height() as f64)
                .unwrap_or(0.0);
            let top = nav_scroll_target(section.offset_top() as f64, nav_height);
            if let Some(w) = web::window() {
                let opts = web::ScrollToOptions::new();
                opts.set_top(top);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                w.scroll_to_with_scroll_to_options(&opts);
            }
            set_active(&all, Some(&this));
        });
    }
}

/// Highlight the link for the section under the nav bar while scrolling.
pub fn wire_scroll_spy(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    let doc = document.clone();
    let win = window.clone();
    let mut throttle = Throttle::new(SCROLL_SPY_THROTTLE_MS);
    dom::on(window.as_ref(), "scroll", move |_ev: web::Event| {
        if !throttle.ready() {
            return;
        }
        let sections: Vec<SectionBounds> = dom::query_all(&doc, SECTION_SELECTOR)
            .into_iter()
            .map(|s| SectionBounds {
                id: s.id(),
                top: s.offset_top() as f64,
                height: s.offset_height() as f64,
            })
            .collect();
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        if let Some(id) = active_section(&sections, scroll_y) {
            let active = dom::query(&doc, &format!("a[href=\"#{}\"]", id));
            set_active(&links, active.as_ref());
        }
    });
}

/// Thin gradient bar across the top showing how far the page has scrolled.
pub fn wire_scroll_progress(document: &web::Document) {
    let (Some(window), Some(body)) = (web::window(), document.body()) else {
        return;
    };
    let Ok(bar) = document
        .create_element("div")
        .map(|el| el.unchecked_into::<web::HtmlElement>())
    else {
        return;
    };
    _ = bar.set_attribute("style", PROGRESS_BAR_CSS);
    if body.append_child(&bar).is_err() {
        return;
    }
    let win = window.clone();
    let mut throttle = Throttle::new(PROGRESS_THROTTLE_MS);
    dom::on(window.as_ref(), "scroll", move |_ev: web::Event| {
        if !throttle.ready() {
            return;
        }
        let scroll_top = win.page_y_offset().unwrap_or(0.0);
        let viewport = win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let pct = scroll_progress_percent(scroll_top, body.offset_height() as f64, viewport);
        dom::set_style(&bar, "width", &format!("{}%", pct));
    });
}
