use crate::constants::{SKILLS_SECTION_SELECTOR, SKILL_BAR_SELECTOR};
use crate::dom;
use blob_core::ui::skills::{SKILLS_VISIBLE_THRESHOLD, SKILL_GLOW, SKILL_TRANSITION};
use blob_core::ui::{plan_skill_bars, OnceReveal};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Fill the skill bars, staggered, the first time the section is 30% visible.
pub fn wire_skill_bars(document: &web::Document) {
    let Some(section) = dom::query(document, SKILLS_SECTION_SELECTOR) else {
        return;
    };
    let bars = dom::query_all(document, SKILL_BAR_SELECTOR);
    if bars.is_empty() {
        return;
    }
    let mut once = OnceReveal::default();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !once.observe(entry.is_intersecting()) {
                    continue;
                }
                let levels: Vec<Option<String>> =
                    bars.iter().map(|b| b.get_attribute("data-level")).collect();
                let plans = plan_skill_bars(levels.iter().map(|l| l.as_deref()));
                log::debug!("[ui] filling {} skill bars", plans.len());
                for plan in plans {
                    let Some(bar) = bars.get(plan.index).cloned() else {
                        continue;
                    };
                    let glow_bar = bar.clone();
                    let width = plan.width;
                    dom::set_timeout(plan.start_ms as i32, move || {
                        dom::set_style(&bar, "transition", SKILL_TRANSITION);
                        dom::set_style(&bar, "width", &width);
                    });
                    dom::set_timeout(plan.glow_ms as i32, move || {
                        dom::set_style(&glow_bar, "box-shadow", SKILL_GLOW);
                    });
                }
                observer.unobserve(&entry.target());
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(SKILLS_VISIBLE_THRESHOLD));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer.observe(&section),
        Err(e) => log::warn!("[ui] IntersectionObserver unavailable: {:?}", e),
    }
    callback.forget();
}
