use crate::dom;
use crate::input;
use blob_core::ui::shortcut_target;
use web_sys as web;

/// Ctrl/Cmd + 1..4 jumps to a page section.
pub fn wire_section_shortcuts(document: &web::Document) {
    let doc = document.clone();
    dom::on(document.as_ref(), "keydown", move |ev: web::KeyboardEvent| {
        if !input::is_shortcut_modifier(ev.ctrl_key(), ev.meta_key()) {
            return;
        }
        let key = ev.key();
        let Some(selector) = shortcut_target(&key) else {
            return;
        };
        ev.prevent_default();
        if let Ok(Some(section)) = doc.query_selector(selector) {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&opts);
            log::debug!("[ui] shortcut {} -> {}", key, selector);
        }
    });
}
