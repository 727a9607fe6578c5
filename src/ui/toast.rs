use crate::constants::NOTIFICATION_CLASS;
use crate::dom;
use blob_core::ui::toast::{TOAST_SLIDE_OUT_MS, TOAST_VISIBLE_MS};
use blob_core::ui::{Toast, ToastKind, ToastPhase, ToastSlot};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shows one `.notification` at a time in the top-right corner.
#[derive(Clone)]
pub struct Notifier {
    document: web::Document,
    slot: Rc<RefCell<ToastSlot>>,
    element: Rc<RefCell<Option<web::HtmlElement>>>,
}

impl Notifier {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            slot: Rc::new(RefCell::new(ToastSlot::default())),
            element: Rc::new(RefCell::new(None)),
        }
    }

    pub fn show(&self, kind: ToastKind, message: &str) {
        // Drop whatever is on screen, including toasts not created by us
        if let Ok(Some(existing)) = self
            .document
            .query_selector(&format!(".{}", NOTIFICATION_CLASS))
        {
            existing.remove();
        }
        let toast = Toast::new(kind, message);
        let Some(el) = self.create_element(&toast) else {
            return;
        };
        let generation = self.slot.borrow_mut().show(toast);
        *self.element.borrow_mut() = Some(el);
        log::info!("[ui] toast {}: {}", kind.class_name(), message);

        let me = self.clone();
        dom::set_timeout(TOAST_VISIBLE_MS as i32, move || {
            if !me.slot.borrow_mut().on_timer(generation, ToastPhase::SlideOut) {
                return;
            }
            if let Some(el) = me.element.borrow().as_ref() {
                dom::set_style(el, "animation", "slideOutRight 0.5s ease-in");
            }
            let me2 = me.clone();
            dom::set_timeout(TOAST_SLIDE_OUT_MS as i32, move || {
                if me2.slot.borrow_mut().on_timer(generation, ToastPhase::Remove) {
                    if let Some(el) = me2.element.borrow_mut().take() {
                        el.remove();
                    }
                }
            });
        });
    }

    fn create_element(&self, toast: &Toast) -> Option<web::HtmlElement> {
        use wasm_bindgen::JsCast;
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_class_name(&format!("{} {}", NOTIFICATION_CLASS, toast.kind.class_name()));
        el.set_text_content(Some(&toast.message));
        _ = el.set_attribute("style", &toast.css());
        self.document.body()?.append_child(&el).ok()?;
        Some(el)
    }
}
