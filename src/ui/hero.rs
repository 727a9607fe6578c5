use crate::constants::{
    CSS_BLOB_CONTAINER_SELECTOR, CSS_BLOB_SELECTOR, CURSOR_SELECTOR, TYPING_SELECTOR,
};
use crate::dom;
use crate::frame;
use blob_core::ui::follow::{HOVER_FILTER, REST_FILTER};
use blob_core::ui::typing::CURSOR_BLINK_ANIMATION;
use blob_core::ui::{EasedFollower, Typewriter, TypingStep};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Retype the hero name one character at a time, then start the cursor blink.
pub fn wire_typing(document: &web::Document) {
    let Some(target) = dom::query(document, TYPING_SELECTOR) else {
        return;
    };
    target.set_text_content(Some(""));
    let cursor = dom::query(document, CURSOR_SELECTOR);
    let writer = Typewriter::default();
    let delay = writer.next_delay_ms();
    schedule_tick(Rc::new(RefCell::new(writer)), target, cursor, delay);
}

fn schedule_tick(
    writer: Rc<RefCell<Typewriter>>,
    target: web::HtmlElement,
    cursor: Option<web::HtmlElement>,
    delay_ms: u32,
) {
    dom::set_timeout(delay_ms as i32, move || {
        let step = writer.borrow_mut().tick();
        match step {
            Some(TypingStep::Typed(text)) => {
                target.set_text_content(Some(&text));
                let next = writer.borrow().next_delay_ms();
                schedule_tick(writer, target, cursor, next);
            }
            Some(TypingStep::Done) => {
                if let Some(c) = &cursor {
                    dom::set_style(c, "animation", CURSOR_BLINK_ANIMATION);
                }
            }
            None => {}
        }
    });
}

/// The decorative CSS blob drifts towards the cursor and tints on hover.
pub fn wire_css_blob(document: &web::Document) {
    let (Some(blob), Some(container)) = (
        dom::query(document, CSS_BLOB_SELECTOR),
        dom::query(document, CSS_BLOB_CONTAINER_SELECTOR),
    ) else {
        return;
    };
    let follower = Rc::new(RefCell::new(EasedFollower::default()));

    {
        let follower = follower.clone();
        let container = container.clone();
        dom::on(document.as_ref(), "mousemove", move |ev: web::MouseEvent| {
            let rect = container.get_bounding_client_rect();
            follower.borrow_mut().aim(
                Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
            );
        });
    }

    {
        let blob = blob.clone();
        dom::on(container.as_ref(), "mouseenter", move |_ev: web::MouseEvent| {
            dom::set_style(&blob, "filter", HOVER_FILTER);
        });
    }

    {
        let blob = blob.clone();
        let follower = follower.clone();
        dom::on(container.as_ref(), "mouseleave", move |_ev: web::MouseEvent| {
            dom::set_style(&blob, "filter", REST_FILTER);
            follower.borrow_mut().release();
        });
    }

    frame::animate_forever(move || {
        let transform = {
            let mut f = follower.borrow_mut();
            f.step();
            f.transform()
        };
        dom::set_style(&blob, "transform", &transform);
    });
}
