use crate::dom;
use blob_core::BlobScene;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pointer → NDC on the hero canvas. Touch drags are captured so the page
/// does not scroll underneath.
pub fn wire_pointer(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<BlobScene>>) {
    let target: &web::EventTarget = canvas.as_ref();

    {
        let canvas = canvas.clone();
        let scene = scene.clone();
        dom::on(target, "mousemove", move |ev: web::MouseEvent| {
            update_from_client(&canvas, &scene, ev.client_x() as f64, ev.client_y() as f64);
        });
    }

    {
        let canvas = canvas.clone();
        let scene = scene.clone();
        dom::on(target, "touchmove", move |ev: web::TouchEvent| {
            ev.prevent_default();
            if let Some(t) = ev.touches().get(0) {
                update_from_client(&canvas, &scene, t.client_x() as f64, t.client_y() as f64);
            }
        });
    }

    dom::on(target, "mouseleave", move |_ev: web::MouseEvent| {
        scene.borrow_mut().pointer.reset();
    });
}

fn update_from_client(
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<BlobScene>>,
    client_x: f64,
    client_y: f64,
) {
    let rect = canvas.get_bounding_client_rect();
    scene.borrow_mut().pointer.set_from_client(
        Vec2::new(client_x as f32, client_y as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    );
}

/// Keep the canvas backing store in step with its CSS box.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    dom::on(window.as_ref(), "resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
    });
}
