use crate::render;
use blob_core::{BlobScene, FrameScheduler, InstantClock, RenderLoop};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type RafSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Re-arms a stored closure with `requestAnimationFrame`.
pub struct RafScheduler {
    slot: RafSlot,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.slot.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<BlobScene>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub render_loop: RenderLoop<InstantClock>,
    /// Shared with the debug handle.
    pub frames: Rc<Cell<u64>>,
}

impl<'a> FrameContext<'a> {
    fn frame(&mut self, scheduler: &mut RafScheduler) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.gpu.resize_if_needed(w, h);

        // Handlers only borrow the scene inside their own callbacks, so this never overlaps
        let Ok(mut scene) = self.scene.try_borrow_mut() else {
            log::warn!("[blob] scene busy, skipping frame");
            scheduler.request_frame();
            return;
        };
        scene.camera.set_viewport(w, h);
        let stats = self.render_loop.frame(scheduler, &mut *scene, &mut self.gpu);
        self.frames.set(stats.index + 1);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &BlobScene,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive the blob from `requestAnimationFrame`. The render loop asks for the
/// next frame itself before advancing the scene.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let slot: RafSlot = Rc::new(RefCell::new(None));
    let mut scheduler = RafScheduler { slot: slot.clone() };
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame(&mut scheduler);
    }) as Box<dyn FnMut()>));
    RafScheduler { slot }.request_frame();
}

/// Run `step` once per animation frame for the lifetime of the page.
pub fn animate_forever(mut step: impl FnMut() + 'static) {
    let slot: RafSlot = Rc::new(RefCell::new(None));
    let mut scheduler = RafScheduler { slot: slot.clone() };
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        step();
        scheduler.request_frame();
    }) as Box<dyn FnMut()>));
    RafScheduler { slot }.request_frame();
}
