#![cfg(target_arch = "wasm32")]
use blob_core::{BlobScene, InstantClock, RenderLoop, SceneConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod debug;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page interactions do not depend on the GPU, wire them first
    ui::inject_styles(&document);
    let notifier = ui::Notifier::new(document.clone());
    ui::wire_page_load(&document, notifier.clone());
    ui::wire_typing(&document);
    ui::wire_css_blob(&document);
    ui::wire_nav_links(&document);
    ui::wire_scroll_spy(&document);
    ui::wire_scroll_progress(&document);
    ui::wire_project_filters(&document);
    ui::wire_skill_bars(&document);
    ui::wire_scroll_reveal(&document);
    ui::wire_card_hover(&document);
    ui::wire_contact_form(&document, notifier);
    ui::spawn_background_particles(&document);
    events::keyboard::wire_section_shortcuts(&document);

    let Some(canvas) = document
        .get_element_by_id(constants::HERO_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::info!("[blob] no #{} canvas, skipping blob", constants::HERO_CANVAS_ID);
        return Ok(());
    };

    let config = SceneConfig::default().with_overrides(
        canvas.get_attribute(constants::ATTR_NOISE_SEED).as_deref(),
        canvas.get_attribute(constants::ATTR_DETAIL).as_deref(),
        canvas.get_attribute(constants::ATTR_DISPLACEMENT).as_deref(),
    );
    let scene = Rc::new(RefCell::new(BlobScene::new(config)?));
    let frames = Rc::new(Cell::new(0_u64));

    ui::build_controls_panel(&document, scene.clone())?;
    events::pointer::wire_pointer(&canvas, scene.clone());
    events::pointer::wire_canvas_resize(&canvas);
    debug::expose(scene.clone(), frames.clone());

    // Handlers may borrow the scene while the adapter request is pending
    let snapshot = scene.borrow().clone();
    let gpu = frame::init_gpu(&canvas, &snapshot).await;
    let Some(gpu) = gpu else {
        log::error!("[blob] WebGPU unavailable, the page runs without the blob");
        return Ok(());
    };
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        render_loop: RenderLoop::new(InstantClock::default()),
        frames,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
