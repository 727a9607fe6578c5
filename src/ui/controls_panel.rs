use crate::constants::{CONTROLS_PANEL_CSS, CONTROLS_PANEL_ID, CONTROLS_PANEL_TITLE, SLIDER_WIDTH};
use crate::dom;
use blob_core::controls::{SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use blob_core::{BlobScene, ControlKey};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fixed panel with one range slider per control knob.
pub fn build_controls_panel(
    document: &web::Document,
    scene: Rc<RefCell<BlobScene>>,
) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let panel = create_html(document, "div")?;
    panel.set_id(CONTROLS_PANEL_ID);
    _ = panel.set_attribute("style", CONTROLS_PANEL_CSS);

    let title = create_html(document, "h4")?;
    title.set_text_content(Some(CONTROLS_PANEL_TITLE));
    dom::set_style(&title, "margin", "0 0 10px 0");
    _ = panel.append_child(&title);

    let controls = scene.borrow().controls;
    for key in ControlKey::ALL {
        let row = create_html(document, "div")?;
        dom::set_style(&row, "margin-bottom", "8px");

        let label = create_html(document, "label")?;
        label.set_text_content(Some(&key.label()));
        dom::set_style(&label, "display", "block");
        dom::set_style(&label, "margin-bottom", "2px");

        let slider = document
            .create_element("input")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlInputElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        slider.set_type("range");
        slider.set_min(&SLIDER_MIN.to_string());
        slider.set_max(&SLIDER_MAX.to_string());
        slider.set_step(&SLIDER_STEP.to_string());
        slider.set_value(&controls.get(key).to_string());
        dom::set_style(&slider, "width", SLIDER_WIDTH);

        let scene = scene.clone();
        let input_el = slider.clone();
        dom::on(slider.as_ref(), "input", move |_ev: web::Event| {
            let raw = input_el.value();
            let mut s = scene.borrow_mut();
            if s.controls.set_from_str(key, &raw) {
                // Every slider re-applies the material, as the page always has
                s.update_material();
            } else {
                log::warn!("[ui] slider {} gave {:?}", key.name(), raw);
            }
        });

        _ = row.append_child(&label);
        _ = row.append_child(&slider);
        _ = panel.append_child(&row);
    }

    body.append_child(&panel)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!("[ui] control panel ready");
    Ok(())
}

fn create_html(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
