//! `window.BlobAnimation`: a small handle for poking at the blob from the
//! devtools console.

use blob_core::{BlobScene, ControlKey};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
pub struct BlobAnimation {
    scene: Rc<RefCell<BlobScene>>,
    frames: Rc<Cell<u64>>,
}

#[wasm_bindgen]
impl BlobAnimation {
    /// Current value of a control, or `undefined` for an unknown name.
    pub fn control(&self, name: &str) -> Option<f32> {
        let key = ControlKey::from_name(name)?;
        Some(self.scene.borrow().controls.get(key))
    }

    #[wasm_bindgen(js_name = setControl)]
    pub fn set_control(&self, name: &str, value: f32) -> bool {
        let Some(key) = ControlKey::from_name(name) else {
            log::warn!("[controls] unknown control {:?}", name);
            return false;
        };
        self.scene.borrow_mut().set_control(key, value);
        true
    }

    #[wasm_bindgen(js_name = updateMaterial)]
    pub fn update_material(&self) {
        self.scene.borrow_mut().update_material();
    }

    /// Euler rotation `[x, y, z]` in radians.
    pub fn rotation(&self) -> Vec<f32> {
        self.scene.borrow().spin.rotation.to_array().to_vec()
    }

    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.scene.borrow().mesh.vertex_count()
    }

    /// Frames drawn since the loop started. Stays 0 without WebGPU.
    pub fn frames(&self) -> f64 {
        self.frames.get() as f64
    }

    #[wasm_bindgen(js_name = controlNames)]
    pub fn control_names(&self) -> Vec<String> {
        ControlKey::ALL.iter().map(|k| k.name().to_owned()).collect()
    }
}

pub fn expose(scene: Rc<RefCell<BlobScene>>, frames: Rc<Cell<u64>>) {
    let Some(window) = web::window() else {
        return;
    };
    let handle = BlobAnimation { scene, frames };
    if let Err(e) = js_sys::Reflect::set(&window, &"BlobAnimation".into(), &JsValue::from(handle)) {
        log::warn!("[blob] could not expose BlobAnimation: {:?}", e);
    }
}
