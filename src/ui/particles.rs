use crate::constants::PARTICLES_SELECTOR;
use crate::dom;
use blob_core::ui::particles::PARTICLE_COUNT;
use blob_core::ui::spawn_particles;
use web_sys as web;

pub fn spawn_background_particles(document: &web::Document) {
    let Some(container) = dom::query(document, PARTICLES_SELECTOR) else {
        return;
    };
    let mut rng = rand::thread_rng();
    for spec in spawn_particles(&mut rng, PARTICLE_COUNT) {
        let Ok(el) = document.create_element("div") else {
            continue;
        };
        el.set_class_name("particle");
        _ = el.set_attribute("style", &spec.css());
        _ = container.append_child(&el);
    }
    log::debug!("[ui] spawned {} particles", PARTICLE_COUNT);
}
