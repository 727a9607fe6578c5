//! Plain-old-data layouts shared by the web and native renderers.

use crate::constants::TONE_MAPPING_EXPOSURE;
use crate::mesh::BlobMesh;
use crate::scene::{BlobScene, LightKind};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl GpuVertex {
    pub const ATTRIBUTE_OFFSETS: [u64; 2] = [0, 12];
}

/// Interleave displayed positions and normals into `out`, reusing its allocation.
pub fn pack_vertices(mesh: &BlobMesh, out: &mut Vec<GpuVertex>) {
    out.clear();
    out.extend(
        mesh.positions
            .iter()
            .zip(mesh.normals.iter())
            .map(|(p, n)| GpuVertex {
                position: p.to_array(),
                normal: n.to_array(),
            }),
    );
}

pub const MAX_DIRECTIONAL_LIGHTS: usize = 3;

/// Uniform block for `blob.wgsl`. Every member is 16-byte aligned.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlobUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    /// xyz eye, w exposure
    pub camera_pos: [f32; 4],
    /// rgb pre-multiplied by intensity
    pub ambient: [f32; 4],
    /// xyz unit vector towards the light, w intensity
    pub light_dirs: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS],
    pub light_colors: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS],
    /// rgb colour, w offset
    pub env_stops: [[f32; 4]; 4],
    /// transmission, roughness, env intensity, opacity
    pub material_a: [f32; 4],
    /// ior, reflectivity, clearcoat, clearcoat roughness
    pub material_b: [f32; 4],
    /// rgb attenuation colour, w attenuation distance
    pub attenuation: [f32; 4],
    /// rgb base colour, w thickness
    pub base_color: [f32; 4],
}

impl BlobUniforms {
    pub fn from_scene(scene: &BlobScene) -> Self {
        let model = scene.spin.model_matrix();
        let normal_matrix = model.inverse().transpose();
        let eye = scene.camera.eye;

        let mut ambient = [0.0; 4];
        let mut light_dirs = [[0.0; 4]; MAX_DIRECTIONAL_LIGHTS];
        let mut light_colors = [[0.0; 4]; MAX_DIRECTIONAL_LIGHTS];
        let mut slot = 0;
        for light in &scene.lights {
            match light.kind {
                LightKind::Ambient => {
                    let c = light.color * light.intensity;
                    ambient = [c.x, c.y, c.z, 1.0];
                }
                LightKind::Directional { position } if slot < MAX_DIRECTIONAL_LIGHTS => {
                    let d = position.normalize_or_zero();
                    light_dirs[slot] = [d.x, d.y, d.z, light.intensity];
                    light_colors[slot] = [light.color.x, light.color.y, light.color.z, 1.0];
                    slot += 1;
                }
                LightKind::Directional { .. } => {
                    log::warn!(
                        "[gpu] more than {} directional lights; extra ignored",
                        MAX_DIRECTIONAL_LIGHTS
                    );
                }
            }
        }

        let mut env_stops = [[0.0; 4]; 4];
        for (dst, (offset, c)) in env_stops.iter_mut().zip(scene.environment.stops.iter()) {
            *dst = [c.x, c.y, c.z, *offset];
        }

        let m = &scene.material;
        Self {
            view_proj: scene.camera.view_proj().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal_matrix: normal_matrix.to_cols_array_2d(),
            camera_pos: [eye.x, eye.y, eye.z, TONE_MAPPING_EXPOSURE],
            ambient,
            light_dirs,
            light_colors,
            env_stops,
            material_a: [m.transmission, m.roughness, m.env_map_intensity, m.opacity],
            material_b: [m.ior, m.reflectivity, m.clearcoat, m.clearcoat_roughness],
            attenuation: [
                m.attenuation_color.x,
                m.attenuation_color.y,
                m.attenuation_color.z,
                m.attenuation_distance,
            ],
            base_color: [m.color.x, m.color.y, m.color.z, m.thickness],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneConfig;

    #[test]
    fn uniform_block_is_vec4_aligned() {
        assert_eq!(std::mem::size_of::<BlobUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<GpuVertex>(), 24);
    }

    #[test]
    fn uniforms_pick_up_lights_and_material() {
        let scene = BlobScene::new(SceneConfig {
            detail: 0,
            ..Default::default()
        })
        .unwrap();
        let u = BlobUniforms::from_scene(&scene);
        assert!((u.ambient[0] - 0.4).abs() < 1e-6);
        assert!((u.light_dirs[0][3] - 0.8).abs() < 1e-6);
        assert_eq!(u.material_a[3], scene.material.opacity);
        assert_eq!(u.env_stops[3][3], 1.0);
    }

    #[test]
    fn pack_matches_vertex_count() {
        let scene = BlobScene::new(SceneConfig {
            detail: 1,
            ..Default::default()
        })
        .unwrap();
        let mut out = Vec::new();
        pack_vertices(&scene.mesh, &mut out);
        assert_eq!(out.len(), scene.mesh.vertex_count());
        pack_vertices(&scene.mesh, &mut out);
        assert_eq!(out.len(), scene.mesh.vertex_count());
    }
}
