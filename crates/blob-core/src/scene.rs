use crate::constants::*;
use crate::controls::{BlobControls, ControlKey};
use crate::deform::{deform, DeformInputs, DisplacementMode};
use crate::error::MeshError;
use crate::mesh::BlobMesh;
use crate::noise::PerlinNoise;
use crate::pointer::PointerState;
use glam::{EulerRot, Mat4, Vec3};

/// Startup parameters. Everything else in the scene is fixed look-dev.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub seed: u32,
    pub detail: u32,
    pub radius: f32,
    pub displacement: DisplacementMode,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            detail: BLOB_DETAIL,
            radius: BLOB_RADIUS,
            displacement: DisplacementMode::Radial,
        }
    }
}

impl SceneConfig {
    /// Apply string overrides (from data attributes or env vars). Bad values
    /// are logged and skipped.
    pub fn with_overrides(
        mut self,
        seed: Option<&str>,
        detail: Option<&str>,
        displacement: Option<&str>,
    ) -> Self {
        if let Some(raw) = seed {
            match raw.trim().parse() {
                Ok(v) => self.seed = v,
                Err(_) => log::warn!("[config] bad seed {:?}, keeping {}", raw, self.seed),
            }
        }
        if let Some(raw) = detail {
            match raw.trim().parse() {
                Ok(v) => self.detail = v,
                Err(_) => log::warn!("[config] bad detail {:?}, keeping {}", raw, self.detail),
            }
        }
        if let Some(raw) = displacement {
            match DisplacementMode::parse(raw) {
                Some(m) => self.displacement = m,
                None => log::warn!(
                    "[config] bad displacement {:?}, keeping {:?}",
                    raw,
                    self.displacement
                ),
            }
        }
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
    pub target: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y_deg: CAMERA_FOV_DEG,
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
        }
    }
}

impl Camera {
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        let proj =
            Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far);
        let view = Mat4::look_at_rh(self.eye, self.target, Vec3::Y);
        proj * view
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Ambient,
    /// Light travelling from `position` towards the origin.
    Directional { position: Vec3 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Vec3,
    pub intensity: f32,
}

pub fn rgb_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Ambient fill plus key, fill and rim directionals.
pub fn studio_lights() -> [Light; 4] {
    [
        Light {
            kind: LightKind::Ambient,
            color: Vec3::ONE,
            intensity: 0.4,
        },
        Light {
            kind: LightKind::Directional {
                position: Vec3::new(10.0, 10.0, 5.0),
            },
            color: Vec3::ONE,
            intensity: 0.8,
        },
        Light {
            kind: LightKind::Directional {
                position: Vec3::new(-10.0, 0.0, -5.0),
            },
            color: rgb_hex(0x87CEEB),
            intensity: 0.3,
        },
        Light {
            kind: LightKind::Directional {
                position: Vec3::new(0.0, 0.0, -10.0),
            },
            color: Vec3::ONE,
            intensity: 0.6,
        },
    ]
}

/// Vertical studio gradient used as the reflection environment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvironmentGradient {
    /// `(offset, colour)` from top (0) to bottom (1).
    pub stops: [(f32, Vec3); 4],
}

impl Default for EnvironmentGradient {
    fn default() -> Self {
        Self {
            stops: [
                (0.0, rgb_hex(0x87CEEB)),
                (0.3, rgb_hex(0xE0F6FF)),
                (0.7, rgb_hex(0xFFFFFF)),
                (1.0, rgb_hex(0xF0F8FF)),
            ],
        }
    }
}

/// Transmissive glass look-dev. Four fields are driven by the control panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlassMaterial {
    pub color: Vec3,
    pub metalness: f32,
    pub roughness: f32,
    pub transmission: f32,
    pub thickness: f32,
    pub ior: f32,
    pub reflectivity: f32,
    pub env_map_intensity: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub opacity: f32,
    pub attenuation_color: Vec3,
    pub attenuation_distance: f32,
    pub needs_update: bool,
}

impl Default for GlassMaterial {
    fn default() -> Self {
        let c = BlobControls::default();
        Self {
            color: Vec3::ONE,
            metalness: 0.0,
            roughness: c.roughness,
            transmission: c.transmission,
            thickness: 0.5,
            ior: 1.4,
            reflectivity: 0.8,
            env_map_intensity: c.env_map_intensity,
            clearcoat: 1.0,
            clearcoat_roughness: 0.1,
            opacity: c.opacity,
            attenuation_color: Vec3::new(0.8, 0.9, 1.0),
            attenuation_distance: 0.5,
            needs_update: true,
        }
    }
}

impl GlassMaterial {
    pub fn apply_controls(&mut self, controls: &BlobControls) {
        self.transmission = controls.transmission;
        self.roughness = controls.roughness;
        self.env_map_intensity = controls.env_map_intensity;
        self.opacity = controls.opacity;
        self.needs_update = true;
    }
}

/// Euler rotation (XYZ order) accumulated a little every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spin {
    pub rotation: Vec3,
}

impl Spin {
    pub fn step(&mut self, pointer: glam::Vec2, animation_speed: f32) {
        self.rotation.y += SPIN_Y_PER_FRAME * animation_speed;
        self.rotation.x += pointer.y * POINTER_TILT_PER_FRAME;
        self.rotation.z += pointer.x * POINTER_TILT_PER_FRAME;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

/// Everything the render loop, the deformer and the UI share.
#[derive(Clone, Debug)]
pub struct BlobScene {
    pub camera: Camera,
    pub lights: [Light; 4],
    pub environment: EnvironmentGradient,
    pub material: GlassMaterial,
    pub mesh: BlobMesh,
    pub spin: Spin,
    pub pointer: PointerState,
    pub controls: BlobControls,
    pub displacement: DisplacementMode,
    noise: PerlinNoise,
    elapsed_sec: f32,
}

impl BlobScene {
    pub fn new(config: SceneConfig) -> Result<Self, MeshError> {
        let mesh = BlobMesh::icosphere(config.radius, config.detail)?;
        log::info!(
            "[blob] scene ready: seed={} detail={} verts={} tris={} mode={:?}",
            config.seed,
            config.detail,
            mesh.vertex_count(),
            mesh.triangle_count(),
            config.displacement
        );
        Ok(Self::with_mesh(mesh, PerlinNoise::new(config.seed), config.displacement))
    }

    pub fn with_mesh(mesh: BlobMesh, noise: PerlinNoise, displacement: DisplacementMode) -> Self {
        let controls = BlobControls::default();
        let mut material = GlassMaterial::default();
        material.apply_controls(&controls);
        Self {
            camera: Camera::default(),
            lights: studio_lights(),
            environment: EnvironmentGradient::default(),
            material,
            mesh,
            spin: Spin::default(),
            pointer: PointerState::default(),
            controls,
            displacement,
            noise,
            elapsed_sec: 0.0,
        }
    }

    #[inline]
    pub fn noise(&self) -> &PerlinNoise {
        &self.noise
    }

    #[inline]
    pub fn elapsed_sec(&self) -> f32 {
        self.elapsed_sec
    }

    /// Deform the mesh for time `t` and recompute normals.
    pub fn morph(&mut self, time_sec: f32) {
        self.elapsed_sec = time_sec;
        let inputs = DeformInputs {
            time_sec,
            pointer: self.pointer.ndc,
            controls: &self.controls,
            mode: self.displacement,
        };
        let (rest, shown) = self.mesh.split_for_deform();
        deform(&self.noise, rest, shown, inputs);
        self.mesh.mark_dirty();
        self.mesh.recompute_normals();
    }

    /// One frame of simulation: morph, then spin.
    pub fn advance(&mut self, time_sec: f32) {
        self.morph(time_sec);
        self.spin.step(self.pointer.ndc, self.controls.animation_speed);
    }

    /// Slider/debug entry point. Re-applies the material when needed.
    pub fn set_control(&mut self, key: ControlKey, value: f32) {
        self.controls.set(key, value);
        if key.affects_material() {
            self.update_material();
        }
    }

    pub fn update_material(&mut self) {
        self.material.apply_controls(&self.controls);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_scene() -> BlobScene {
        BlobScene::new(SceneConfig {
            detail: 2,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn gradient_runs_sky_to_white() {
        let env = EnvironmentGradient::default();
        let offsets: Vec<f32> = env.stops.iter().map(|s| s.0).collect();
        assert_eq!(offsets, [0.0, 0.3, 0.7, 1.0]);
        assert_eq!(env.stops[0].1, rgb_hex(0x87CEEB));
        assert!(env.stops[2].1.distance(Vec3::ONE) < 1e-6);
    }

    #[test]
    fn spin_follows_speed_and_pointer() {
        let mut s = Spin::default();
        s.step(glam::Vec2::new(1.0, -1.0), 0.5);
        assert!((s.rotation.y - 0.0025).abs() < 1e-7);
        assert!((s.rotation.x + 0.001).abs() < 1e-7);
        assert!((s.rotation.z - 0.001).abs() < 1e-7);
    }

    #[test]
    fn set_control_updates_material() {
        let mut scene = small_scene();
        scene.material.needs_update = false;
        scene.set_control(ControlKey::Opacity, 0.4);
        assert_eq!(scene.material.opacity, 0.4);
        assert!(scene.material.needs_update);

        scene.material.needs_update = false;
        scene.set_control(ControlKey::AnimationSpeed, 0.2);
        assert!(!scene.material.needs_update);
    }

    #[test]
    fn morph_keeps_rest_pose() {
        let mut scene = small_scene();
        let rest = scene.mesh.rest().to_vec();
        scene.pointer.ndc = glam::Vec2::new(0.3, 0.6);
        for frame in 0..10 {
            scene.advance(frame as f32 / 60.0);
        }
        assert_eq!(scene.mesh.rest(), &rest[..]);
        assert_ne!(scene.mesh.positions, rest);
        assert!(scene.mesh.is_dirty());
    }

    #[test]
    fn overrides_parse_and_fall_back() {
        let cfg = SceneConfig::default().with_overrides(Some("42"), Some("oops"), Some("normal"));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.detail, BLOB_DETAIL);
        assert_eq!(cfg.displacement, DisplacementMode::Normal);
    }

    #[test]
    fn aspect_ignores_zero_sized_viewport() {
        let mut cam = Camera::default();
        cam.set_viewport(1600, 800);
        assert_eq!(cam.aspect, 2.0);
        cam.set_viewport(0, 800);
        assert_eq!(cam.aspect, 2.0);
    }
}
