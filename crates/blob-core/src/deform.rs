//! Per-frame noise deformation of the blob's rest pose.

use crate::constants::*;
use crate::controls::BlobControls;
use crate::noise::PerlinNoise;
use glam::{Vec2, Vec3};

/// How the scalar displacement is turned into a new position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplacementMode {
    /// `rest * (1 + d)`: uniform scale about the origin.
    #[default]
    Radial,
    /// `rest + n * |rest| * d` along the rest-pose surface normal `n`.
    /// Close to `Radial` on a sphere centred at the origin; differs for
    /// off-centre or non-spherical rest poses.
    Normal,
}

impl DisplacementMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "radial" => Some(Self::Radial),
            "normal" => Some(Self::Normal),
            _ => None,
        }
    }
}

/// Everything the deformer reads besides the mesh.
#[derive(Clone, Copy, Debug)]
pub struct DeformInputs<'a> {
    pub time_sec: f32,
    pub pointer: Vec2,
    pub controls: &'a BlobControls,
    pub mode: DisplacementMode,
}

/// Scalar displacement for one rest-pose vertex.
pub fn displacement(
    noise: &PerlinNoise,
    rest: Vec3,
    time_sec: f32,
    pointer: Vec2,
    controls: &BlobControls,
) -> f32 {
    let t = time_sec;
    let speed = controls.animation_speed;
    let Vec3 { x, y, z } = rest;

    let noise1 = noise.fbm(
        x * FBM_SPATIAL_SCALE + t * FBM_TIME_RATES[0] * speed,
        y * FBM_SPATIAL_SCALE + t * FBM_TIME_RATES[1] * speed,
        z * FBM_SPATIAL_SCALE + t * FBM_TIME_RATES[2] * speed,
        FBM_OCTAVES,
        FBM_PERSISTENCE,
    );

    let noise2 = noise.noise3d(
        x * DETAIL_SPATIAL_SCALE + t * DETAIL_TIME_RATE * speed,
        y * DETAIL_SPATIAL_SCALE + pointer.x * DETAIL_POINTER_SHIFT,
        z * DETAIL_SPATIAL_SCALE + pointer.y * DETAIL_POINTER_SHIFT,
    ) * DETAIL_WEIGHT;

    let pointer_world = Vec3::new(
        pointer.x * POINTER_WORLD_SCALE,
        pointer.y * POINTER_WORLD_SCALE,
        0.0,
    );
    let distance = rest.distance(pointer_world);
    let pointer_strength = pointer.length() * controls.mouse_influence;
    let pointer_effect =
        (-distance * POINTER_FALLOFF).exp() * pointer_strength * POINTER_EFFECT_WEIGHT;

    (noise1 + noise2 + pointer_effect) * controls.deformation_intensity
}

/// Read-only view of the undeformed mesh.
#[derive(Clone, Copy, Debug)]
pub struct RestPose<'a> {
    pub positions: &'a [Vec3],
    pub normals: &'a [Vec3],
}

/// Rewrite `displayed` from the rest pose for the given frame inputs.
///
/// The rest pose is only read. Extra entries in `displayed` are left alone.
pub fn deform(
    noise: &PerlinNoise,
    rest: RestPose<'_>,
    displayed: &mut [Vec3],
    inputs: DeformInputs<'_>,
) {
    debug_assert_eq!(rest.positions.len(), displayed.len());
    for (i, (out, &p)) in displayed.iter_mut().zip(rest.positions.iter()).enumerate() {
        let d = displacement(noise, p, inputs.time_sec, inputs.pointer, inputs.controls);
        *out = match inputs.mode {
            DisplacementMode::Radial => p * (1.0 + d),
            DisplacementMode::Normal => {
                let n = rest.normals.get(i).copied().unwrap_or(Vec3::ZERO);
                p + n * p.length() * d
            }
        };
    }
}
