// Shared visual tuning constants used by both web and native frontends.

// Geometry
pub const BLOB_RADIUS: f32 = 2.0;
pub const BLOB_DETAIL: u32 = 64;

// Deformation: primary fBm layer
pub const FBM_SPATIAL_SCALE: f32 = 0.5;
pub const FBM_TIME_RATES: [f32; 3] = [0.3, 0.2, 0.1]; // per-axis drift, scaled by animation speed
pub const FBM_OCTAVES: u32 = 4;
pub const FBM_PERSISTENCE: f32 = 0.5;

// Deformation: detail layer
pub const DETAIL_SPATIAL_SCALE: f32 = 1.2;
pub const DETAIL_TIME_RATE: f32 = 0.4;
pub const DETAIL_POINTER_SHIFT: f32 = 0.5; // how far the pointer slides the detail field
pub const DETAIL_WEIGHT: f32 = 0.3;

// Deformation: pointer bulge
pub const POINTER_WORLD_SCALE: f32 = 2.0; // NDC -> world units on the z=0 plane
pub const POINTER_FALLOFF: f32 = 2.0;
pub const POINTER_EFFECT_WEIGHT: f32 = 0.5;

// Rotation per frame
pub const SPIN_Y_PER_FRAME: f32 = 0.005; // scaled by animation speed
pub const POINTER_TILT_PER_FRAME: f32 = 0.001;

// Camera
pub const CAMERA_FOV_DEG: f32 = 55.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Tone mapping
pub const TONE_MAPPING_EXPOSURE: f32 = 1.0;
