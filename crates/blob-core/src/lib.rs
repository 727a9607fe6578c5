pub mod constants;
pub mod controls;
pub mod deform;
pub mod error;
pub mod gpu;
pub mod mesh;
pub mod noise;
pub mod pointer;
pub mod render_loop;
pub mod scene;
pub mod timers;
pub mod ui;

pub static BLOB_WGSL: &str = include_str!("../shaders/blob.wgsl");

pub use controls::{BlobControls, ControlKey};
pub use deform::{deform, displacement, DeformInputs, DisplacementMode, RestPose};
pub use error::{ContactError, MeshError};
pub use gpu::{pack_vertices, BlobUniforms, GpuVertex};
pub use mesh::BlobMesh;
pub use noise::PerlinNoise;
pub use pointer::{client_to_ndc, PointerState};
pub use render_loop::{
    Clock, FrameScheduler, FrameSink, FrameStats, InstantClock, LoopState, ManualClock, RenderLoop,
};
pub use scene::{BlobScene, Camera, EnvironmentGradient, GlassMaterial, SceneConfig, Spin};
pub use timers::TimerQueue;
