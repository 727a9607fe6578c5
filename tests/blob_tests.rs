// Host-side tests for the blob simulation: noise, deformation and the frame loop.

use blob_core::*;
use glam::{Vec2, Vec3};
use std::time::Duration;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn noise_is_deterministic_per_seed() {
    let a = PerlinNoise::new(7);
    let b = PerlinNoise::new(7);
    for &(x, y, z) in &[(0.3, 0.7, 0.1), (-1.25, 4.5, 2.0), (10.1, -3.3, 0.0)] {
        assert_eq!(a.noise3d(x, y, z), b.noise3d(x, y, z));
        assert_eq!(a.fbm(x, y, z, 4, 0.5), b.fbm(x, y, z, 4, 0.5));
    }
}

#[test]
fn noise_stays_in_range() {
    let n = PerlinNoise::new(3);
    for i in 0..500 {
        let f = i as f32 * 0.173;
        let v = n.noise3d(f, f * 0.5 - 3.0, 7.0 - f);
        assert!(v.is_finite() && (-1.0..=1.0).contains(&v), "noise {} out of range", v);
    }
    for octaves in 1..=8 {
        for &persistence in &[0.25, 0.5, 0.75, 0.9] {
            for i in 0..100 {
                let f = i as f32 * 0.173;
                let fb = n.fbm(f, -f, f * 0.25, octaves, persistence);
                assert!(
                    fb.is_finite() && (-1.0..=1.0).contains(&fb),
                    "fbm({}, {}) = {} out of range",
                    octaves,
                    persistence,
                    fb
                );
            }
        }
    }
}

#[test]
fn octave_count_changes_fbm() {
    let n = PerlinNoise::new(0);
    let one = n.fbm(0.3, 0.7, 0.1, 1, 0.5);
    let four = n.fbm(0.3, 0.7, 0.1, 4, 0.5);
    assert!(approx(one, n.noise3d(0.3, 0.7, 0.1)));
    assert_ne!(one, four);
}

#[test]
fn resting_vertex_moves_by_fbm_and_detail() {
    let noise = PerlinNoise::new(0);
    let controls = BlobControls::default();
    let rest = vec![Vec3::new(2.0, 0.0, 0.0)];
    let normals = vec![Vec3::X];
    let mut shown = vec![Vec3::ZERO];
    deform(
        &noise,
        RestPose {
            positions: &rest,
            normals: &normals,
        },
        &mut shown,
        DeformInputs {
            time_sec: 0.0,
            pointer: Vec2::ZERO,
            controls: &controls,
            mode: DisplacementMode::Radial,
        },
    );
    let d = 0.3 * (noise.fbm(1.0, 0.0, 0.0, 4, 0.5) + 0.3 * noise.noise3d(2.4, 0.0, 0.0));
    let expected = rest[0] * (1.0 + d);
    assert!(shown[0].distance(expected) < 1e-5, "{:?} vs {:?}", shown[0], expected);
    assert_eq!(rest[0], Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn pointer_bump_peaks_under_the_pointer() {
    let noise = PerlinNoise::new(0);
    let with = BlobControls {
        deformation_intensity: 1.0,
        mouse_influence: 1.0,
        ..Default::default()
    };
    let without = BlobControls {
        mouse_influence: 0.0,
        ..with
    };
    // pointer at NDC (1, 0) lands on world (2, 0, 0)
    let p = Vec3::new(2.0, 0.0, 0.0);
    let pointer = Vec2::new(1.0, 0.0);
    let bump = displacement(&noise, p, 0.0, pointer, &with)
        - displacement(&noise, p, 0.0, pointer, &without);
    assert!(approx(bump, 0.5));

    let far = Vec3::new(-2.0, 0.0, 0.0);
    let far_bump = displacement(&noise, far, 0.0, pointer, &with)
        - displacement(&noise, far, 0.0, pointer, &without);
    assert!(far_bump > 0.0 && far_bump < 1e-3);
}

#[derive(Default)]
struct CountingScheduler(u32);

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.0 += 1;
    }
}

#[derive(Default)]
struct RecordingSink {
    uploads: u32,
    draws: u32,
}

impl FrameSink for RecordingSink {
    type Error = std::convert::Infallible;

    fn draw(&mut self, scene: &mut BlobScene) -> Result<(), Self::Error> {
        if scene.mesh.take_dirty() {
            self.uploads += 1;
        }
        self.draws += 1;
        Ok(())
    }
}

fn small_scene() -> BlobScene {
    BlobScene::new(SceneConfig {
        detail: 2,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn normals_stay_unit_length_while_morphing() {
    let mut scene = small_scene();
    let rest = scene.mesh.rest().to_vec();
    scene.pointer.ndc = Vec2::new(0.4, -0.3);
    for frame in 0..5 {
        scene.advance(frame as f32 * 0.25);
        for n in &scene.mesh.normals {
            assert!((n.length() - 1.0).abs() < 1e-4, "normal {:?} is not unit length", n);
        }
    }
    assert_eq!(scene.mesh.rest(), rest.as_slice());
}

#[test]
fn pointer_follows_the_canvas_rect() {
    // canvas at (100, 50), 400x200
    let origin = Vec2::new(100.0, 50.0);
    let size = Vec2::new(400.0, 200.0);
    let mut pointer = PointerState::default();
    pointer.set_from_client(Vec2::new(100.0, 50.0), origin, size);
    assert_eq!(pointer.ndc, Vec2::new(-1.0, 1.0));
    pointer.set_from_client(Vec2::new(500.0, 250.0), origin, size);
    assert_eq!(pointer.ndc, Vec2::new(1.0, -1.0));
    pointer.set_from_client(Vec2::new(300.0, 150.0), origin, size);
    assert_eq!(pointer.ndc, Vec2::ZERO);

    // a hidden canvas keeps the last position
    pointer.set_from_client(Vec2::new(10.0, 10.0), Vec2::ZERO, Vec2::new(0.0, 300.0));
    assert_eq!(pointer.ndc, Vec2::ZERO);
}

#[test]
fn loop_requests_next_frame_before_drawing() {
    let clock = ManualClock::default();
    let mut rl = RenderLoop::new(&clock);
    let mut sched = CountingScheduler::default();
    let mut sink = RecordingSink::default();
    let mut scene = small_scene();
    assert_eq!(rl.state(), LoopState::Idle);

    for _ in 0..3 {
        clock.advance(Duration::from_millis(16));
        let stats = rl.frame(&mut sched, &mut scene, &mut sink);
        assert!(stats.drawn);
    }
    assert_eq!(rl.state(), LoopState::Running);
    assert_eq!(sched.0, 3);
    assert_eq!(sink.draws, 3);
    assert_eq!(sink.uploads, 3);
    assert_eq!(rl.frames(), 3);
    assert!(approx(scene.elapsed_sec(), 0.048));
}

#[test]
fn frames_spin_the_blob() {
    let clock = ManualClock::default();
    let mut rl = RenderLoop::new(&clock);
    let mut sched = CountingScheduler::default();
    let mut sink = RecordingSink::default();
    let mut scene = small_scene();
    for _ in 0..10 {
        rl.frame(&mut sched, &mut scene, &mut sink);
    }
    assert!(approx(scene.spin.rotation.y, 10.0 * 0.005));
    assert_eq!(scene.spin.rotation.x, 0.0);
}

#[test]
fn frozen_time_gives_identical_frames() {
    let clock = ManualClock::default();
    clock.set(Duration::from_millis(1_500));
    let mut rl = RenderLoop::new(&clock);
    let mut sched = CountingScheduler::default();
    let mut sink = RecordingSink::default();
    let mut scene = small_scene();
    rl.frame(&mut sched, &mut scene, &mut sink);
    let first = scene.mesh.positions.clone();
    rl.frame(&mut sched, &mut scene, &mut sink);
    assert_eq!(first, scene.mesh.positions);
}

#[test]
fn debug_controls_round_trip_by_name() {
    let mut scene = small_scene();
    let key = ControlKey::from_name("deformationIntensity").unwrap();
    scene.set_control(key, 0.75);
    assert_eq!(scene.controls.get(key), 0.75);
    assert!(ControlKey::from_name("wobble").is_none());
    // slider range clamps
    scene.set_control(ControlKey::Opacity, 4.0);
    assert_eq!(scene.material.opacity, 1.0);
}

#[test]
fn uniforms_follow_the_scene() {
    let mut scene = small_scene();
    scene.set_control(ControlKey::Transmission, 0.5);
    let u = BlobUniforms::from_scene(&scene);
    assert_eq!(u.material_a[0], 0.5);
    assert_eq!(u.view_proj, scene.camera.view_proj().to_cols_array_2d());
}
