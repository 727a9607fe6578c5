//! Frame driver: request next frame, advance the scene, draw.
//!
//! The host supplies the clock, the way the next frame is requested and the
//! draw call, so the same loop runs under `requestAnimationFrame`, a winit
//! event loop, or a test harness stepping time by hand.

use crate::scene::BlobScene;
use instant::Instant;
use std::cell::Cell;
use std::time::Duration;

/// Monotonic time since the loop was created.
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

#[derive(Clone, Copy, Debug)]
pub struct InstantClock {
    start: Instant,
}

impl Default for InstantClock {
    fn default() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for InstantClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock advanced explicitly; shares well between a loop and its test.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get() + dt);
    }

    pub fn set(&self, t: Duration) {
        self.now.set(t);
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }
}

/// Asks the host for another frame callback.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Issues the draw for the current scene state.
pub trait FrameSink {
    type Error: std::fmt::Debug;
    fn draw(&mut self, scene: &mut BlobScene) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    pub index: u64,
    pub elapsed_sec: f32,
    pub drawn: bool,
}

#[derive(Debug)]
pub struct RenderLoop<C: Clock> {
    clock: C,
    state: LoopState,
    frames: u64,
}

impl<C: Clock> RenderLoop<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run one frame. A failed draw is logged and the loop keeps going.
    pub fn frame<S, K>(
        &mut self,
        scheduler: &mut S,
        scene: &mut BlobScene,
        sink: &mut K,
    ) -> FrameStats
    where
        S: FrameScheduler + ?Sized,
        K: FrameSink + ?Sized,
    {
        if self.state == LoopState::Idle {
            log::info!("[loop] first frame");
            self.state = LoopState::Running;
        }
        scheduler.request_frame();

        let elapsed_sec = self.clock.elapsed().as_secs_f32();
        scene.advance(elapsed_sec);

        let drawn = match sink.draw(scene) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[loop] draw failed on frame {}: {:?}", self.frames, e);
                false
            }
        };
        let stats = FrameStats {
            index: self.frames,
            elapsed_sec,
            drawn,
        };
        self.frames += 1;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneConfig;

    #[derive(Default)]
    struct CountingScheduler(u32);

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&mut self) {
            self.0 += 1;
        }
    }

    struct FailingSink;

    impl FrameSink for FailingSink {
        type Error = &'static str;
        fn draw(&mut self, _scene: &mut BlobScene) -> Result<(), Self::Error> {
            Err("surface lost")
        }
    }

    #[test]
    fn failed_draw_keeps_running() {
        let clock = ManualClock::default();
        let mut rl = RenderLoop::new(&clock);
        let mut sched = CountingScheduler::default();
        let mut scene = BlobScene::new(SceneConfig {
            detail: 1,
            ..Default::default()
        })
        .unwrap();
        let a = rl.frame(&mut sched, &mut scene, &mut FailingSink);
        clock.advance(Duration::from_millis(16));
        let b = rl.frame(&mut sched, &mut scene, &mut FailingSink);
        assert!(!a.drawn && !b.drawn);
        assert_eq!(rl.state(), LoopState::Running);
        assert_eq!(sched.0, 2);
        assert_eq!(b.index, 1);
    }
}
