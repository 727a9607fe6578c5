use glam::Vec2;

pub const FOLLOW_TARGET_SCALE: f32 = 0.1;
pub const FOLLOW_EASING: f32 = 0.1;
pub const FOLLOW_SCALE_GAIN: f32 = 0.001;
pub const HOVER_FILTER: &str = "blur(1px) hue-rotate(90deg)";
pub const REST_FILTER: &str = "blur(1px)";

/// The decorative CSS blob that drifts towards the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EasedFollower {
    pub target: Vec2,
    pub current: Vec2,
}

impl EasedFollower {
    /// Cursor in client space against the container's rect.
    pub fn aim(&mut self, client: Vec2, rect_origin: Vec2, rect_size: Vec2) {
        self.target = (client - rect_origin - rect_size * 0.5) * FOLLOW_TARGET_SCALE;
    }

    pub fn release(&mut self) {
        self.target = Vec2::ZERO;
    }

    /// One animation frame of easing.
    pub fn step(&mut self) -> Vec2 {
        self.current += (self.target - self.current) * FOLLOW_EASING;
        self.current
    }

    pub fn scale(&self) -> f32 {
        1.0 + (self.current.x + self.current.y).abs() * FOLLOW_SCALE_GAIN
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.current.x,
            self.current.y,
            self.scale()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_on_target() {
        let mut f = EasedFollower::default();
        f.aim(Vec2::new(300.0, 100.0), Vec2::ZERO, Vec2::new(200.0, 200.0));
        assert_eq!(f.target, Vec2::new(20.0, 0.0));
        let first = f.step();
        assert!((first.x - 2.0).abs() < 1e-6);
        for _ in 0..200 {
            f.step();
        }
        assert!(f.current.distance(f.target) < 1e-3);
        f.release();
        for _ in 0..200 {
            f.step();
        }
        assert!(f.current.length() < 1e-3);
        assert!((f.scale() - 1.0).abs() < 1e-5);
    }
}
