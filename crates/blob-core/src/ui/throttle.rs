use instant::Instant;
use std::time::Duration;

/// Leading-edge throttle: the first call runs, calls within `limit` after it are dropped.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    limit: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit: Duration::from_millis(limit_ms as u64),
            last_fired: None,
        }
    }

    /// Whether a call arriving now should run.
    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }

    pub fn ready_at(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(t) if now < t || now - t < self.limit => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_edge_then_quiet_window() {
        let mut th = Throttle::new(100);
        let t0 = Instant::now();
        assert!(th.ready_at(t0));
        assert!(!th.ready_at(t0 + Duration::from_millis(40)));
        assert!(!th.ready_at(t0 + Duration::from_millis(99)));
        assert!(th.ready_at(t0 + Duration::from_millis(100)));
        assert!(!th.ready_at(t0 + Duration::from_millis(150)));
    }
}
