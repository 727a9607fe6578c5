use rand::Rng;

pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_COLORS: [&str; 4] = ["#00D4FF", "#FF1493", "#9D4EDD", "#FFFF00"];

/// One decorative background particle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub width_px: f32,
    pub height_px: f32,
    pub color: &'static str,
    pub opacity: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub duration_sec: f32,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            width_px: rng.gen_range(1.0..4.0),
            height_px: rng.gen_range(1.0..4.0),
            color: PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())],
            opacity: rng.gen_range(0.2..0.6),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            duration_sec: rng.gen_range(15.0..30.0),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "position: absolute; width: {w}px; height: {h}px; background: {c}; \
             border-radius: 50%; opacity: {o}; left: {l}%; top: {t}%; \
             animation: particleFloat {d}s linear infinite; \
             box-shadow: 0 0 6px currentColor; pointer-events: none;",
            w = self.width_px,
            h = self.height_px,
            c = self.color,
            o = self.opacity,
            l = self.left_pct,
            t = self.top_pct,
            d = self.duration_sec,
        )
    }
}

pub fn spawn_particles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn specs_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let ps = spawn_particles(&mut rng, PARTICLE_COUNT);
        assert_eq!(ps.len(), PARTICLE_COUNT);
        for p in &ps {
            assert!((1.0..4.0).contains(&p.width_px));
            assert!((0.2..0.6).contains(&p.opacity));
            assert!((15.0..30.0).contains(&p.duration_sec));
            assert!(PARTICLE_COLORS.contains(&p.color));
        }
    }

    #[test]
    fn css_mentions_animation() {
        let mut rng = StdRng::seed_from_u64(1);
        let css = ParticleSpec::random(&mut rng).css();
        assert!(css.contains("particleFloat"));
        assert!(css.starts_with("position: absolute;"));
    }
}
