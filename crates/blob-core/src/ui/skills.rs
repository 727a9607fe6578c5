pub const SKILLS_VISIBLE_THRESHOLD: f64 = 0.3;
pub const SKILL_STAGGER_MS: u32 = 200;
pub const SKILL_GLOW_DELAY_MS: u32 = 1_000;
pub const SKILL_TRANSITION: &str = "width 1.5s cubic-bezier(0.33, 1, 0.68, 1)";
pub const SKILL_GLOW: &str = "0 0 20px rgba(0, 212, 255, 0.8)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillBarPlan {
    pub index: usize,
    /// Value for `style.width`, e.g. `"85%"`.
    pub width: String,
    pub start_ms: u32,
    pub glow_ms: u32,
}

/// Staggered fill schedule for the skill bars, given each bar's `data-level`.
/// Missing or unparseable levels fill to 0%.
pub fn plan_skill_bars<'a, I>(levels: I) -> Vec<SkillBarPlan>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    levels
        .into_iter()
        .enumerate()
        .map(|(index, level)| {
            let pct = level
                .and_then(|l| l.trim().parse::<f32>().ok())
                .filter(|v| v.is_finite())
                .map(|v| v.clamp(0.0, 100.0))
                .unwrap_or(0.0);
            let start_ms = index as u32 * SKILL_STAGGER_MS;
            SkillBarPlan {
                index,
                width: format!("{}%", pct),
                start_ms,
                glow_ms: start_ms + SKILL_GLOW_DELAY_MS,
            }
        })
        .collect()
}

/// Fires once: the first intersection at or above the threshold.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnceReveal {
    fired: bool,
}

impl OnceReveal {
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.fired || !is_intersecting {
            return false;
        }
        self.fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_and_glow() {
        let plan = plan_skill_bars([Some("90"), Some(" 75 "), None, Some("abc")]);
        assert_eq!(plan[0].width, "90%");
        assert_eq!(plan[1].width, "75%");
        assert_eq!(plan[2].width, "0%");
        assert_eq!(plan[3].start_ms, 600);
        assert_eq!(plan[3].glow_ms, 1_600);
    }

    #[test]
    fn reveal_only_once() {
        let mut r = OnceReveal::default();
        assert!(!r.observe(false));
        assert!(r.observe(true));
        assert!(!r.observe(true));
    }
}
