/// Offset added to `scrollY` so a section counts as current once it passes under the nav bar.
pub const SCROLL_SPY_OFFSET_PX: f64 = 120.0;
pub const SCROLL_SPY_THROTTLE_MS: u32 = 100;
pub const PROGRESS_THROTTLE_MS: u32 = 50;

/// Vertical extent of a `section[id]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section containing `scroll_y + offset`. When bounds overlap the last
/// match wins, mirroring a document-order walk that keeps overwriting.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let pos = scroll_y + SCROLL_SPY_OFFSET_PX;
    sections
        .iter()
        .filter(|s| pos >= s.top && pos < s.top + s.height)
        .last()
        .map(|s| s.id.as_str())
}

/// Scroll progress in percent, capped at 100. A page that cannot scroll reads 0.
pub fn scroll_progress_percent(scroll_top: f64, body_height: f64, viewport_height: f64) -> f64 {
    let scrollable = body_height - viewport_height;
    if scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Scroll target for a nav click: the section top minus the fixed nav height.
#[inline]
pub fn nav_scroll_target(section_top: f64, nav_height: f64) -> f64 {
    section_top - nav_height
}

/// Ctrl/Cmd + digit shortcuts.
pub fn shortcut_target(key: &str) -> Option<&'static str> {
    match key {
        "1" => Some("#home"),
        "2" => Some("#about"),
        "3" => Some("#projects"),
        "4" => Some("#contact"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        [("home", 0.0, 800.0), ("about", 800.0, 600.0), ("projects", 1400.0, 1000.0)]
            .into_iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.into(),
                top,
                height,
            })
            .collect()
    }

    #[test]
    fn spy_uses_nav_offset() {
        let s = page();
        assert_eq!(active_section(&s, 0.0), Some("home"));
        assert_eq!(active_section(&s, 679.0), Some("home"));
        assert_eq!(active_section(&s, 680.0), Some("about"));
        assert_eq!(active_section(&s, 5_000.0), None);
    }

    #[test]
    fn progress_is_capped_and_safe() {
        assert_eq!(scroll_progress_percent(500.0, 2_000.0, 1_000.0), 50.0);
        assert_eq!(scroll_progress_percent(5_000.0, 2_000.0, 1_000.0), 100.0);
        assert_eq!(scroll_progress_percent(10.0, 900.0, 1_000.0), 0.0);
    }

    #[test]
    fn shortcuts() {
        assert_eq!(shortcut_target("3"), Some("#projects"));
        assert_eq!(shortcut_target("5"), None);
        assert_eq!(nav_scroll_target(800.0, 72.0), 728.0);
    }
}
