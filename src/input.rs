/// Device pixel ratio used for the canvas backing store; high-DPI screens are capped.
#[inline]
pub fn clamped_pixel_ratio(dpr: f64, max_ratio: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(max_ratio)
    } else {
        1.0
    }
}

/// Backing-store size in physical pixels for a CSS size; never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, pixel_ratio: f64) -> (u32, u32) {
    let w = (css_width * pixel_ratio).max(0.0) as u32;
    let h = (css_height * pixel_ratio).max(0.0) as u32;
    (w.max(1), h.max(1))
}

/// `href="#about"` → `"about"`. Anything that is not an in-page anchor is ignored.
#[inline]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether a keydown should be treated as a navigation shortcut.
#[inline]
pub fn is_shortcut_modifier(ctrl: bool, meta: bool) -> bool {
    ctrl || meta
}
