// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(clamped_pixel_ratio(1.0, 2.0), 1.0);
    assert_eq!(clamped_pixel_ratio(1.5, 2.0), 1.5);
    assert_eq!(clamped_pixel_ratio(3.0, 2.0), 2.0);
}

#[test]
fn bogus_pixel_ratio_falls_back_to_one() {
    assert_eq!(clamped_pixel_ratio(0.0, 2.0), 1.0);
    assert_eq!(clamped_pixel_ratio(-2.0, 2.0), 1.0);
    assert_eq!(clamped_pixel_ratio(f64::NAN, 2.0), 1.0);
}

#[test]
fn backing_size_scales_and_never_hits_zero() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-10.0, 5.0, 1.0), (1, 5));
}

#[test]
fn anchor_ids() {
    assert_eq!(anchor_id("#about"), Some("about"));
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("https://example.com/#about"), None);
}

#[test]
fn ctrl_or_cmd_triggers_shortcuts() {
    assert!(is_shortcut_modifier(true, false));
    assert!(is_shortcut_modifier(false, true));
    assert!(!is_shortcut_modifier(false, false));
}
