/// DOM hooks and page timings for the wasm front-end.
///
/// Blob tuning lives in `blob_core::constants`; this file only holds what the
/// page markup and the browser wiring need.
// Canvas and its config attributes
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const ATTR_NOISE_SEED: &str = "data-noise-seed";
pub const ATTR_DETAIL: &str = "data-detail";
pub const ATTR_DISPLACEMENT: &str = "data-displacement";

// Control panel
pub const CONTROLS_PANEL_ID: &str = "blob-controls";
pub const CONTROLS_PANEL_TITLE: &str = "Blob Controls";
pub const CONTROLS_PANEL_CSS: &str = "position: fixed; top: 20px; right: 20px; \
    background: rgba(0,0,0,0.8); color: white; padding: 15px; border-radius: 10px; \
    font-family: Arial, sans-serif; font-size: 12px; z-index: 1000; backdrop-filter: blur(10px);";
pub const SLIDER_WIDTH: &str = "150px";

// Hero
pub const TYPING_SELECTOR: &str = ".typing-text";
pub const CURSOR_SELECTOR: &str = ".cursor";
pub const CSS_BLOB_SELECTOR: &str = ".blob-3d";
pub const CSS_BLOB_CONTAINER_SELECTOR: &str = ".blob-container";

// Navigation
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_BAR_SELECTOR: &str = ".nav-glass";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ACTIVE_CLASS: &str = "active";
pub const PROGRESS_BAR_CSS: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
    background: linear-gradient(90deg, #00D4FF, #FF1493); z-index: 10000; \
    transition: width 0.1s ease-out; box-shadow: 0 0 10px rgba(0, 212, 255, 0.5);";

// Projects
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const SHOW_TRANSITION: &str = "all 0.6s ease-out";

// Skills
pub const SKILLS_SECTION_SELECTOR: &str = ".skills-section";
pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";

// Reveal and hover
pub const REVEAL_SELECTOR: &str = ".glass, .project-card, .timeline-item, .certificate-card";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_TRANSITION: &str = "all 0.8s cubic-bezier(0.33, 1, 0.68, 1)";
pub const HOVER_CARD_SELECTOR: &str = ".glass";

// Contact
pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";
pub const CONTACT_BUTTON_SELECTOR: &str = ".btn-neon";

// Background and toasts
pub const PARTICLES_SELECTOR: &str = ".particles-bg";
pub const NOTIFICATION_CLASS: &str = "notification";

// Page load
pub const BODY_FADE_DELAY_MS: i32 = 100;
pub const WELCOME_DELAY_MS: i32 = 2_000;
pub const WELCOME_MESSAGE: &str = "Welcome to my portfolio! 🚀";
