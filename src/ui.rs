//! DOM wiring for the page interactions. Each `wire_*` looks up its elements
//! and silently does nothing when the page does not have them.

mod contact;
mod controls_panel;
mod hero;
mod nav;
mod page;
mod particles;
mod projects;
mod reveal;
mod skills;
mod styles;
mod toast;

pub use contact::wire_contact_form;
pub use controls_panel::build_controls_panel;
pub use hero::{wire_css_blob, wire_typing};
pub use nav::{wire_nav_links, wire_scroll_progress, wire_scroll_spy};
pub use page::wire_page_load;
pub use particles::spawn_background_particles;
pub use projects::wire_project_filters;
pub use reveal::{wire_card_hover, wire_scroll_reveal};
pub use skills::wire_skill_bars;
pub use styles::inject_styles;
pub use toast::Notifier;
