//! DOM-free state behind the page interactions. The wasm front-end applies
//! what these return to the document.

pub mod contact;
pub mod filter;
pub mod follow;
pub mod particles;
pub mod scroll;
pub mod skills;
pub mod throttle;
pub mod toast;
pub mod typing;

pub use contact::{ButtonState, ButtonView, ContactEffect, ContactFlow, ContactForm, ContactTimer};
pub use filter::CardTransition;
pub use follow::EasedFollower;
pub use particles::{spawn_particles, ParticleSpec};
pub use scroll::{active_section, scroll_progress_percent, shortcut_target, SectionBounds};
pub use skills::{plan_skill_bars, OnceReveal, SkillBarPlan};
pub use throttle::Throttle;
pub use toast::{Toast, ToastKind, ToastPhase, ToastSlot};
pub use typing::{Typewriter, TypingStep};
