// Host-side tests for the page state machines, driven by a TimerQueue
// standing in for setTimeout.

use blob_core::ui::contact::{SENDING_LABEL, SENT_BACKGROUND, SENT_LABEL, SUCCESS_MESSAGE};
use blob_core::ui::toast::{TOAST_SLIDE_OUT_MS, TOAST_VISIBLE_MS};
use blob_core::ui::*;
use blob_core::TimerQueue;

/// What the page would show after applying contact effects.
#[derive(Default)]
struct FakePage {
    button: Option<ButtonView>,
    toasts: Vec<(ToastKind, String)>,
    resets: u32,
}

fn apply(
    page: &mut FakePage,
    timers: &mut TimerQueue<ContactTimer>,
    effects: impl IntoIterator<Item = ContactEffect>,
) {
    for effect in effects {
        match effect {
            ContactEffect::Notify { kind, message } => page.toasts.push((kind, message)),
            ContactEffect::Button(view) => page.button = Some(view),
            ContactEffect::ResetForm => page.resets += 1,
            ContactEffect::Schedule { delay_ms, timer } => timers.schedule(delay_ms, timer),
        }
    }
}

fn run_until(
    page: &mut FakePage,
    flow: &mut ContactFlow,
    timers: &mut TimerQueue<ContactTimer>,
    until_ms: u64,
) {
    while timers.now_ms() < until_ms {
        for timer in timers.advance(1) {
            let effects = flow.on_timer(timer);
            apply(page, timers, effects);
        }
    }
}

#[test]
fn empty_message_only_shows_an_error() {
    let mut flow = ContactFlow::new("Send Message");
    let mut timers = TimerQueue::new();
    let mut page = FakePage::default();
    let form = ContactForm::new("Ada", "ada@example.com", "   ");
    let effects = flow.submit(&form);
    apply(&mut page, &mut timers, effects);

    assert_eq!(page.toasts, vec![(ToastKind::Error, "Please fill in all fields".to_owned())]);
    assert!(page.button.is_none());
    assert!(timers.is_empty());
    assert_eq!(flow.state(), ButtonState::Ready);
}

#[test]
fn bad_email_is_rejected() {
    let mut flow = ContactFlow::new("Send Message");
    let effects = flow.submit(&ContactForm::new("Ada", "ada@example", "hi"));
    assert_eq!(
        effects.as_slice(),
        &[ContactEffect::Notify {
            kind: ToastKind::Error,
            message: "Please enter a valid email address".to_owned(),
        }]
    );
}

#[test]
fn successful_submit_timeline() {
    let mut flow = ContactFlow::new("Send Message");
    let mut timers = TimerQueue::new();
    let mut page = FakePage::default();
    let form = ContactForm::new("Ada", "ada@example.com", "Hello there");

    let effects = flow.submit(&form);
    apply(&mut page, &mut timers, effects);
    let b = page.button.clone().unwrap();
    assert_eq!(b.label, SENDING_LABEL);
    assert!(b.disabled);
    assert_eq!(b.opacity, "0.7");

    // a second click while sending does nothing
    assert!(flow.submit(&form).is_empty());

    run_until(&mut page, &mut flow, &mut timers, 1_999);
    assert_eq!(flow.state(), ButtonState::Sending);
    assert!(page.toasts.is_empty());

    run_until(&mut page, &mut flow, &mut timers, 2_000);
    let b = page.button.clone().unwrap();
    assert_eq!(b.label, SENT_LABEL);
    assert_eq!(b.background, SENT_BACKGROUND);
    assert_eq!(page.resets, 1);
    assert_eq!(page.toasts, vec![(ToastKind::Success, SUCCESS_MESSAGE.to_owned())]);

    run_until(&mut page, &mut flow, &mut timers, 4_999);
    assert_eq!(flow.state(), ButtonState::Sent);

    run_until(&mut page, &mut flow, &mut timers, 5_000);
    let b = page.button.clone().unwrap();
    assert_eq!(b.label, "Send Message");
    assert!(!b.disabled);
    assert_eq!(b.opacity, "1");
    assert_eq!(b.background, "");
    assert_eq!(flow.state(), ButtonState::Ready);
    assert!(timers.is_empty());
}

#[test]
fn transport_error_reverts_straight_away() {
    let mut flow = ContactFlow::new("Send Message");
    flow.submit(&ContactForm::new("Ada", "ada@example.com", "Hello"));
    let effects = flow.on_transport_error("offline");
    assert_eq!(flow.state(), ButtonState::Ready);
    assert!(matches!(
        &effects[0],
        ContactEffect::Notify { kind: ToastKind::Error, .. }
    ));
    // the pending TransportDone timer is now stale
    assert!(flow.on_timer(ContactTimer::TransportDone).is_empty());
}

#[test]
fn toast_lives_five_and_a_half_seconds() {
    let mut slot = ToastSlot::default();
    let mut timers = TimerQueue::new();
    let gen = slot.show(Toast::new(ToastKind::Success, "ok"));
    timers.schedule(TOAST_VISIBLE_MS, (gen, ToastPhase::SlideOut));

    assert!(timers.advance(TOAST_VISIBLE_MS - 1).is_empty());
    for (g, phase) in timers.advance(1) {
        assert!(slot.on_timer(g, phase));
        timers.schedule(TOAST_SLIDE_OUT_MS, (g, ToastPhase::Remove));
    }
    assert!(slot.current().is_some());
    for (g, phase) in timers.advance(TOAST_SLIDE_OUT_MS) {
        assert!(slot.on_timer(g, phase));
    }
    assert!(slot.current().is_none());
}

#[test]
fn newer_toast_survives_old_timers() {
    let mut slot = ToastSlot::default();
    let old = slot.show(Toast::new(ToastKind::Info, "welcome"));
    let new = slot.show(Toast::new(ToastKind::Error, "oops"));
    assert!(!slot.on_timer(old, ToastPhase::Remove));
    assert_eq!(slot.current().map(|t| t.message.as_str()), Some("oops"));
    assert!(slot.on_timer(new, ToastPhase::Remove));
}

#[test]
fn typewriter_types_the_name() {
    let mut tw = Typewriter::default();
    let mut timers = TimerQueue::new();
    timers.schedule(tw.next_delay_ms(), ());
    let mut shown = String::new();
    let mut done_at = None;
    while done_at.is_none() {
        for () in timers.advance(1) {
            match tw.tick() {
                Some(TypingStep::Typed(text)) => {
                    shown = text;
                    timers.schedule(tw.next_delay_ms(), ());
                }
                Some(TypingStep::Done) => done_at = Some(timers.now_ms()),
                None => unreachable!(),
            }
        }
    }
    assert_eq!(shown, "Tanmay Patil");
    // 500ms before the first letter, then 100ms per letter
    assert_eq!(done_at, Some(500 + 100 * 12));
    assert!(tw.tick().is_none());
}

#[test]
fn filter_shows_matching_cards() {
    assert_eq!(CardTransition::for_card("all", Some("web")), CardTransition::Show);
    assert_eq!(CardTransition::for_card("web", Some("web")), CardTransition::Show);
    assert_eq!(CardTransition::for_card("web", Some("ml")), CardTransition::Hide);
    assert_eq!(CardTransition::for_card("web", None), CardTransition::Hide);
}

#[test]
fn skill_bars_fill_in_sequence() {
    let plans = plan_skill_bars([Some("90"), Some("75"), None, Some("junk")]);
    let widths: Vec<&str> = plans.iter().map(|p| p.width.as_str()).collect();
    assert_eq!(widths, ["90%", "75%", "0%", "0%"]);
    let starts: Vec<u32> = plans.iter().map(|p| p.start_ms).collect();
    assert_eq!(starts, [0, 200, 400, 600]);
    assert_eq!(plans[1].glow_ms, 1_200);

    let mut once = OnceReveal::default();
    assert!(!once.observe(false));
    assert!(once.observe(true));
    assert!(!once.observe(true));
}

#[test]
fn scroll_helpers() {
    let sections = vec![
        SectionBounds {
            id: "home".into(),
            top: 0.0,
            height: 900.0,
        },
        SectionBounds {
            id: "contact".into(),
            top: 900.0,
            height: 700.0,
        },
    ];
    assert_eq!(active_section(&sections, 790.0), Some("contact"));
    assert_eq!(active_section(&sections, 5_000.0), None);
    assert_eq!(scroll_progress_percent(500.0, 2_000.0, 1_000.0), 50.0);
    assert_eq!(scroll_progress_percent(0.0, 500.0, 1_000.0), 0.0);
    assert_eq!(shortcut_target("3"), Some("#projects"));
    assert_eq!(shortcut_target("5"), None);
}

#[test]
fn particles_use_the_palette() {
    use rand::{rngs::StdRng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(11);
    let specs = spawn_particles(&mut rng, 30);
    assert_eq!(specs.len(), 30);
    for p in &specs {
        assert!(blob_core::ui::particles::PARTICLE_COLORS.contains(&p.color));
        assert!((0.0..=100.0).contains(&p.left_pct));
        assert!(p.css().contains(p.color));
    }
}

