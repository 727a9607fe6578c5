//! Contact form validation and the simulated submission timeline.

use crate::error::ContactError;
use crate::ui::toast::ToastKind;
use smallvec::{smallvec, SmallVec};

/// Simulated network round trip.
pub const SUBMIT_DELAY_MS: u32 = 2_000;
/// How long "Message Sent!" stays on the button.
pub const SENT_REVERT_DELAY_MS: u32 = 3_000;

pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "Message Sent!";
pub const SENT_BACKGROUND: &str = "linear-gradient(45deg, #00ff00, #00cc00)";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Build from raw input values; surrounding whitespace is dropped.
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            message: message.trim().to_owned(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@` with text on both
/// sides, and a dot in the domain with text on both sides of it.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Ready,
    Sending,
    Sent,
}

/// What the submit button should look like.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
    pub opacity: &'static str,
    /// Empty string clears the inline background.
    pub background: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactTimer {
    TransportDone,
    RevertButton,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContactEffect {
    Notify { kind: ToastKind, message: String },
    Button(ButtonView),
    ResetForm,
    Schedule { delay_ms: u32, timer: ContactTimer },
}

type Effects = SmallVec<[ContactEffect; 4]>;

/// Submit button lifecycle: Ready → Sending → Sent → Ready.
#[derive(Clone, Debug, Default)]
pub struct ContactFlow {
    state: ButtonState,
    original_label: String,
}

impl ContactFlow {
    pub fn new(original_label: impl Into<String>) -> Self {
        Self {
            state: ButtonState::Ready,
            original_label: original_label.into(),
        }
    }

    #[inline]
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Handle a submit. Validation failures only produce an error toast.
    pub fn submit(&mut self, form: &ContactForm) -> Effects {
        if self.state != ButtonState::Ready {
            log::debug!("[contact] submit ignored while {:?}", self.state);
            return SmallVec::new();
        }
        if let Err(e) = form.validate() {
            log::info!("[contact] rejected: {}", e);
            return smallvec![notify(ToastKind::Error, &e)];
        }
        self.state = ButtonState::Sending;
        log::info!("[contact] sending");
        smallvec![
            ContactEffect::Button(ButtonView {
                label: SENDING_LABEL.to_owned(),
                disabled: true,
                opacity: "0.7",
                background: "",
            }),
            ContactEffect::Schedule {
                delay_ms: SUBMIT_DELAY_MS,
                timer: ContactTimer::TransportDone,
            },
        ]
    }

    pub fn on_timer(&mut self, timer: ContactTimer) -> Effects {
        match (self.state, timer) {
            (ButtonState::Sending, ContactTimer::TransportDone) => {
                self.state = ButtonState::Sent;
                log::info!("[contact] sent");
                smallvec![
                    ContactEffect::Button(ButtonView {
                        label: SENT_LABEL.to_owned(),
                        disabled: true,
                        opacity: "0.7",
                        background: SENT_BACKGROUND,
                    }),
                    ContactEffect::ResetForm,
                    ContactEffect::Notify {
                        kind: ToastKind::Success,
                        message: SUCCESS_MESSAGE.to_owned(),
                    },
                    ContactEffect::Schedule {
                        delay_ms: SENT_REVERT_DELAY_MS,
                        timer: ContactTimer::RevertButton,
                    },
                ]
            }
            (ButtonState::Sent, ContactTimer::RevertButton) => {
                self.state = ButtonState::Ready;
                smallvec![ContactEffect::Button(self.ready_view())]
            }
            (state, timer) => {
                log::warn!("[contact] unexpected {:?} while {:?}", timer, state);
                SmallVec::new()
            }
        }
    }

    /// The simulated transport failed: error toast and an immediate revert.
    pub fn on_transport_error(&mut self, reason: &str) -> Effects {
        if self.state != ButtonState::Sending {
            return SmallVec::new();
        }
        self.state = ButtonState::Ready;
        let err = ContactError::Transport(reason.to_owned());
        log::warn!("[contact] transport failed: {}", reason);
        smallvec![
            notify(ToastKind::Error, &err),
            ContactEffect::Button(self.ready_view()),
        ]
    }

    fn ready_view(&self) -> ButtonView {
        ButtonView {
            label: self.original_label.clone(),
            disabled: false,
            opacity: "1",
            background: "",
        }
    }
}

fn notify(kind: ToastKind, err: &ContactError) -> ContactEffect {
    ContactEffect::Notify {
        kind,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn fields_are_trimmed_before_validation() {
        let form = ContactForm::new("  Ada ", " ada@example.com ", "   ");
        assert_eq!(form.name, "Ada");
        assert_eq!(form.validate(), Err(ContactError::MissingField));
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut flow = ContactFlow::new("Send Message");
        let form = ContactForm::new("Ada", "ada@example.com", "hi");
        assert_eq!(flow.submit(&form).len(), 2);
        assert!(flow.submit(&form).is_empty());
        assert_eq!(flow.state(), ButtonState::Sending);
    }

    #[test]
    fn transport_error_reverts_immediately() {
        let mut flow = ContactFlow::new("Send Message");
        flow.submit(&ContactForm::new("Ada", "ada@example.com", "hi"));
        let fx = flow.on_transport_error("offline");
        assert_eq!(
            fx[0],
            ContactEffect::Notify {
                kind: ToastKind::Error,
                message: "Failed to send message. Please try again.".into()
            }
        );
        match &fx[1] {
            ContactEffect::Button(v) => {
                assert_eq!(v.label, "Send Message");
                assert!(!v.disabled);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(flow.state(), ButtonState::Ready);
        // A late timer from the failed attempt does nothing
        assert!(flow.on_timer(ContactTimer::TransportDone).is_empty());
    }
}
