pub const TOAST_VISIBLE_MS: u32 = 5_000;
pub const TOAST_SLIDE_OUT_MS: u32 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ToastKind::Success => "#00ff00",
            ToastKind::Error => "#ff4444",
            ToastKind::Info => "#00D4FF",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Inline style for the toast element.
    pub fn css(&self) -> String {
        let c = self.kind.color();
        format!(
            "position: fixed; top: 100px; right: 20px; padding: 1rem 2rem; \
             background: rgba(0, 0, 0, 0.9); color: {c}; border: 2px solid {c}; \
             border-radius: 8px; z-index: 10000; box-shadow: 0 0 20px {c}50; \
             animation: slideInRight 0.5s ease-out; backdrop-filter: blur(10px); \
             max-width: 300px; font-weight: 500;"
        )
    }
}

/// Tracks the single live toast. Showing a new one retires the old.
///
/// Each toast gets a generation number; timer callbacks carry it so a
/// callback for a replaced toast does nothing.
#[derive(Clone, Debug, Default)]
pub struct ToastSlot {
    generation: u64,
    current: Option<Toast>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    SlideOut,
    Remove,
}

impl ToastSlot {
    /// Install a toast, returning its generation.
    pub fn show(&mut self, toast: Toast) -> u64 {
        if let Some(old) = self.current.replace(toast) {
            log::debug!("[ui] replacing toast {:?}", old.message);
        }
        self.generation += 1;
        self.generation
    }

    #[inline]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Whether a timer callback for `generation` still applies.
    pub fn on_timer(&mut self, generation: u64, phase: ToastPhase) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        if phase == ToastPhase::Remove {
            self.current = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_timers_are_ignored() {
        let mut slot = ToastSlot::default();
        let first = slot.show(Toast::new(ToastKind::Info, "hello"));
        let second = slot.show(Toast::new(ToastKind::Error, "boom"));
        assert!(!slot.on_timer(first, ToastPhase::SlideOut));
        assert!(slot.on_timer(second, ToastPhase::SlideOut));
        assert!(slot.on_timer(second, ToastPhase::Remove));
        assert!(slot.current().is_none());
        assert!(!slot.on_timer(second, ToastPhase::Remove));
    }

    #[test]
    fn css_uses_kind_colour() {
        let css = Toast::new(ToastKind::Success, "ok").css();
        assert!(css.contains("color: #00ff00"));
        assert!(css.contains("box-shadow: 0 0 20px #00ff0050"));
    }
}
