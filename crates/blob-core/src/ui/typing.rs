/// Name typed into the hero heading.
pub const TYPING_TEXT: &str = "Tanmay Patil";
pub const TYPING_START_DELAY_MS: u32 = 500;
pub const TYPING_CHAR_INTERVAL_MS: u32 = 100;
pub const CURSOR_BLINK_ANIMATION: &str = "blink 1s infinite";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypingStep {
    /// Text to show after appending one more character.
    Typed(String),
    /// Every character is shown; start the cursor blink.
    Done,
}

/// One character per tick, then a single `Done`.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    finished: bool,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            finished: false,
        }
    }

    pub fn shown_text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.finished
    }

    /// Advance one tick. Returns `None` once `Done` has been reported.
    pub fn tick(&mut self) -> Option<TypingStep> {
        if self.finished {
            return None;
        }
        if self.shown < self.chars.len() {
            self.shown += 1;
            Some(TypingStep::Typed(self.shown_text()))
        } else {
            self.finished = true;
            Some(TypingStep::Done)
        }
    }

    /// Delay before the next tick should run.
    pub fn next_delay_ms(&self) -> u32 {
        if self.shown == 0 {
            TYPING_START_DELAY_MS
        } else {
            TYPING_CHAR_INTERVAL_MS
        }
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(TYPING_TEXT)
    }
}
