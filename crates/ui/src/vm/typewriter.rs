use std::time::Duration;

pub const PLACEHOLDER_TEXTS: [&str; 6] = [
    "I have fever and sore throat...",
    "I'm experiencing headache and nausea...",
    "I have stomach pain and diarrhea...",
    "I feel dizzy and have chest pain...",
    "I have difficulty breathing...",
    "I'm having back pain and fatigue...",
];

const TYPE_DELAY: Duration = Duration::from_millis(100);
const DELETE_DELAY: Duration = Duration::from_millis(30);
const HOLD_DELAY: Duration = Duration::from_millis(2000);
const NEXT_DELAY: Duration = Duration::from_millis(500);

/// Types out each placeholder, holds it, deletes it, then moves on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    texts: &'static [&'static str],
    index: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    #[must_use]
    pub fn new(texts: &'static [&'static str]) -> Self {
        Self {
            texts,
            index: 0,
            shown: 0,
            deleting: false,
        }
    }

    /// Visible prefix of the current placeholder.
    #[must_use]
    pub fn text(&self) -> String {
        self.current().chars().take(self.shown).collect()
    }

    /// Advance one step and return how long to wait before the next one.
    pub fn tick(&mut self) -> Duration {
        let len = self.current().chars().count();
        if len == 0 {
            self.advance();
            return NEXT_DELAY;
        }

        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                self.advance();
                return NEXT_DELAY;
            }
            DELETE_DELAY
        } else {
            self.shown = (self.shown + 1).min(len);
            if self.shown == len {
                self.deleting = true;
                return HOLD_DELAY;
            }
            TYPE_DELAY
        }
    }

    fn current(&self) -> &'static str {
        self.texts.get(self.index).copied().unwrap_or_default()
    }

    fn advance(&mut self) {
        if !self.texts.is_empty() {
            self.index = (self.index + 1) % self.texts.len();
        }
    }
}
