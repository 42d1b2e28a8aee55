// Hero typewriter timing (ms)
pub const TYPING_START_DELAY_MS: i32 = 400;
pub const TYPING_INTERVAL_MS: i32 = 60;

/// Reveals a text one character per step.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    shown: usize, // byte length of the visible prefix
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.len()
    }

    /// Reveals the next character and returns the visible prefix, or
    /// `None` once everything is shown.
    pub fn step(&mut self) -> Option<&str> {
        let next = self.text[self.shown..].chars().next()?;
        self.shown += next.len_utf8();
        Some(self.visible())
    }
}
