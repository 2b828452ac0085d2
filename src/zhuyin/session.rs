//! Practice session: the chosen target character plus the composition the
//! player is building for it. Pure state; the DOM layer only forwards events.

use tracing::{debug, info};

use super::catalog::catalog;
use super::composer::Composition;
use super::readings::reading;
use super::target::validate_target;
use crate::error::WidgetError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// No target chosen yet.
    NoTarget,
    /// Target has no entry in the reading table.
    Unknown,
    /// Composition is a strict part of the reading (or empty).
    Incomplete,
    Correct,
    Incorrect,
}

/// Result of a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Composed(char),
    Removed,
    Cleared,
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct PracticeSession {
    target: Option<char>,
    composition: Composition,
}

impl PracticeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<char> {
        self.target
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn display(&self) -> String {
        self.composition.to_string()
    }

    /// Validates `input` and, on success, switches target and clears the
    /// composition. A rejected input leaves the session untouched.
    pub fn select_target(&mut self, input: &str) -> Result<char, WidgetError> {
        let c = validate_target(input)?;
        info!(target_char = %c, "practice target selected");
        self.target = Some(c);
        self.composition.clear();
        Ok(c)
    }

    pub fn click(&mut self, glyph: char) {
        self.composition.push(glyph);
        debug!(glyph = %glyph, composed = %self.composition, "symbol activated");
    }

    /// Handles a `KeyboardEvent.key` value.
    pub fn press_key(&mut self, key: &str) -> KeyOutcome {
        match key {
            "Backspace" => {
                if self.composition.pop().is_some() {
                    KeyOutcome::Removed
                } else {
                    KeyOutcome::Ignored
                }
            }
            "Escape" => {
                self.clear();
                KeyOutcome::Cleared
            }
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => match catalog().for_key(c) {
                        Some(sym) => {
                            self.click(sym.glyph);
                            KeyOutcome::Composed(sym.glyph)
                        }
                        None => KeyOutcome::Ignored,
                    },
                    _ => KeyOutcome::Ignored,
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.composition.clear();
    }

    pub fn expected_reading(&self) -> Option<&'static str> {
        self.target.and_then(reading)
    }

    pub fn verdict(&self) -> Verdict {
        let Some(target) = self.target else {
            return Verdict::NoTarget;
        };
        let Some(expected) = reading(target) else {
            return Verdict::Unknown;
        };
        let expected = Composition::from_display(expected);
        if self.composition == expected {
            return Verdict::Correct;
        }
        let is_part = self
            .composition
            .glyphs()
            .all(|g| expected.glyphs().any(|e| e == g));
        if is_part {
            Verdict::Incomplete
        } else {
            Verdict::Incorrect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_target_resets_composition() {
        let mut s = PracticeSession::new();
        s.click('ㄋ');
        assert!(s.select_target("ab").is_err());
        assert_eq!(s.display(), "ㄋ");
        assert_eq!(s.target(), None);

        assert_eq!(s.select_target("好"), Ok('好'));
        assert_eq!(s.display(), "");
        assert_eq!(s.target(), Some('好'));
    }

    #[test]
    fn verdict_progression() {
        let mut s = PracticeSession::new();
        assert_eq!(s.verdict(), Verdict::NoTarget);
        s.select_target("好").unwrap();
        assert_eq!(s.verdict(), Verdict::Incomplete);
        s.click('ㄏ');
        s.click('ㄠ');
        assert_eq!(s.verdict(), Verdict::Incomplete);
        s.click('ˋ');
        assert_eq!(s.verdict(), Verdict::Incorrect);
        s.click('ˇ');
        assert_eq!(s.verdict(), Verdict::Correct);

        s.select_target("龍").unwrap();
        assert_eq!(s.verdict(), Verdict::Unknown);
    }

    #[test]
    fn keyboard_input_uses_dachen_layout() {
        let mut s = PracticeSession::new();
        assert_eq!(s.press_key("s"), KeyOutcome::Composed('ㄋ'));
        assert_eq!(s.press_key("u"), KeyOutcome::Composed('ㄧ'));
        assert_eq!(s.press_key(";"), KeyOutcome::Composed('ㄤ'));
        assert_eq!(s.press_key("6"), KeyOutcome::Composed('ˊ'));
        assert_eq!(s.display(), "ㄋㄧㄤˊ");
        assert_eq!(s.press_key("Shift"), KeyOutcome::Ignored);
        assert_eq!(s.press_key("Backspace"), KeyOutcome::Removed);
        assert_eq!(s.display(), "ㄋㄧㄤ");
        assert_eq!(s.press_key("Escape"), KeyOutcome::Cleared);
        assert_eq!(s.press_key("Backspace"), KeyOutcome::Ignored);
    }
}
