//! Phonetic sequence composer.
//!
//! A syllable is held as four optional slots instead of a flat string, so the
//! "one symbol per category" rule holds by construction and the canonical
//! order (consonant → medial → final → tone) is a property of rendering.
//! Glyphs that are not in the catalog are kept in arrival order between the
//! final and the tone; an existing tone stays terminal.

use std::fmt;

use super::catalog::{Category, catalog};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composition {
    consonant: Option<char>,
    medial: Option<char>,
    vowel: Option<char>,
    others: Vec<char>,
    tone: Option<char>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays `text` glyph by glyph, as if each one had been clicked.
    pub fn from_display(text: &str) -> Self {
        let mut c = Self::new();
        for glyph in text.chars() {
            c.push(glyph);
        }
        c
    }

    /// Applies one activated symbol.
    pub fn push(&mut self, glyph: char) {
        match catalog().category(glyph) {
            Some(Category::Consonant) => self.consonant = Some(glyph),
            Some(Category::Medial) => self.medial = Some(glyph),
            Some(Category::Final) => self.vowel = Some(glyph),
            Some(Category::Tone) => self.tone = Some(glyph),
            None => self.others.push(glyph),
        }
    }

    /// Non-mutating form of [`push`](Self::push).
    pub fn with(&self, glyph: char) -> Self {
        let mut next = self.clone();
        next.push(glyph);
        next
    }

    /// Removes the last displayed glyph, returning it.
    pub fn pop(&mut self) -> Option<char> {
        if let Some(t) = self.tone.take() {
            return Some(t);
        }
        if let Some(o) = self.others.pop() {
            return Some(o);
        }
        self.vowel
            .take()
            .or_else(|| self.medial.take())
            .or_else(|| self.consonant.take())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.consonant.is_none()
            && self.medial.is_none()
            && self.vowel.is_none()
            && self.others.is_empty()
            && self.tone.is_none()
    }

    pub fn consonant(&self) -> Option<char> {
        self.consonant
    }

    pub fn medial(&self) -> Option<char> {
        self.medial
    }

    pub fn vowel(&self) -> Option<char> {
        self.vowel
    }

    pub fn tone(&self) -> Option<char> {
        self.tone
    }

    /// Glyphs in display order.
    pub fn glyphs(&self) -> impl Iterator<Item = char> + '_ {
        self.consonant
            .into_iter()
            .chain(self.medial)
            .chain(self.vowel)
            .chain(self.others.iter().copied())
            .chain(self.tone)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for g in self.glyphs() {
            write!(f, "{}", g)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(clicks: &str) -> String {
        Composition::from_display(clicks).to_string()
    }

    #[test]
    fn niang_walkthrough() {
        let mut c = Composition::new();
        let mut seen = Vec::new();
        for g in ['ㄋ', 'ㄧ', 'ㄤ', 'ˊ', 'ㄇ'] {
            c.push(g);
            seen.push(c.to_string());
        }
        assert_eq!(seen, ["ㄋ", "ㄋㄧ", "ㄋㄧㄤ", "ㄋㄧㄤˊ", "ㄇㄧㄤˊ"]);
    }

    #[test]
    fn consonant_always_leads() {
        assert_eq!(typed("ㄠㄏ"), "ㄏㄠ");
        assert_eq!(typed("ㄏㄠˇㄅ"), "ㄅㄠˇ");
    }

    #[test]
    fn medial_before_any_final_takes_medial_position() {
        assert_eq!(typed("ㄒㄩ"), "ㄒㄩ");
        assert_eq!(typed("ㄒㄩㄝˊ"), "ㄒㄩㄝˊ");
    }

    #[test]
    fn medial_after_final_is_reordered_in_front_of_it() {
        assert_eq!(typed("ㄍㄛㄨ"), "ㄍㄨㄛ");
        assert_eq!(typed("ㄍㄛˊㄨ"), "ㄍㄨㄛˊ");
        // replacing one medial with another
        assert_eq!(typed("ㄌㄧㄣㄩ"), "ㄌㄩㄣ");
    }

    #[test]
    fn final_replaces_final_and_tone_stays_terminal() {
        assert_eq!(typed("ㄇㄚˇㄠ"), "ㄇㄠˇ");
    }

    #[test]
    fn tone_replacement_keeps_syllable_order() {
        assert_eq!(typed("ㄏㄠˇˋ"), "ㄏㄠˋ");
        assert_eq!(typed("ˇㄏㄠ"), "ㄏㄠˇ");
    }

    #[test]
    fn unknown_symbols_append_before_tone() {
        assert_eq!(typed("ㄏㄠ?"), "ㄏㄠ?");
        assert_eq!(typed("ㄏㄠˇ?"), "ㄏㄠ?ˇ");
    }

    #[test]
    fn pop_removes_last_displayed_glyph() {
        let mut c = Composition::from_display("ㄇㄧㄤˊ");
        assert_eq!(c.pop(), Some('ˊ'));
        assert_eq!(c.pop(), Some('ㄤ'));
        assert_eq!(c.to_string(), "ㄇㄧ");
        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.pop(), None);
    }
}
