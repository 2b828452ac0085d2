// Zhuyin symbol catalog.
// Glyphs are laid out on the standard (Dachen) keyboard: four rows mirroring
// the physical number row and the three letter rows.
use std::collections::HashMap;
use std::sync::OnceLock;

/// Phonetic role of a glyph inside one syllable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Initial consonant (ㄅ … ㄙ). Always leads.
    Consonant,
    /// Medial vowel ㄧ / ㄨ / ㄩ. Sits between consonant and final.
    Medial,
    /// Final vowel (ㄚ … ㄦ).
    Final,
    /// Tone mark ˊ ˇ ˋ ˙. Always terminal.
    Tone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolInfo {
    pub glyph: char,
    pub category: Category,
    pub row: u8,
    pub col: u8,
    /// Physical key on a US keyboard using the Dachen layout.
    pub key: char,
}

const fn sym(glyph: char, category: Category, row: u8, col: u8, key: char) -> SymbolInfo {
    SymbolInfo { glyph, category, row, col, key }
}

use Category::*;

pub static SYMBOLS: [SymbolInfo; 41] = [
    // row 0 (number row)
    sym('ㄅ', Consonant, 0, 0, '1'),
    sym('ㄉ', Consonant, 0, 1, '2'),
    sym('ˇ', Tone, 0, 2, '3'),
    sym('ˋ', Tone, 0, 3, '4'),
    sym('ㄓ', Consonant, 0, 4, '5'),
    sym('ˊ', Tone, 0, 5, '6'),
    sym('˙', Tone, 0, 6, '7'),
    sym('ㄚ', Final, 0, 7, '8'),
    sym('ㄞ', Final, 0, 8, '9'),
    sym('ㄢ', Final, 0, 9, '0'),
    sym('ㄦ', Final, 0, 10, '-'),
    // row 1
    sym('ㄆ', Consonant, 1, 0, 'q'),
    sym('ㄊ', Consonant, 1, 1, 'w'),
    sym('ㄍ', Consonant, 1, 2, 'e'),
    sym('ㄐ', Consonant, 1, 3, 'r'),
    sym('ㄔ', Consonant, 1, 4, 't'),
    sym('ㄗ', Consonant, 1, 5, 'y'),
    sym('ㄧ', Medial, 1, 6, 'u'),
    sym('ㄛ', Final, 1, 7, 'i'),
    sym('ㄟ', Final, 1, 8, 'o'),
    sym('ㄣ', Final, 1, 9, 'p'),
    // row 2
    sym('ㄇ', Consonant, 2, 0, 'a'),
    sym('ㄋ', Consonant, 2, 1, 's'),
    sym('ㄎ', Consonant, 2, 2, 'd'),
    sym('ㄑ', Consonant, 2, 3, 'f'),
    sym('ㄕ', Consonant, 2, 4, 'g'),
    sym('ㄘ', Consonant, 2, 5, 'h'),
    sym('ㄨ', Medial, 2, 6, 'j'),
    sym('ㄜ', Final, 2, 7, 'k'),
    sym('ㄠ', Final, 2, 8, 'l'),
    sym('ㄤ', Final, 2, 9, ';'),
    // row 3
    sym('ㄈ', Consonant, 3, 0, 'z'),
    sym('ㄌ', Consonant, 3, 1, 'x'),
    sym('ㄏ', Consonant, 3, 2, 'c'),
    sym('ㄒ', Consonant, 3, 3, 'v'),
    sym('ㄖ', Consonant, 3, 4, 'b'),
    sym('ㄙ', Consonant, 3, 5, 'n'),
    sym('ㄩ', Medial, 3, 6, 'm'),
    sym('ㄝ', Final, 3, 7, ','),
    sym('ㄡ', Final, 3, 8, '.'),
    sym('ㄥ', Final, 3, 9, '/'),
];

pub const GRID_ROWS: u8 = 4;

/// Lookup tables over [`SYMBOLS`], built once.
pub struct Catalog {
    by_glyph: HashMap<char, SymbolInfo>,
    by_key: HashMap<char, SymbolInfo>,
}

impl Catalog {
    fn build() -> Self {
        let by_glyph = SYMBOLS.iter().map(|s| (s.glyph, *s)).collect();
        let by_key = SYMBOLS.iter().map(|s| (s.key, *s)).collect();
        Self { by_glyph, by_key }
    }

    pub fn get(&self, glyph: char) -> Option<&SymbolInfo> {
        self.by_glyph.get(&glyph)
    }

    pub fn category(&self, glyph: char) -> Option<Category> {
        self.get(glyph).map(|s| s.category)
    }

    /// Maps a physical key (case-insensitive) to its glyph.
    pub fn for_key(&self, key: char) -> Option<&SymbolInfo> {
        self.by_key.get(&key.to_ascii_lowercase())
    }

    /// Symbols of one keyboard row, left to right.
    pub fn row(&self, row: u8) -> impl Iterator<Item = &'static SymbolInfo> {
        SYMBOLS.iter().filter(move |s| s.row == row)
    }
}

pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn category_sizes() {
        let count = |c: Category| SYMBOLS.iter().filter(|s| s.category == c).count();
        assert_eq!(count(Consonant), 21);
        assert_eq!(count(Medial), 3);
        assert_eq!(count(Final), 13);
        assert_eq!(count(Tone), 4);
    }

    #[test]
    fn glyphs_keys_and_cells_are_unique() {
        let glyphs: HashSet<_> = SYMBOLS.iter().map(|s| s.glyph).collect();
        let keys: HashSet<_> = SYMBOLS.iter().map(|s| s.key).collect();
        let cells: HashSet<_> = SYMBOLS.iter().map(|s| (s.row, s.col)).collect();
        assert_eq!(glyphs.len(), SYMBOLS.len());
        assert_eq!(keys.len(), SYMBOLS.len());
        assert_eq!(cells.len(), SYMBOLS.len());
        assert!(SYMBOLS.iter().all(|s| s.row < GRID_ROWS));
    }

    #[test]
    fn lookups() {
        let cat = catalog();
        assert_eq!(cat.category('ㄧ'), Some(Medial));
        assert_eq!(cat.category('ㄤ'), Some(Final));
        assert_eq!(cat.category('x'), None);
        assert_eq!(cat.for_key('S').map(|s| s.glyph), Some('ㄋ'));
        assert_eq!(cat.for_key('6').map(|s| s.glyph), Some('ˊ'));
        let first_row: String = cat.row(0).map(|s| s.glyph).collect();
        assert_eq!(first_row, "ㄅㄉˇˋㄓˊ˙ㄚㄞㄢㄦ");
    }
}
