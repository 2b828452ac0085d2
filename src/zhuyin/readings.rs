// Zhuyin readings for common characters, used to check practice answers.
// First tone is written without a mark, neutral tone with ˙.

pub static READINGS: &[(char, &str)] = &[
    ('你', "ㄋㄧˇ"), ('好', "ㄏㄠˇ"), ('猫', "ㄇㄠ"), ('学', "ㄒㄩㄝˊ"), ('汉', "ㄏㄢˋ"), ('字', "ㄗˋ"),
    ('黑', "ㄏㄟ"), ('鱼', "ㄩˊ"), ('火', "ㄏㄨㄛˇ"), ('山', "ㄕㄢ"), ('水', "ㄕㄨㄟˇ"), ('月', "ㄩㄝˋ"),
    ('日', "ㄖˋ"), ('天', "ㄊㄧㄢ"), ('人', "ㄖㄣˊ"), ('口', "ㄎㄡˇ"), ('中', "ㄓㄨㄥ"), ('国', "ㄍㄨㄛˊ"),
    ('大', "ㄉㄚˋ"), ('小', "ㄒㄧㄠˇ"), ('上', "ㄕㄤˋ"), ('下', "ㄒㄧㄚˋ"), ('左', "ㄗㄨㄛˇ"), ('右', "ㄧㄡˋ"),
    ('心', "ㄒㄧㄣ"), ('手', "ㄕㄡˇ"), ('目', "ㄇㄨˋ"), ('耳', "ㄦˇ"), ('足', "ㄗㄨˊ"), ('食', "ㄕˊ"),
    ('米', "ㄇㄧˇ"), ('花', "ㄏㄨㄚ"), ('林', "ㄌㄧㄣˊ"), ('电', "ㄉㄧㄢˋ"), ('雨', "ㄩˇ"), ('风', "ㄈㄥ"),
    ('娘', "ㄋㄧㄤˊ"), ('的', "˙ㄉㄜ"), ('我', "ㄨㄛˇ"), ('是', "ㄕˋ"), ('不', "ㄅㄨˋ"), ('了', "˙ㄌㄜ"),
];

pub fn reading(hanzi: char) -> Option<&'static str> {
    READINGS.iter().find(|(h, _)| *h == hanzi).map(|(_, r)| *r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zhuyin::composer::Composition;
    use std::collections::HashSet;

    #[test]
    fn entries_are_unique() {
        let mut seen = HashSet::new();
        for (h, _) in READINGS {
            assert!(seen.insert(*h), "duplicate hanzi '{}'", h);
        }
    }

    #[test]
    fn every_reading_is_composable() {
        // Neutral-tone readings put ˙ first by convention; compare as composed.
        for (h, r) in READINGS {
            let composed = Composition::from_display(r);
            assert!(!composed.is_empty(), "empty reading for '{}'", h);
            assert_eq!(
                composed.glyphs().count(),
                r.chars().count(),
                "reading '{}' for '{}' repeats a category",
                r,
                h
            );
        }
    }
}
