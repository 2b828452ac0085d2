use crate::error::WidgetError;

/// CJK Unified Ideographs block.
pub const CJK_UNIFIED: std::ops::RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';

pub fn is_cjk_ideograph(c: char) -> bool {
    CJK_UNIFIED.contains(&c)
}

/// Accepts exactly one CJK ideograph; surrounding whitespace is ignored.
pub fn validate_target(input: &str) -> Result<char, WidgetError> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_cjk_ideograph(c) => Ok(c),
        _ => Err(WidgetError::InvalidTarget {
            input: input.to_string(),
        }),
    }
}
