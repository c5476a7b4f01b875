//! Canonical comparison form for recited text.

/// Whether `c` is an Arabic mark dropped before comparison.
///
/// Covers the harakat/tanwin block (U+064B..=U+065F), the superscript alef
/// (U+0670) and alef wasla (U+0671).
fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{0671}')
}

/// Normalize text for comparison.
///
/// Strips Arabic diacritics, collapses whitespace runs to a single space,
/// trims both ends and lower-cases the result.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.chars().filter(|&c| !is_diacritic(c)).collect();
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
