use unicode_categories::UnicodeCategories;

/// Removes Unicode punctuation and any character listed in `extra_symbols`.
///
/// Whitespace is preserved so word boundaries between Latin words survive.
///
/// ```rust
/// use canonical::strip_punctuation;
///
/// assert_eq!(strip_punctuation("北京市，朝阳区！", ""), "北京市朝阳区");
/// assert_eq!(strip_punctuation("a$b", "$"), "ab");
/// ```
pub fn strip_punctuation(text: &str, extra_symbols: &str) -> String {
    text.chars()
        .filter(|&ch| !is_stripped(ch, extra_symbols))
        .collect()
}

#[inline]
fn is_stripped(ch: char, extra_symbols: &str) -> bool {
    ch.is_punctuation() || extra_symbols.contains(ch)
}
