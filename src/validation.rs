//! Input validation for todo text.

/// Normalizes raw todo text.
///
/// Returns the trimmed text, or `None` when the input is absent, empty, or
/// whitespace only. The information separators U+001C..=U+001F count as
/// whitespace here, on top of Unicode `White_Space`.
pub fn normalize_text(text: Option<&str>) -> Option<String> {
    let trimmed = text?.trim_matches(is_blank);
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Converts a 1-based list position into an index.
pub fn position_to_index(position: usize, len: usize) -> Option<usize> {
    if position == 0 || position > len {
        return None;
    }
    Some(position - 1)
}
