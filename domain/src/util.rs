//! Shared utility functions.

/// Short single-line preview of user text for log lines.
///
/// Cuts at `max_chars` characters (never inside a UTF-8 sequence) and
/// appends `...` when something was dropped.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    match flat.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        assert_eq!(preview("hello", 50), "hello");
    }

    #[test]
    fn preview_cuts_and_marks() {
        assert_eq!(preview("hello world", 5), "hello...");
    }

    #[test]
    fn preview_multibyte() {
        assert_eq!(preview("あのね", 2), "あの...");
    }

    #[test]
    fn preview_flattens_newlines() {
        assert_eq!(preview("a\nb", 10), "a b");
    }
}
