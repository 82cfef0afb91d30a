use unicode_width::UnicodeWidthChar;

/// Truncates to `max_width` terminal columns, appending an ellipsis when
/// anything was cut. Width-aware so wide glyphs do not overflow table cells.
pub fn truncate(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let mut width = 0;
    let mut cut = None;
    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            cut = Some(i);
            break;
        }
        width += w;
    }

    match cut {
        None => text.to_string(),
        Some(_) => {
            // Re-scan leaving room for the ellipsis column.
            let mut width = 0;
            let mut end = 0;
            for (i, c) in text.char_indices() {
                let w = c.width().unwrap_or(0);
                if width + w > max_width.saturating_sub(1) {
                    break;
                }
                width += w;
                end = i + c.len_utf8();
            }
            format!("{}…", &text[..end])
        }
    }
}

/// Placeholder shown for an empty user-entered string.
pub fn or_placeholder(text: &str, placeholder: &'static str) -> String {
    if text.is_empty() {
        placeholder.to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("abcdef", 4), "abc…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each ideograph is two columns wide.
        assert_eq!(truncate("试卷管理", 4), "试…");
        assert_eq!(truncate("试卷", 4), "试卷");
    }

    #[test]
    fn test_truncate_zero_width_budget() {
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder("", "(empty)"), "(empty)");
        assert_eq!(or_placeholder("x", "(empty)"), "x");
    }
}
