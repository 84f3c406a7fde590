//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Left-align `s` on `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

/// Right-align `s` on `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{s}", " ".repeat(fill))
}

/// Group digits by thousands: 1234567 → "1,234,567".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage of `part` over `total`, 100 when `total` is 0.
pub fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    part as f64 * 100.0 / total as f64
}

/// "1 frame" / "3 frames"
pub fn frames_label(n: u64) -> String {
    if n == 1 {
        "1 frame".to_string()
    } else {
        format!("{} frames", group_thousands(n))
    }
}

/// Full-width separator line built from the configured char.
pub fn separator(ch: &str, width: usize) -> String {
    let ch = ch.chars().next().unwrap_or('-');
    std::iter::repeat_n(ch, width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn percent_handles_zero_total() {
        assert_eq!(percent(0, 0), 100.0);
        assert_eq!(percent(1, 4), 25.0);
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("ab", 4), "  ab");
        assert_eq!(pad_left("abcdef", 4), "abcdef");
    }

    #[test]
    fn labels_and_separators() {
        assert_eq!(frames_label(1), "1 frame");
        assert_eq!(frames_label(2500), "2,500 frames");
        assert_eq!(separator("=", 3), "===");
        assert_eq!(separator("", 2), "--");
    }
}
