//! Formatting utilities used for CLI outputs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` so that it occupies at most `width` terminal columns, marking the
/// cut with `…`.
pub fn fit_width(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Left-align `s` in `width` terminal columns (wide characters count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let fitted = fit_width(s, width);
    let pad = width.saturating_sub(UnicodeWidthStr::width(fitted.as_str()));
    format!("{}{}", fitted, " ".repeat(pad))
}
