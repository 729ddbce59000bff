//! Shared formatting utilities for UI components.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a number with thousand separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format an area in km², keeping two decimals only for fractional values.
pub fn format_area(area: f64) -> String {
    if !area.is_finite() || area < 0.0 {
        return "Unknown".to_string();
    }
    let whole = area.trunc();
    let hundredths = ((area - whole) * 100.0).round() as u64;
    if hundredths == 0 {
        format_number(whole as u64)
    } else if hundredths >= 100 {
        format_number(whole as u64 + 1)
    } else {
        format!("{}.{:02}", format_number(whole as u64), hundredths)
    }
}

/// Pad or truncate `text` to exactly `width` terminal columns.
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        let mut padded = text.to_string();
        padded.push_str(&" ".repeat(width - text.width()));
        return padded;
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    used += 1;
    result.push_str(&" ".repeat(width.saturating_sub(used)));
    result
}
