//! Formatting utilities used for CLI and report outputs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render an hour amount exactly as entered, always with a decimal
/// point: `40.0`, `5.5`, `87.625`, `-12.75`.
///
/// Sums of decimal hours pick up binary noise (`0.1 + 0.2`), so the value
/// is snapped to micro-hours before printing.
pub fn hours2readable(hours: f64) -> String {
    let snapped = (hours * 1_000_000.0).round() / 1_000_000.0;
    if snapped == 0.0 {
        return "0.0".to_string();
    }

    let mut s = snapped.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Pad `s` on the right to `width` display columns; never truncates.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

/// Truncate `s` to `width` display columns (marking the cut with `…`)
/// and pad it on the right so every row lines up.
pub fn fit_width(s: &str, width: usize) -> String {
    let mut out = String::new();

    if s.width() <= width {
        out.push_str(s);
    } else {
        let mut used = 0;
        for ch in s.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w + 1 > width {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push('…');
    }

    let pad = width.saturating_sub(out.width());
    out.push_str(&" ".repeat(pad));
    out
}
