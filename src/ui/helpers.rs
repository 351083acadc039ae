//! Small formatting helpers shared by the renderers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Group the digits of a non-negative integer by thousands.
///
/// Inputs:
/// - `digits`: ASCII digit string without sign.
///
/// Output:
/// - Digits with `,` inserted every three places from the right.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// What: Format an integer with thousands separators (e.g., `53,771,300`).
#[must_use]
pub fn format_thousands(n: u64) -> String {
    group_digits(&n.to_string())
}

/// What: Format an area in km² with thousands separators and at most three decimals.
///
/// Inputs:
/// - `area`: Area value; negative or non-finite values render as `0`.
///
/// Output:
/// - e.g. `580,367` or `0.44`; trailing fractional zeros are dropped.
#[must_use]
pub fn format_area(area: f64) -> String {
    if !area.is_finite() || area <= 0.0 {
        return "0".to_string();
    }
    let fixed = format!("{area:.3}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        group_digits(int_part)
    } else {
        format!("{}.{frac}", group_digits(int_part))
    }
}

/// What: Truncate text to a display width, appending `…` when cut.
///
/// Inputs:
/// - `s`: Text to fit.
/// - `max`: Maximum display width in terminal cells.
///
/// Output:
/// - The original text when it fits; otherwise a prefix plus `…` within `max` cells.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
