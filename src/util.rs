//! Utility functions for text width and color conversion.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use disastersafe::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Parses a `#rrggbb` color. The leading `#` is optional.
///
/// ```rust
/// use disastersafe::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("#16a34a"), Some((0x16, 0xa3, 0x4a)));
/// assert_eq!(hex_to_rgb("blue"), None);
/// ```
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Truncates a string to fit within a display width, ending with `…` when cut.
///
/// Widths are measured in terminal columns, so wide characters count double.
///
/// ```rust
/// use disastersafe::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Cyclone Warning", 20), "Cyclone Warning");
/// assert_eq!(truncate_to_width("Cyclone Warning", 8), "Cyclone…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Pads `s` with spaces on the right to exactly `width` columns, truncating
/// when it is wider.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let fitted = truncate_to_width(s, width);
    let fill = width.saturating_sub(fitted.width());
    format!("{}{}", fitted, " ".repeat(fill))
}

/// Draws a horizontal bar for a percentage, `width` cells wide.
///
/// Values above 100 are clamped.
pub fn percent_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_dashboard_green() {
        let green = hex_to_rgb("#16a34a").unwrap();
        assert_eq!(rgb_to_ansi256(green), 16 + 6 * 3 + 1);
    }

    #[test]
    fn test_hex_to_rgb_rejects_bad_input() {
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#gg0000"), None);
        assert_eq!(hex_to_rgb("3b82f6"), Some((0x3b, 0x82, 0xf6)));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
        assert_eq!(truncate_to_width("12345", 5), "12345");
        assert_eq!(truncate_to_width("Hello", 0), "…");
        assert_eq!(truncate_to_width("", 3), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char takes two columns.
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abc…");
    }

    #[test]
    fn test_percent_bar() {
        assert_eq!(percent_bar(0, 4), "░░░░");
        assert_eq!(percent_bar(50, 4), "██░░");
        assert_eq!(percent_bar(100, 4), "████");
        assert_eq!(percent_bar(250, 4), "████");
    }
}
