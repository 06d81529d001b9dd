//! Built-in light and dark palettes.
//!
//! Both palettes define the same visual names with different colors; the
//! semantic names templates use are aliases shared by both.

use console::Style;

use super::theme::Theme;
use crate::util::{hex_to_rgb, rgb_to_ansi256};

/// Every name templates may pass to the `style` filter.
pub const SEMANTIC_STYLES: &[&str] = &[
    "title",
    "section",
    "nav_brand",
    "nav_item",
    "nav_active",
    "live_badge",
    "toggle",
    "action_key",
    "link",
    "number",
    "quote",
    "badge",
    "progress",
    "progress_track",
    "alert_high",
    "alert_medium",
    "alert_low",
    "difficulty_beginner",
    "difficulty_intermediate",
    "difficulty_advanced",
    "level_excellent",
    "level_good",
    "level_needs_improvement",
];

fn hex(code: &str) -> Style {
    match hex_to_rgb(code) {
        Some(rgb) => Style::new().color256(rgb_to_ansi256(rgb)),
        None => Style::new(),
    }
}

fn semantic(theme: Theme) -> Theme {
    theme
        .add("title", "brand")
        .add("section", "heading")
        .add("nav_brand", "brand")
        .add("nav_item", "plain")
        .add("nav_active", "selected")
        .add("live_badge", "accent")
        .add("toggle", "muted")
        .add("action_key", "accent")
        .add("link", "info")
        .add("number", "accent")
        .add("badge", "info")
        .add("progress", "success")
        .add("progress_track", "muted")
        .add("alert_high", "danger")
        .add("alert_medium", "warning")
        .add("alert_low", "info")
        .add("difficulty_beginner", "success")
        .add("difficulty_intermediate", "warning")
        .add("difficulty_advanced", "danger")
        // Preparedness levels keep the dashboard chart colors in both modes.
        .add("level_excellent", hex("#16a34a").bold())
        .add("level_good", hex("#3b82f6").bold())
        .add("level_needs_improvement", hex("#f59e0b").bold())
}

/// The light palette.
pub fn light() -> Theme {
    semantic(
        Theme::new()
            .add("plain", Style::new())
            .add("heading", Style::new().bold())
            .add("muted", Style::new().dim())
            .add("quote", Style::new().italic())
            .add("brand", hex("#1d4ed8").bold())
            .add("highlight", hex("#ca8a04").bold())
            .add("accent", hex("#ea580c").bold())
            .add("info", hex("#2563eb"))
            .add("success", hex("#16a34a"))
            .add("warning", hex("#d97706"))
            .add("danger", hex("#dc2626").bold())
            .add("selected", Style::new().white().on_blue().bold()),
    )
}

/// The dark palette.
pub fn dark() -> Theme {
    semantic(
        Theme::new()
            .add("plain", Style::new())
            .add("heading", Style::new().bold().bright())
            .add("muted", Style::new().dim())
            .add("quote", Style::new().italic())
            .add("brand", hex("#60a5fa").bold())
            .add("highlight", hex("#fde047").bold())
            .add("accent", hex("#fb923c").bold())
            .add("info", hex("#93c5fd"))
            .add("success", hex("#4ade80"))
            .add("warning", hex("#fbbf24"))
            .add("danger", hex("#f87171").bold())
            .add("selected", Style::new().black().on_color256(111).bold()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_validate() {
        assert!(light().validate().is_ok());
        assert!(dark().validate().is_ok());
    }

    #[test]
    fn test_palettes_cover_semantic_names() {
        for theme in [light(), dark()] {
            for name in SEMANTIC_STYLES {
                assert!(theme.styles().resolve(name).is_some(), "missing {name}");
            }
            assert!(theme.styles().has("highlight"));
        }
    }

    #[test]
    fn test_palettes_differ() {
        let l = light().styles().apply_with_mode("brand", "x", true);
        let d = dark().styles().apply_with_mode("brand", "x", true);
        assert_ne!(l, d);
    }
}
