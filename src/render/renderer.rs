//! Pre-compiled template renderer.

use minijinja::Environment;
use serde::Serialize;

use super::filters::register_filters;
use crate::error::Result;
use crate::output::OutputMode;
use crate::theme::Theme;

/// A renderer with pre-registered templates, bound to one palette.
///
/// # Example
///
/// ```rust
/// use disastersafe::{OutputMode, Renderer, Theme};
/// use console::Style;
/// use serde::Serialize;
///
/// let theme = Theme::new().add("title", Style::new().bold());
/// let mut renderer = Renderer::with_output(&theme, OutputMode::Text).unwrap();
/// renderer.add_template("header", r#"{{ title | style("title") }}"#).unwrap();
///
/// #[derive(Serialize)]
/// struct Header { title: String }
///
/// let out = renderer.render("header", &Header { title: "Drills".into() }).unwrap();
/// assert_eq!(out, "Drills");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer with automatic color detection.
    ///
    /// # Errors
    ///
    /// Returns an error if any style aliases are invalid (dangling or cyclic).
    pub fn new(theme: &Theme) -> Result<Self> {
        Self::with_output(theme, OutputMode::Auto)
    }

    /// Creates a renderer with an explicit output mode.
    ///
    /// # Errors
    ///
    /// Returns an error if any style aliases are invalid (dangling or cyclic).
    pub fn with_output(theme: &Theme, mode: OutputMode) -> Result<Self> {
        theme.validate()?;

        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env, theme, mode);
        Ok(Self { env })
    }

    /// Registers a named template, compiling it immediately.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::Style;
    use serde_json::json;

    #[test]
    fn test_renderer_add_and_render() {
        let theme = Theme::new().add("ok", Style::new().green());
        let mut renderer = Renderer::with_output(&theme, OutputMode::Text).unwrap();
        renderer
            .add_template("test", r#"{{ message | style("ok") }}"#)
            .unwrap();

        let output = renderer.render("test", &json!({ "message": "hi" })).unwrap();
        assert_eq!(output, "hi");
    }

    #[test]
    fn test_renderer_unknown_template_error() {
        let renderer = Renderer::with_output(&Theme::new(), OutputMode::Text).unwrap();
        assert!(renderer.render("nonexistent", &json!({})).is_err());
    }

    #[test]
    fn test_renderer_syntax_error_on_add() {
        let mut renderer = Renderer::with_output(&Theme::new(), OutputMode::Text).unwrap();
        assert!(renderer.add_template("bad", "{% if %}").is_err());
    }

    #[test]
    fn test_renderer_fails_with_invalid_theme() {
        let theme = Theme::new().add("orphan", "missing");
        assert!(Renderer::new(&theme).is_err());
    }

    #[test]
    fn test_term_mode_emits_color() {
        let theme = Theme::new().add("alert", Style::new().red());
        let mut renderer = Renderer::with_output(&theme, OutputMode::Term).unwrap();
        renderer
            .add_template("t", r#"{{ "Flood" | style("alert") }}"#)
            .unwrap();
        assert!(renderer.render("t", &json!({})).unwrap().contains("\x1b[31"));
    }

    #[test]
    fn test_debug_mode_markers() {
        let theme = Theme::new().add("alert", Style::new().red());
        let mut renderer = Renderer::with_output(&theme, OutputMode::TermDebug).unwrap();
        renderer
            .add_template("t", r#"{{ "Flood" | style("alert") }}"#)
            .unwrap();
        assert_eq!(renderer.render("t", &json!({})).unwrap(), "[alert]Flood[/alert]");
    }

    #[test]
    fn test_layout_filters() {
        let mut renderer = Renderer::with_output(&Theme::new(), OutputMode::Text).unwrap();
        renderer
            .add_template(
                "t",
                r#"[{{ "ab" | pad(4) }}][{{ "abcdef" | clip(4) }}][{{ 50 | bar(4) }}][{{ 3 | rule }}]"#,
            )
            .unwrap();
        assert_eq!(
            renderer.render("t", &json!({})).unwrap(),
            "[ab  ][abc…][██░░][───]"
        );
    }

    #[test]
    fn test_clip_negative_width_is_zero() {
        let mut renderer = Renderer::with_output(&Theme::new(), OutputMode::Text).unwrap();
        renderer
            .add_template("t", r#"{{ "abc" | clip(-3) }}"#)
            .unwrap();
        assert_eq!(renderer.render("t", &json!({})).unwrap(), "…");
    }
}
