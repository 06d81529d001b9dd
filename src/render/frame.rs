//! Frame composition: navigation bar, page body, action list.

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use super::renderer::Renderer;
use crate::controller::SessionState;
use crate::error::Result;
use crate::output::OutputMode;
use crate::page::{PageId, NAV_ITEMS};
use crate::theme::{AdaptiveTheme, ThemeMode};
use crate::views::{all_views, view_for, Action};

const BRAND: &str = "DisasterSafe Education";
const TAGLINE: &str = "Empowering Schools for a Safer Tomorrow";

#[derive(Serialize)]
struct NavEntry {
    page: PageId,
    label: &'static str,
    active: bool,
}

#[derive(Serialize)]
struct NavContext {
    items: Vec<NavEntry>,
    toggle_label: &'static str,
}

#[derive(Serialize)]
struct FrameContext<'a> {
    brand: &'static str,
    tagline: &'static str,
    page: PageId,
    theme: ThemeMode,
    width: usize,
    nav: Option<NavContext>,
    view_template: String,
    view: Value,
    actions: &'a [Action],
}

/// Renders whole frames for a session.
///
/// Holds one [`Renderer`] per theme mode; the session's mode picks which one
/// draws, so every page switches palette at once when the mode flips.
pub struct Frontend {
    light: Renderer,
    dark: Renderer,
    width: usize,
}

impl Frontend {
    /// Builds renderers for the built-in palettes.
    pub fn new(mode: OutputMode, width: usize) -> Result<Self> {
        Self::with_themes(&AdaptiveTheme::builtin(), mode, width)
    }

    /// Builds renderers for a custom light/dark pair.
    ///
    /// # Errors
    ///
    /// Fails when either palette has invalid aliases or a template does not
    /// compile.
    pub fn with_themes(themes: &AdaptiveTheme, mode: OutputMode, width: usize) -> Result<Self> {
        Ok(Self {
            light: build(themes, ThemeMode::Light, mode)?,
            dark: build(themes, ThemeMode::Dark, mode)?,
            width,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn renderer(&self, mode: ThemeMode) -> &Renderer {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Renders the active page, with the navigation bar when the page allows
    /// one.
    pub fn render(&self, state: &SessionState) -> Result<String> {
        let view = view_for(state.active_page);
        let nav = state.shows_navigation().then(|| NavContext {
            items: NAV_ITEMS
                .iter()
                .map(|item| NavEntry {
                    page: item.page,
                    label: item.label,
                    active: item.page == state.active_page,
                })
                .collect(),
            toggle_label: state.theme_mode.toggle_label(),
        });

        let ctx = FrameContext {
            brand: BRAND,
            tagline: TAGLINE,
            page: state.active_page,
            theme: state.theme_mode,
            width: self.width,
            nav,
            view_template: view.template_name(),
            view: view.data(),
            actions: view.actions(),
        };
        trace!(page = %state.active_page, theme = %state.theme_mode, "render frame");
        self.renderer(state.theme_mode).render("frame", &ctx)
    }
}

fn build(themes: &AdaptiveTheme, theme_mode: ThemeMode, mode: OutputMode) -> Result<Renderer> {
    let mut renderer = Renderer::with_output(themes.resolve(theme_mode), mode)?;
    renderer.add_template("frame", include_str!("../templates/frame.tmpl"))?;
    renderer.add_template("nav", include_str!("../templates/nav.tmpl"))?;
    for view in all_views() {
        renderer.add_template(&view.template_name(), view.template())?;
    }
    Ok(renderer)
}
