//! The navigation and theme controller.
//!
//! [`ViewController`] owns the [`SessionState`] for one session. It is the
//! only thing that mutates it, through two operations:
//!
//! - [`ViewController::navigate`]: switch the active page
//! - [`ViewController::toggle_theme`]: flip light/dark and persist the choice
//!
//! Views never see the controller itself. They get the [`Navigate`]
//! capability, which is all they may call back into.

use serde::Serialize;
use tracing::{debug, warn};

use crate::page::PageId;
use crate::storage::{PreferenceStore, THEME_KEY};
use crate::theme::{detect_theme_mode, ThemeMode};

/// What is on screen: one page, in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub active_page: PageId,
    pub theme_mode: ThemeMode,
}

impl SessionState {
    /// A fresh session on the landing page.
    pub fn new(theme_mode: ThemeMode) -> Self {
        Self {
            active_page: PageId::Welcome,
            theme_mode,
        }
    }

    pub fn shows_navigation(&self) -> bool {
        self.active_page.shows_navigation()
    }
}

/// The capability handed to views: request a page change.
pub trait Navigate {
    fn navigate(&mut self, target: PageId);
}

/// Picks the starting theme mode.
///
/// A persisted value wins. The detector is consulted only when nothing is
/// persisted, or when the store can't be read.
///
/// ```rust
/// use disastersafe::{resolve_initial_theme, MemoryStore, ThemeMode};
///
/// let store = MemoryStore::with_value("theme", "light");
/// assert_eq!(resolve_initial_theme(&store, || ThemeMode::Dark), ThemeMode::Light);
///
/// let empty = MemoryStore::new();
/// assert_eq!(resolve_initial_theme(&empty, || ThemeMode::Dark), ThemeMode::Dark);
/// ```
pub fn resolve_initial_theme<S, D>(store: &S, detect: D) -> ThemeMode
where
    S: PreferenceStore + ?Sized,
    D: FnOnce() -> ThemeMode,
{
    match store.load(THEME_KEY) {
        Ok(Some(saved)) => {
            debug!(saved = %saved, "using persisted theme");
            ThemeMode::from_persisted(&saved)
        }
        Ok(None) => detect(),
        Err(e) => {
            warn!(error = %e, "could not read theme preference, using system preference");
            detect()
        }
    }
}

/// Owns the session state and the store the theme is persisted to.
#[derive(Debug)]
pub struct ViewController<S: PreferenceStore> {
    state: SessionState,
    store: S,
    generation: u64,
}

impl<S: PreferenceStore> ViewController<S> {
    /// Starts a session, asking the process-wide detector for the ambient
    /// preference (see [`set_theme_detector`](crate::set_theme_detector)).
    pub fn new(store: S) -> Self {
        Self::with_detector(store, detect_theme_mode)
    }

    /// Starts a session with an explicit ambient-preference detector.
    ///
    /// The resolved mode is written back to the store straight away, so a
    /// fresh session leaves the key behind.
    pub fn with_detector<D: FnOnce() -> ThemeMode>(mut store: S, detect: D) -> Self {
        let theme_mode = resolve_initial_theme(&store, detect);
        persist(&mut store, theme_mode);
        debug!(theme = %theme_mode, "session started");
        Self {
            state: SessionState::new(theme_mode),
            store,
            generation: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Counts state changes, including ones that changed nothing.
    ///
    /// Front ends redraw whenever this moves.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Makes `target` the active page.
    pub fn navigate(&mut self, target: PageId) {
        debug!(from = %self.state.active_page, to = %target, "navigate");
        self.state.active_page = target;
        self.generation += 1;
    }

    /// Navigates by identifier. Unknown identifiers land on the welcome page.
    pub fn navigate_to(&mut self, id: &str) {
        let target = PageId::resolve(id);
        if PageId::parse(id).is_none() {
            debug!(id, "unknown page, falling back to {}", target);
        }
        self.navigate(target);
    }

    /// Flips the theme mode and persists the new value.
    ///
    /// The active page is left alone. A failed write is logged; the mode
    /// still changes for this session.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let next = self.state.theme_mode.toggled();
        self.state.theme_mode = next;
        persist(&mut self.store, next);
        self.generation += 1;
        debug!(theme = %next, "theme toggled");
        next
    }

    /// Ends the session, handing back the store.
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: PreferenceStore> Navigate for ViewController<S> {
    fn navigate(&mut self, target: PageId) {
        ViewController::navigate(self, target);
    }
}

fn persist<S: PreferenceStore + ?Sized>(store: &mut S, mode: ThemeMode) {
    if let Err(e) = store.save(THEME_KEY, mode.as_str()) {
        warn!(error = %e, theme = %mode, "could not persist theme preference");
    }
}
