//! # DisasterSafe - disaster-preparedness training, in the terminal
//!
//! A terminal edition of the DisasterSafe Education demo: static pages about
//! disaster preparedness for Indian schools, rendered as styled text and
//! driven by a small navigation and theme controller.
//!
//! ## Core Concepts
//!
//! - [`ViewController`]: Owns the [`SessionState`] (active page + theme mode)
//! - [`PageId`]: The closed set of pages the controller can show
//! - [`PreferenceStore`]: Where the light/dark choice is persisted
//! - [`ThemeMode`]: Light or dark presentation
//! - [`Frontend`]: Turns the session state into a rendered frame
//!
//! ## Quick Start
//!
//! ```rust
//! use disastersafe::{Frontend, MemoryStore, OutputMode, PageId, ThemeMode, ViewController};
//!
//! let mut controller = ViewController::with_detector(MemoryStore::new(), || ThemeMode::Dark);
//! assert_eq!(controller.state().active_page, PageId::Welcome);
//!
//! controller.navigate(PageId::Dashboard);
//! controller.toggle_theme();
//!
//! let frontend = Frontend::new(OutputMode::Text, 78).unwrap();
//! let frame = frontend.render(controller.state()).unwrap();
//! assert!(frame.contains("Admin Dashboard"));
//! ```
//!
//! ## Theme Persistence
//!
//! The theme choice is kept under a single key (`"theme"`). On start-up a
//! persisted value wins; otherwise the OS appearance is consulted through a
//! replaceable detector (see [`set_theme_detector`]).

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod output;
pub mod page;
pub mod render;
pub mod storage;
pub mod style;
pub mod theme;
mod util;
pub mod views;

pub use config::Config;
pub use controller::{resolve_initial_theme, Navigate, SessionState, ViewController};
pub use error::{Error, Result};
pub use logging::{init_logging, Verbosity};
pub use output::OutputMode;
pub use page::{NavItem, PageId, NAV_ITEMS};
pub use render::{Frontend, Renderer};
pub use storage::{FileStore, MemoryStore, PreferenceStore, THEME_KEY};
pub use style::{StyleValidationError, StyleValue, Styles};
pub use theme::{detect_theme_mode, set_theme_detector, AdaptiveTheme, Theme, ThemeMode};
pub use util::{hex_to_rgb, rgb_to_ansi256, truncate_to_width};
pub use views::{view_for, Action, View};
