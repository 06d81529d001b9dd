//! Template rendering.
//!
//! - [`Renderer`]: One minijinja environment bound to one palette
//! - [`Frontend`]: A light and a dark renderer, composing full frames from
//!   the session state

mod filters;
mod frame;
mod renderer;

pub use frame::Frontend;
pub use renderer::Renderer;
