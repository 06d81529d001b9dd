//! Named styles with alias layering.
//!
//! - [`StyleValue`]: A style that is either concrete or an alias
//! - [`Styles`]: A registry of named styles
//! - [`StyleValidationError`]: Errors from alias validation
//!
//! Palettes are written in layers: semantic names (`alert_high`, `nav_active`)
//! alias presentation names (`danger`, `selected`), which alias concrete
//! `console::Style` values.

mod error;
mod registry;
mod value;

pub use error::StyleValidationError;
pub use registry::{Styles, MISSING_STYLE_INDICATOR};
pub use value::StyleValue;
