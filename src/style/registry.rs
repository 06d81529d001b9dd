//! Style registry.

use std::collections::HashMap;

use console::Style;

use super::error::StyleValidationError;
use super::value::StyleValue;

/// Prefix written in front of text whose style name isn't registered.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A registry of named styles.
///
/// Aliases are resolved lazily at apply time; call [`Styles::validate`] to
/// catch dangling or cyclic aliases up front.
#[derive(Debug, Clone, Default)]
pub struct Styles {
    entries: HashMap<String, StyleValue>,
}

impl Styles {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style or alias, returning the registry for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Follows aliases from `name` to a concrete style.
    ///
    /// Returns `None` for unknown names, dangling aliases and cycles.
    pub fn resolve(&self, name: &str) -> Option<&Style> {
        let mut current = name;
        // A chain longer than the registry must revisit a name.
        for _ in 0..=self.entries.len() {
            match self.entries.get(current)? {
                StyleValue::Concrete(style) => return Some(style),
                StyleValue::Alias(target) => current = target,
            }
        }
        None
    }

    /// Checks that every alias reaches a concrete style.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        let mut names: Vec<&String> = self.entries.keys().collect();
        names.sort();

        for name in names {
            let mut path = vec![name.clone()];
            let mut current = name;
            while let Some(StyleValue::Alias(target)) = self.entries.get(current) {
                if path.iter().any(|seen| seen == target) {
                    path.push(target.clone());
                    return Err(StyleValidationError::CycleDetected { path });
                }
                if !self.entries.contains_key(target) {
                    return Err(StyleValidationError::UnresolvedAlias {
                        from: current.clone(),
                        to: target.clone(),
                    });
                }
                path.push(target.clone());
                current = target;
            }
        }
        Ok(())
    }

    /// Applies the named style to `text`.
    ///
    /// With `use_color` off the text is returned untouched. Unknown names are
    /// flagged with [`MISSING_STYLE_INDICATOR`] either way.
    pub fn apply_with_mode(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.resolve(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Wraps `text` in `[name]...[/name]` markers instead of escape codes.
    pub fn apply_debug(&self, name: &str, text: &str) -> String {
        if self.resolve(name).is_some() {
            format!("[{name}]{text}[/{name}]")
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }
}
