use thiserror::Error;

/// A palette whose aliases don't resolve to concrete styles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleValidationError {
    /// An alias names a style that isn't in the palette.
    #[error("style '{from}' aliases non-existent style '{to}'")]
    UnresolvedAlias { from: String, to: String },
    /// Following aliases leads back to a name already visited.
    #[error("cycle detected in style aliases: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}
