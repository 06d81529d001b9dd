//! Where the theme choice survives between sessions.
//!
//! [`PreferenceStore`] is a two-method key-value seam. The controller only
//! ever reads and writes one key, [`THEME_KEY`].
//!
//! - [`MemoryStore`]: In-process map, for tests and ephemeral sessions
//! - [`FileStore`]: A JSON object on disk

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// The key the theme mode is persisted under.
pub const THEME_KEY: &str = "theme";

/// A small key-value store for user preferences.
pub trait PreferenceStore {
    /// Reads the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing what was there.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}
