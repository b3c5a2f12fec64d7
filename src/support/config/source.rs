use std::{
    cell::RefCell,
    fmt, fs,
    path::PathBuf,
};

use super::{ConfigError, Dictionary};

/// A backing store that can be (re)loaded into a [`Dictionary`].
///
/// Models keep a reference to their source so that [`read`] can pick up
/// edits made while the simulation is running.
///
/// [`read`]: crate::models::cavitation::CavitationModel::read
pub trait DictionarySource: fmt::Debug {
    /// Loads the current contents of the store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the store cannot be read or parsed.
    fn load(&self) -> Result<Dictionary, ConfigError>;
}

/// A TOML file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TomlFile {
    path: PathBuf,
}

impl TomlFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DictionarySource for TomlFile {
    fn load(&self) -> Result<Dictionary, ConfigError> {
        let text = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        Dictionary::parse(&text)
    }
}

/// An in-memory TOML document the host can replace at any time.
///
/// Useful for embedding configuration in a host and for tests.
#[derive(Debug, Default)]
pub struct TomlString {
    text: RefCell<String>,
}

impl TomlString {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(text.into()),
        }
    }

    /// Replaces the document. The next [`DictionarySource::load`] sees the new text.
    pub fn replace(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = text.into();
    }
}

impl DictionarySource for TomlString {
    fn load(&self) -> Result<Dictionary, ConfigError> {
        Dictionary::parse(&self.text.borrow())
    }
}
