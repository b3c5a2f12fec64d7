use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or querying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backing file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML.
    #[error("malformed configuration")]
    Parse(#[from] toml::de::Error),

    /// A required entry is absent.
    #[error("missing required entry `{key}`")]
    MissingEntry { key: String },

    /// An entry is present but has the wrong type or an invalid value.
    #[error("invalid entry `{key}`: {reason}")]
    InvalidEntry { key: String, reason: String },
}
