use thiserror::Error;

use crate::support::{config::ConfigError, constraint::ConstraintError};

/// Errors that abort construction of a cavitation model.
///
/// These are startup errors: a host is expected to report them and stop.
/// Reloading an existing model never returns them; see
/// [`CavitationModel::read`](super::CavitationModel::read).
#[derive(Debug, Error)]
pub enum CavitationError {
    /// The configuration is unreadable, or a required entry is missing or malformed.
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// The configuration names a model that has not been registered.
    #[error("unknown cavitation model `{name}` (available: {})", available.join(", "))]
    UnknownModel {
        name: String,
        available: Vec<String>,
    },

    /// A coefficient is present but outside its physical range.
    #[error("invalid coefficient `{name}`")]
    InvalidCoefficient {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },
}
