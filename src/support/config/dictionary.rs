use serde::de::DeserializeOwned;
use toml::{Table, Value};

use super::ConfigError;

/// A keyed table of configuration entries.
///
/// Keys reported in errors are fully scoped (`schnerr_sauer.nucleus_diameter`),
/// so a failure deep inside a model's coefficient table is easy to locate.
///
/// # Example
///
/// ```
/// use cavitation_models::support::config::Dictionary;
///
/// let dict = Dictionary::parse(r#"
///     p_sat = 2300.0
///
///     [kunz]
///     free_stream_velocity = 20.0
/// "#).unwrap();
///
/// let p_sat: f64 = dict.lookup("p_sat").unwrap();
/// assert_eq!(p_sat, 2300.0);
///
/// let kunz = dict.sub_dict("kunz").unwrap();
/// assert_eq!(kunz.lookup_or("condensation_coeff", 1.0).unwrap(), 1.0);
/// assert!(kunz.lookup::<f64>("free_stream_time").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    scope: String,
    table: Table,
}

impl Dictionary {
    /// Parses a TOML document into a top-level dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `text` is not valid TOML.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let table = text.parse::<Table>()?;
        Ok(Self::from_table(table))
    }

    /// Wraps an existing TOML table as a top-level dictionary.
    #[must_use]
    pub fn from_table(table: Table) -> Self {
        Self {
            scope: String::new(),
            table,
        }
    }

    /// Looks up a required entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEntry`] if `key` is absent, or
    /// [`ConfigError::InvalidEntry`] if it cannot be converted to `T`.
    pub fn lookup<T: DeserializeOwned>(&self, key: &str) -> Result<T, ConfigError> {
        match self.table.get(key) {
            Some(value) => self.convert(key, value.clone()),
            None => Err(ConfigError::MissingEntry {
                key: self.scoped(key),
            }),
        }
    }

    /// Looks up an optional entry, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEntry`] if the entry is present but
    /// cannot be converted to `T`. A present-but-wrong entry is never
    /// silently replaced by the default.
    pub fn lookup_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.table.get(key) {
            Some(value) => self.convert(key, value.clone()),
            None => Ok(default),
        }
    }

    /// Returns the nested table stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEntry`] if `key` is absent, or
    /// [`ConfigError::InvalidEntry`] if it is not a table.
    pub fn sub_dict(&self, key: &str) -> Result<Dictionary, ConfigError> {
        match self.table.get(key) {
            Some(Value::Table(table)) => Ok(Self {
                scope: self.scoped(key),
                table: table.clone(),
            }),
            Some(other) => Err(ConfigError::InvalidEntry {
                key: self.scoped(key),
                reason: format!("expected a table, found {}", other.type_str()),
            }),
            None => Err(ConfigError::MissingEntry {
                key: self.scoped(key),
            }),
        }
    }

    /// Deserializes the whole dictionary into `T`.
    ///
    /// Use this with `#[derive(Deserialize)]` coefficient structs; missing
    /// required fields and type mismatches are reported against this
    /// dictionary's scope.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEntry`] if deserialization fails.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        Value::Table(self.table.clone())
            .try_into()
            .map_err(|err: toml::de::Error| ConfigError::InvalidEntry {
                key: self.scope.clone(),
                reason: err.message().to_string(),
            })
    }

    fn convert<T: DeserializeOwned>(&self, key: &str, value: Value) -> Result<T, ConfigError> {
        value
            .try_into()
            .map_err(|err: toml::de::Error| ConfigError::InvalidEntry {
                key: self.scoped(key),
                reason: err.message().to_string(),
            })
    }

    fn scoped(&self, key: &str) -> String {
        if self.scope.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.scope)
        }
    }
}
