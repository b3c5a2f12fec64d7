//! Persisted model configuration.
//!
//! Model settings live in a TOML document. A typical document looks like:
//!
//! ```toml
//! model = "schnerr_sauer"
//! p_sat = 2300.0
//!
//! [schnerr_sauer]
//! nucleation_density = 1.6e13
//! nucleus_diameter = 2.0e-6
//! ```
//!
//! [`Dictionary`] wraps one TOML table and distinguishes required lookups
//! (fatal when the key is missing) from optional lookups (fall back to a
//! default). A [`DictionarySource`] is the backing store a model re-reads
//! when the host asks it to refresh its coefficients.
//!
//! All dimensioned values are SI.

mod dictionary;
mod error;
mod source;

pub use dictionary::Dictionary;
pub use error::ConfigError;
pub use source::{DictionarySource, TomlFile, TomlString};
