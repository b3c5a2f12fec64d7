//! Cavitation mass transfer models.
//!
//! A cavitation model supplies the condensation and vaporization rates that
//! couple the liquid and vapor phases of a two-phase flow solver. Each model
//! implements [`CavitationModel`], which yields mass transfer coefficients;
//! the volumetric coefficients used by the phase-fraction and pressure
//! equations are derived from those in [`CavitationModelExt`].
//!
//! # Bundled models
//!
//! - [`Kunz`]: free-stream scaled, with a quadratic condensation term
//! - [`Merkle`]: free-stream scaled, linear in the pressure deficit
//! - [`SchnerrSauer`]: Rayleigh bubble dynamics with a fixed nucleation density
//!
//! Models are built by name through a [`ModelRegistry`], from a TOML
//! configuration of the form
//!
//! ```toml
//! model = "merkle"
//! p_sat = 2300.0
//!
//! [merkle]
//! free_stream_velocity = 10.0
//! free_stream_time = 0.01
//! condensation_coeff = 1.0
//! vaporization_coeff = 1.0
//! ```
//!
//! # Rate pairs
//!
//! Every coefficient is returned as a [`RatePair`] of non-negative fields.
//! For the phase-fraction formulation, `production` multiplies the
//! complement `1 − α` and `destruction` multiplies `α`; for the pressure
//! formulation both multiply the pressure deficit.

mod coeffs;
mod components;
mod error;
mod kunz;
mod merkle;
mod model;
pub mod rates;
mod registry;
mod schnerr_sauer;
mod source;

#[cfg(test)]
mod test_support;

pub use coeffs::FreeStreamCoeffs;
pub use components::Components;
pub use error::CavitationError;
pub use kunz::Kunz;
pub use merkle::Merkle;
pub use model::{CavitationBase, CavitationModel, CavitationModelExt, P_SAT_KEY};
pub use rates::{Component, RateError, RatePair};
pub use registry::{Constructor, MODEL_KEY, ModelRegistry};
pub use schnerr_sauer::{SchnerrSauer, SchnerrSauerCoeffs};
pub use source::{LinearizedSource, PhaseFractionSource, TargetPhase};
