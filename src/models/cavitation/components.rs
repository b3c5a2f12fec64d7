use crate::support::{
    config::DictionarySource,
    field::{ScalarField, Shared, VectorField},
    phase::PhaseFraction,
};

/// The host-owned inputs every cavitation model is constructed from.
///
/// All members are borrowed. The host creates its fields first, builds a
/// model from them, and drops the model before the fields; the lifetime
/// `'a` makes that ordering a compile-time guarantee.
///
/// `pressure` is the static pressure field the correlations compare against
/// the saturation pressure. `rho_liquid` and `rho_vapor` must be strictly
/// positive everywhere; models divide by them without checking. `velocity` and `flux` are part of the contract
/// for correlations that need them; the bundled ones do not.
#[derive(Debug, Clone, Copy)]
pub struct Components<'a> {
    /// Backing store for the model configuration, re-read by `read()`.
    pub source: &'a dyn DictionarySource,
    pub velocity: &'a Shared<VectorField>,
    /// Face volumetric flux.
    pub flux: &'a Shared<ScalarField>,
    pub pressure: &'a Shared<ScalarField>,
    pub rho_liquid: &'a Shared<ScalarField>,
    pub rho_vapor: &'a Shared<ScalarField>,
    pub alpha_liquid: &'a dyn PhaseFraction,
    pub alpha_vapor: &'a dyn PhaseFraction,
}
