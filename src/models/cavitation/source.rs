use std::convert::Infallible;

use twine_core::Model;

use crate::support::field::ScalarField;

use super::{CavitationModel, CavitationModelExt, RatePair};

/// The phase whose volume fraction equation receives the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPhase {
    Liquid,
    Vapor,
}

/// A source term linearized in the transported volume fraction.
///
/// The source is `su + sp·α`, with `su` treated explicitly and `sp`
/// implicitly. `sp` is never positive, which keeps the implicit part
/// diagonally dominant.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearizedSource {
    pub su: ScalarField,
    pub sp: ScalarField,
}

impl LinearizedSource {
    /// Builds the source for the phase whose production and destruction
    /// coefficients are `rates`.
    ///
    /// Production acts on `1 − α` and destruction on `α`, so
    /// `su = production` and `sp = −(production + destruction)`.
    #[must_use]
    pub fn from_rates(rates: &RatePair) -> Self {
        Self {
            su: rates.production.clone(),
            sp: -(&rates.production + &rates.destruction),
        }
    }

    /// Evaluates the net source for the volume fraction `alpha`.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` does not cover the same cells as the source.
    #[must_use]
    pub fn net(&self, alpha: &ScalarField) -> ScalarField {
        &self.su + &self.sp * alpha
    }
}

/// Adapts a cavitation model into a [`Model`] producing the volume fraction
/// source for either phase.
///
/// The adapter reads the model's cached coefficients, so the host calls
/// [`CavitationModel::correct`] first.
///
/// # Example
///
/// ```
/// use cavitation_models::models::cavitation::{
///     LinearizedSource, PhaseFractionSource, TargetPhase,
/// };
/// # use cavitation_models::models::cavitation::{Components, ModelRegistry};
/// # use cavitation_models::support::{
/// #     config::TomlString,
/// #     field::{ScalarField, Shared, VectorField},
/// #     phase::Phase,
/// # };
/// use twine_core::Model;
///
/// # let source = TomlString::new(r#"
/// #     model = "schnerr_sauer"
/// #     p_sat = 2300.0
/// #     [schnerr_sauer]
/// #     nucleation_density = 1.0e13
/// #     nucleus_diameter = 2.0e-6
/// # "#);
/// # let velocity = Shared::new("U", VectorField::uniform(1, [0.0; 3]));
/// # let flux = Shared::new("phi", ScalarField::uniform(1, 0.0));
/// # let pressure = Shared::new("p", ScalarField::uniform(1, 1000.0));
/// # let rho_liquid = Shared::new("rho.water", ScalarField::uniform(1, 1000.0));
/// # let rho_vapor = Shared::new("rho.vapour", ScalarField::uniform(1, 0.02));
/// # let water = Phase::new("water", ScalarField::uniform(1, 0.9));
/// # let vapour = Phase::new("vapour", ScalarField::uniform(1, 0.1));
/// # let components = Components {
/// #     source: &source,
/// #     velocity: &velocity,
/// #     flux: &flux,
/// #     pressure: &pressure,
/// #     rho_liquid: &rho_liquid,
/// #     rho_vapor: &rho_vapor,
/// #     alpha_liquid: &water,
/// #     alpha_vapor: &vapour,
/// # };
/// let model = ModelRegistry::standard().new_model(components).unwrap();
/// let adapter = PhaseFractionSource::new(&*model);
///
/// let LinearizedSource { su, sp } = adapter.call(&TargetPhase::Liquid).unwrap();
///
/// // Below saturation the liquid only loses volume.
/// assert_eq!(su[0], 0.0);
/// assert!(sp[0] < 0.0);
/// ```
#[derive(Debug)]
pub struct PhaseFractionSource<'m, M: ?Sized> {
    model: &'m M,
}

impl<'m, M: CavitationModel + ?Sized> PhaseFractionSource<'m, M> {
    #[must_use]
    pub fn new(model: &'m M) -> Self {
        Self { model }
    }
}

impl<M: CavitationModel + ?Sized> Model for PhaseFractionSource<'_, M> {
    type Input = TargetPhase;
    type Output = LinearizedSource;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let rates = match input {
            TargetPhase::Liquid => self.model.v_dot_alpha_w(),
            TargetPhase::Vapor => self.model.v_dot_alpha_v(),
        };
        Ok(LinearizedSource::from_rates(&rates))
    }
}
