use std::{cell::Ref, error::Error, fmt};

use log::{debug, warn};
use uom::si::{f64::Pressure, pressure::pascal};

use crate::support::{
    config::Dictionary,
    constraint::{Constrained, StrictlyPositive},
    field::ScalarField,
};

use super::{CavitationError, Components, RatePair, rates};

/// Configuration key holding the saturation pressure, in Pa.
pub const P_SAT_KEY: &str = "p_sat";

/// State shared by every cavitation model.
///
/// Holds the saturation pressure and the borrowed host fields. Concrete
/// models embed a `CavitationBase` and expose it through
/// [`CavitationModel::base`]; the derived rates in [`CavitationModelExt`]
/// read densities from here.
#[derive(Debug)]
pub struct CavitationBase<'a> {
    p_sat: Pressure,
    components: Components<'a>,
}

impl<'a> CavitationBase<'a> {
    /// Reads the saturation pressure from `dict`.
    ///
    /// No field is read, so a configuration error surfaces before the model
    /// observes any host state.
    ///
    /// # Errors
    ///
    /// Returns [`CavitationError`] if `p_sat` is missing, not a number, or
    /// not strictly positive.
    pub fn new(dict: &Dictionary, components: Components<'a>) -> Result<Self, CavitationError> {
        let p_sat = read_p_sat(dict)?;
        Ok(Self { p_sat, components })
    }

    #[must_use]
    pub fn p_sat(&self) -> Pressure {
        self.p_sat
    }

    /// Borrows the current pressure field.
    pub fn pressure(&self) -> Ref<'a, ScalarField> {
        self.components.pressure.get()
    }

    /// Borrows the current liquid density field.
    pub fn rho_liquid(&self) -> Ref<'a, ScalarField> {
        self.components.rho_liquid.get()
    }

    /// Borrows the current vapor density field.
    pub fn rho_vapor(&self) -> Ref<'a, ScalarField> {
        self.components.rho_vapor.get()
    }

    /// Borrows the current liquid volume fraction.
    pub fn alpha_liquid(&self) -> Ref<'a, ScalarField> {
        self.components.alpha_liquid.alpha()
    }

    /// Returns the liquid volume fraction clamped to `[0, 1]`.
    #[must_use]
    pub fn limited_alpha_liquid(&self) -> ScalarField {
        self.alpha_liquid().clamp(0.0, 1.0)
    }

    /// Reloads the saturation pressure and the coefficient table named `model`.
    ///
    /// `parse` receives the model's table. On success the new saturation
    /// pressure is stored and the parsed coefficients are returned. On any
    /// failure a warning is logged, nothing is changed, and `None` is returned.
    pub fn reload<C>(
        &mut self,
        model: &str,
        parse: impl FnOnce(&Dictionary) -> Result<C, CavitationError>,
    ) -> Option<C> {
        let reloaded = self
            .components
            .source
            .load()
            .map_err(CavitationError::from)
            .and_then(|dict| {
                let p_sat = read_p_sat(&dict)?;
                let coeffs = parse(&dict.sub_dict(model)?)?;
                Ok((p_sat, coeffs))
            });

        match reloaded {
            Ok((p_sat, coeffs)) => {
                self.p_sat = p_sat;
                debug!(
                    "{model}: reloaded coefficients, p_sat = {} Pa",
                    p_sat.get::<pascal>()
                );
                Some(coeffs)
            }
            Err(err) => {
                warn!(
                    "{model}: keeping previous coefficients, reload failed: {}",
                    ErrorChain(&err)
                );
                None
            }
        }
    }
}

fn read_p_sat(dict: &Dictionary) -> Result<Pressure, CavitationError> {
    let p_sat = Pressure::new::<pascal>(dict.lookup(P_SAT_KEY)?);
    StrictlyPositive::new(p_sat)
        .map(Constrained::into_inner)
        .map_err(|source| CavitationError::InvalidCoefficient {
            name: P_SAT_KEY,
            source,
        })
}

/// Formats an error followed by each of its sources.
struct ErrorChain<'e>(&'e dyn Error);

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(err) = source {
            write!(f, ": {err}")?;
            source = err.source();
        }
        Ok(())
    }
}

/// The contract every cavitation model fulfils.
///
/// A model supplies mass transfer coefficients; volumetric rates are derived
/// from them once, in [`CavitationModelExt`], for every model.
///
/// # Rate conventions
///
/// Both accessors return a [`RatePair`] of non-negative coefficients over the
/// full domain of the phase fields. Returning a negative component or a
/// field of the wrong length breaks the contract: the derived rates do not
/// check, and downstream equations become meaningless.
/// [`RatePair::validate`] is available to test implementations.
pub trait CavitationModel: fmt::Debug {
    /// Returns the tag this model is registered under.
    fn name(&self) -> &'static str;

    /// Returns the shared state (saturation pressure and host fields).
    fn base(&self) -> &CavitationBase<'_>;

    /// Mass condensation and vaporization coefficients for the phase-fraction formulation.
    ///
    /// `production` multiplies `(1 − αw)` and `destruction` multiplies `αw`,
    /// where `αw` is the liquid volume fraction.
    fn m_dot_alpha_w(&self) -> RatePair;

    /// Mass condensation and vaporization coefficients for the pressure formulation.
    ///
    /// Both coefficients multiply the pressure deficit `p − pSat`.
    /// `production` is non-zero only where `p ≥ pSat` and `destruction` only
    /// where `p < pSat`; the consuming equation applies the sign.
    fn m_dot_p(&self) -> RatePair;

    /// Recomputes the cached coefficients from the current host fields.
    ///
    /// Called once per outer iteration, before any rate accessor.
    ///
    /// # Panics
    ///
    /// Panics if the host holds a mutable borrow of one of the fields.
    fn correct(&mut self);

    /// Reloads the saturation pressure and coefficients from the configuration source.
    ///
    /// Returns `false`, leaving the model unchanged, if the source cannot be
    /// read or the configuration is incomplete or invalid. New coefficients
    /// take effect at the next [`correct`](Self::correct).
    fn read(&mut self) -> bool;
}

/// Quantities derived from the [`CavitationModel`] contract.
///
/// Implemented for every model; there is nothing to override.
///
/// # Example
///
/// ```
/// use cavitation_models::models::cavitation::{
///     CavitationModel, CavitationModelExt, Components, ModelRegistry,
/// };
/// use cavitation_models::support::{
///     config::TomlString,
///     field::{ScalarField, Shared, VectorField},
///     phase::Phase,
/// };
///
/// let source = TomlString::new(r#"
///     model = "merkle"
///     p_sat = 2300.0
///
///     [merkle]
///     free_stream_velocity = 10.0
///     free_stream_time = 0.01
///     condensation_coeff = 1.0
///     vaporization_coeff = 1.0
/// "#);
///
/// let cells = 2;
/// let velocity = Shared::new("U", VectorField::uniform(cells, [10.0, 0.0, 0.0]));
/// let flux = Shared::new("phi", ScalarField::uniform(cells, 0.0));
/// let pressure = Shared::new("p", ScalarField::from(vec![1.0e5, 1.0e3]));
/// let rho_liquid = Shared::new("rho.water", ScalarField::uniform(cells, 1000.0));
/// let rho_vapor = Shared::new("rho.vapour", ScalarField::uniform(cells, 0.02));
/// let water = Phase::new("water", ScalarField::uniform(cells, 1.0));
/// let vapour = Phase::new("vapour", ScalarField::uniform(cells, 0.0));
///
/// let mut model = ModelRegistry::standard()
///     .new_model(Components {
///         source: &source,
///         velocity: &velocity,
///         flux: &flux,
///         pressure: &pressure,
///         rho_liquid: &rho_liquid,
///         rho_vapor: &rho_vapor,
///         alpha_liquid: &water,
///         alpha_vapor: &vapour,
///     })
///     .unwrap();
///
/// model.correct();
/// let v_dot = model.v_dot_alpha_w();
///
/// // Above saturation only condensation acts; below it only vaporization.
/// assert!(v_dot.production[0] > 0.0 && v_dot.destruction[0] == 0.0);
/// assert!(v_dot.production[1] == 0.0 && v_dot.destruction[1] > 0.0);
/// ```
pub trait CavitationModelExt: CavitationModel {
    /// Returns the saturation pressure.
    fn p_sat(&self) -> Pressure {
        self.base().p_sat()
    }

    /// Volumetric coefficients for the liquid-fraction equation.
    ///
    /// See [`rates::v_dot_alpha_w`].
    fn v_dot_alpha_w(&self) -> RatePair {
        rates::v_dot_alpha_w(&self.m_dot_alpha_w(), &self.base().rho_liquid())
    }

    /// Volumetric coefficients for the vapor-fraction equation.
    ///
    /// See [`rates::v_dot_alpha_v`].
    fn v_dot_alpha_v(&self) -> RatePair {
        rates::v_dot_alpha_v(&self.m_dot_alpha_w(), &self.base().rho_vapor())
    }

    /// Volumetric coefficients for the pressure formulation.
    ///
    /// See [`rates::v_dot_p`].
    fn v_dot_p(&self) -> RatePair {
        rates::v_dot_p(&self.m_dot_p(), &self.base().rho_liquid())
    }
}

impl<M: CavitationModel + ?Sized> CavitationModelExt for M {}
