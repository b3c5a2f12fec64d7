//! Schnerr-Sauer cavitation model.
//!
//! Derives the transfer rate from the Rayleigh growth velocity of a
//! population of spherical bubbles whose number density is fixed by the
//! nucleation site density `n`.
//!
//! Reference: Schnerr, G. H. and Sauer, J. (2001), "Physical and numerical
//! modeling of unsteady cavitation dynamics", 4th International Conference
//! on Multiphase Flow, New Orleans.

use std::f64::consts::PI;

use serde::Deserialize;
use uom::si::{f64::Length, length::meter, pressure::pascal};

use crate::support::{
    config::Dictionary,
    constraint::{NonNegative, StrictlyPositive},
    field::ScalarField,
    units::{NumberDensity, number_density},
};

use super::{
    CavitationBase, CavitationError, CavitationModel, Components, RatePair, coeffs::checked,
};

/// Coefficients of the [`SchnerrSauer`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchnerrSauerCoeffs {
    /// Nucleation site density `n`.
    pub n: NumberDensity,
    /// Nucleus diameter `dNuc`.
    pub d_nuc: Length,
    /// Condensation constant `Cc`.
    pub cc: f64,
    /// Vaporization constant `Cv`.
    pub cv: f64,
}

fn unit_coeff() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchnerrSauerEntries {
    nucleation_density: f64,
    nucleus_diameter: f64,
    #[serde(default = "unit_coeff")]
    condensation_coeff: f64,
    #[serde(default = "unit_coeff")]
    vaporization_coeff: f64,
}

impl SchnerrSauerCoeffs {
    /// Reads and validates the coefficients from the `schnerr_sauer` table.
    ///
    /// `nucleation_density` (1/m³) and `nucleus_diameter` (m) are required
    /// and strictly positive. `condensation_coeff` and `vaporization_coeff`
    /// default to 1 and must be non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`CavitationError`] if an entry is missing, unknown, or out of range.
    pub fn from_dict(dict: &Dictionary) -> Result<Self, CavitationError> {
        let entries: SchnerrSauerEntries = dict.deserialize()?;
        Ok(Self {
            n: number_density(checked::<StrictlyPositive>(
                "nucleation_density",
                entries.nucleation_density,
            )?),
            d_nuc: Length::new::<meter>(checked::<StrictlyPositive>(
                "nucleus_diameter",
                entries.nucleus_diameter,
            )?),
            cc: checked::<NonNegative>("condensation_coeff", entries.condensation_coeff)?,
            cv: checked::<NonNegative>("vaporization_coeff", entries.vaporization_coeff)?,
        })
    }

    /// Returns the nucleation site volume fraction `αnuc = Vnuc·n / (1 + Vnuc·n)`.
    #[must_use]
    pub fn alpha_nuc(&self) -> f64 {
        let d_nuc = self.d_nuc.get::<meter>();
        let v_nuc_n = PI * d_nuc * d_nuc * d_nuc / 6.0 * self.n.value;
        v_nuc_n / (1.0 + v_nuc_n)
    }
}

/// Schnerr-Sauer mass transfer model.
///
/// With `α̂` the clamped liquid fraction, `Δp = p − pSat` and the mixture
/// density `ρ = α̂·ρl + (1 − α̂)·ρv`, the reciprocal bubble radius is
///
/// `Rb = ((4π·n/3)·α̂ / (1 + αnuc − α̂))^(1/3)`
///
/// and the common pressure coefficient is
///
/// `C = 3·ρl·ρv·√(2 / (3·ρl))·Rb / (ρ·√(|Δp| + 0.01·pSat))`.
///
/// - condensation coefficient: `Cc·α̂·C·max(Δp, 0)`
/// - vaporization coefficient: `Cv·(1 + αnuc − α̂)·C·max(−Δp, 0)`
#[derive(Debug)]
pub struct SchnerrSauer<'a> {
    base: CavitationBase<'a>,
    coeffs: SchnerrSauerCoeffs,
    m_dot_alpha_w: RatePair,
    m_dot_p: RatePair,
}

impl<'a> SchnerrSauer<'a> {
    /// Registry tag and configuration table name.
    pub const NAME: &'static str = "schnerr_sauer";

    /// Builds the model from the `schnerr_sauer` table of `dict`.
    ///
    /// # Errors
    ///
    /// Returns [`CavitationError`] if `p_sat` or any coefficient is missing
    /// or invalid. Configuration is fully validated before any field is read.
    pub fn new(dict: &Dictionary, components: Components<'a>) -> Result<Self, CavitationError> {
        let base = CavitationBase::new(dict, components)?;
        let coeffs = SchnerrSauerCoeffs::from_dict(&dict.sub_dict(Self::NAME)?)?;

        let mut model = Self {
            base,
            coeffs,
            m_dot_alpha_w: RatePair::default(),
            m_dot_p: RatePair::default(),
        };
        model.correct();
        Ok(model)
    }

    #[must_use]
    pub fn coeffs(&self) -> SchnerrSauerCoeffs {
        self.coeffs
    }

    /// Returns the nucleation site volume fraction.
    #[must_use]
    pub fn alpha_nuc(&self) -> f64 {
        self.coeffs.alpha_nuc()
    }

    /// Reciprocal bubble radius for the clamped liquid fraction `alpha`.
    fn r_rb(&self, alpha: &ScalarField) -> ScalarField {
        let alpha_nuc = self.alpha_nuc();
        let n = self.coeffs.n.value;
        alpha.map(|a| (4.0 * PI * n / 3.0 * a / (1.0 + alpha_nuc - a)).cbrt())
    }

    /// Pressure coefficient shared by both transfer directions.
    fn p_coeff(&self, alpha: &ScalarField, dp: &ScalarField, p_sat: f64) -> ScalarField {
        let rho_liquid = self.base.rho_liquid();
        let rho_vapor = self.base.rho_vapor();

        let rho = alpha * &*rho_liquid + (1.0 - alpha) * &*rho_vapor;
        let rayleigh = (2.0 / (3.0 * &*rho_liquid)).map(f64::sqrt);
        let deficit = dp.map(|x| (x.abs() + 0.01 * p_sat).sqrt());

        3.0 * (&*rho_liquid * &*rho_vapor) * rayleigh * self.r_rb(alpha) / (rho * deficit)
    }
}

impl CavitationModel for SchnerrSauer<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn base(&self) -> &CavitationBase<'_> {
        &self.base
    }

    fn m_dot_alpha_w(&self) -> RatePair {
        self.m_dot_alpha_w.clone()
    }

    fn m_dot_p(&self) -> RatePair {
        self.m_dot_p.clone()
    }

    fn correct(&mut self) {
        let p_sat = self.base.p_sat().get::<pascal>();
        let alpha = self.base.limited_alpha_liquid();
        let dp = &*self.base.pressure() - p_sat;
        let p_coeff = self.p_coeff(&alpha, &dp, p_sat);

        let SchnerrSauerCoeffs { cc, cv, .. } = self.coeffs;
        let vapor_weight = (1.0 + self.alpha_nuc()) - &alpha;
        let alpha_p_coeff = &alpha * &p_coeff;

        self.m_dot_alpha_w = RatePair::new(
            &alpha_p_coeff * dp.max_scalar(0.0) * cc,
            &vapor_weight * &p_coeff * (-&dp).max_scalar(0.0) * cv,
        );
        self.m_dot_p = RatePair::new(
            (1.0 - &alpha) * dp.indicator(|x| x >= 0.0) * &alpha_p_coeff * cc,
            vapor_weight * dp.indicator(|x| x < 0.0) * alpha_p_coeff * cv,
        );
    }

    fn read(&mut self) -> bool {
        match self.base.reload(Self::NAME, SchnerrSauerCoeffs::from_dict) {
            Some(coeffs) => {
                self.coeffs = coeffs;
                true
            }
            None => false,
        }
    }
}
