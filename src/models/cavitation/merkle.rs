//! Merkle cavitation model.
//!
//! Both transfer directions are linear in the pressure difference from
//! saturation and scaled by the free-stream dynamic pressure.
//!
//! Reference: Merkle, C. L., Feng, J. Z. and Buelow, P. E. O. (1998),
//! "Computational modeling of the dynamics of sheet cavitation",
//! 3rd International Symposium on Cavitation, Grenoble.

use uom::si::pressure::pascal;

use crate::support::config::Dictionary;

use super::{
    CavitationBase, CavitationError, CavitationModel, Components, FreeStreamCoeffs, RatePair,
};

/// Merkle mass transfer model.
///
/// With `Δp = p − pSat`, `ṁc = Cc / (½·U∞²·t∞)` and
/// `ṁv = Cv·ρl / (½·U∞²·t∞·ρv)`:
///
/// - condensation coefficient: `ṁc·max(Δp, 0)`
/// - vaporization coefficient: `ṁv·max(−Δp, 0)`
#[derive(Debug)]
pub struct Merkle<'a> {
    base: CavitationBase<'a>,
    coeffs: FreeStreamCoeffs,
    m_dot_alpha_w: RatePair,
    m_dot_p: RatePair,
}

impl<'a> Merkle<'a> {
    /// Registry tag and configuration table name.
    pub const NAME: &'static str = "merkle";

    /// Builds the model from the `merkle` table of `dict`.
    ///
    /// # Errors
    ///
    /// Returns [`CavitationError`] if `p_sat` or any coefficient is missing
    /// or invalid. Configuration is fully validated before any field is read.
    pub fn new(dict: &Dictionary, components: Components<'a>) -> Result<Self, CavitationError> {
        let base = CavitationBase::new(dict, components)?;
        let coeffs = FreeStreamCoeffs::from_dict(&dict.sub_dict(Self::NAME)?)?;

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
    pub fn coeffs(&self) -> FreeStreamCoeffs {
        self.coeffs
    }
}

impl CavitationModel for Merkle<'_> {
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

        let scale = self.coeffs.dynamic_scale();
        let mc = self.coeffs.cc / scale;
        let mv = &*self.base.rho_liquid() * (self.coeffs.cv / scale) / &*self.base.rho_vapor();

        self.m_dot_alpha_w = RatePair::new(
            dp.max_scalar(0.0) * mc,
            &mv * (-&dp).max_scalar(0.0),
        );
        self.m_dot_p = RatePair::new(
            (1.0 - &alpha) * dp.indicator(|x| x >= 0.0) * mc,
            mv * &alpha * dp.indicator(|x| x < 0.0),
        );
    }

    fn read(&mut self) -> bool {
        match self.base.reload(Self::NAME, FreeStreamCoeffs::from_dict) {
            Some(coeffs) => {
                self.coeffs = coeffs;
                true
            }
            None => false,
        }
    }
}
