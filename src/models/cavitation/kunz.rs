//! Kunz cavitation model.
//!
//! Condensation follows a simplified Ginzburg-Landau potential, cubic in the
//! liquid fraction; vaporization is proportional to the pressure deficit
//! below saturation, scaled by the free-stream dynamic pressure.
//!
//! Reference: Kunz, R. F. et al. (2000), "A preconditioned Navier-Stokes
//! method for two-phase flows with application to cavitation prediction",
//! Computers & Fluids 29, 849-875.

use uom::si::{pressure::pascal, time::second};

use crate::support::config::Dictionary;

use super::{
    CavitationBase, CavitationError, CavitationModel, Components, FreeStreamCoeffs, RatePair,
};

/// Kunz mass transfer model.
///
/// With `α̂` the clamped liquid fraction, `Δp = p − pSat`,
/// `ṁc = Cc·ρv / t∞` and `ṁv = Cv·ρv / (½·ρl·U∞²·t∞)`:
///
/// - condensation coefficient: `ṁc·α̂²·max(Δp, 0) / max(Δp, 0.01·pSat)`
/// - vaporization coefficient: `ṁv·max(−Δp, 0)`
#[derive(Debug)]
pub struct Kunz<'a> {
    base: CavitationBase<'a>,
    coeffs: FreeStreamCoeffs,
    m_dot_alpha_w: RatePair,
    m_dot_p: RatePair,
}

impl<'a> Kunz<'a> {
    /// Registry tag and configuration table name.
    pub const NAME: &'static str = "kunz";

    /// Builds the model from the `kunz` table of `dict`.
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

impl CavitationModel for Kunz<'_> {
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
        let rho_liquid = self.base.rho_liquid();
        let rho_vapor = self.base.rho_vapor();
        let dp = &*self.base.pressure() - p_sat;

        let mc = &*rho_vapor * (self.coeffs.cc / self.coeffs.t_inf.get::<second>());
        let mv = &*rho_vapor * self.coeffs.cv / (&*rho_liquid * self.coeffs.dynamic_scale());

        let mc_alpha_sq = &mc * &alpha * &alpha;
        let condensation_switch = dp.indicator(|x| x >= 0.0) / dp.max_scalar(0.01 * p_sat);

        self.m_dot_alpha_w = RatePair::new(
            &mc_alpha_sq * dp.max_scalar(0.0) / dp.max_scalar(0.01 * p_sat),
            &mv * (-&dp).max_scalar(0.0),
        );
        self.m_dot_p = RatePair::new(
            mc_alpha_sq * (1.0 - &alpha) * condensation_switch,
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Pressure, pressure::pascal, velocity::meter_per_second};

    use crate::models::cavitation::{
        CavitationModelExt,
        test_support::{Fixture, RHO_LIQUID, RHO_VAPOR},
    };

    const CONFIG: &str = r#"
        model = "kunz"
        p_sat = 2000.0

        [kunz]
        free_stream_velocity = 10.0
        free_stream_time = 0.02
        condensation_coeff = 100.0
        vaporization_coeff = 200.0
    "#;

    #[test]
    fn vaporizes_below_and_condenses_above_saturation() {
        let fixture = Fixture::new(CONFIG, 2);
        fixture.set_state(&[1000.0, 5000.0], &[0.5, 0.5]);

        let mut model = Kunz::new(&fixture.dictionary(), fixture.components()).unwrap();
        model.correct();

        let m_dot = model.m_dot_alpha_w();
        m_dot.validate(2).unwrap();

        let mc = RHO_VAPOR * 100.0 / 0.02;
        let mv = RHO_VAPOR * 200.0 / (RHO_LIQUID * 0.5 * 100.0 * 0.02);

        // Cell 0: p < pSat, pure vaporization.
        assert_eq!(m_dot.production[0], 0.0);
        assert_relative_eq!(m_dot.destruction[0], mv * 1000.0);

        // Cell 1: p > pSat, pure condensation.
        assert_relative_eq!(m_dot.production[1], mc * 0.25 * 3000.0 / 3000.0);
        assert_eq!(m_dot.destruction[1], 0.0);
    }

    #[test]
    fn pressure_form_matches_alpha_form() {
        let fixture = Fixture::new(CONFIG, 3);
        let alpha = [0.2, 0.7, 0.95];
        let p = [500.0, 2000.0, 9000.0];
        fixture.set_state(&p, &alpha);

        let model = Kunz::new(&fixture.dictionary(), fixture.components()).unwrap();
        let by_alpha = model.m_dot_alpha_w();
        let by_p = model.m_dot_p();
        by_p.validate(3).unwrap();

        for i in 0..3 {
            let dp: f64 = p[i] - 2000.0;
            assert_relative_eq!(
                by_alpha.production[i] * (1.0 - alpha[i]),
                by_p.production[i] * dp.max(0.0),
                max_relative = 1e-12
            );
            assert_relative_eq!(
                by_alpha.destruction[i] * alpha[i],
                by_p.destruction[i] * (-dp).max(0.0),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn clamps_out_of_range_fractions() {
        let fixture = Fixture::new(CONFIG, 2);
        fixture.set_state(&[1000.0, 1000.0], &[1.2, -0.1]);

        let model = Kunz::new(&fixture.dictionary(), fixture.components()).unwrap();
        let by_p = model.m_dot_p();
        by_p.validate(2).unwrap();
        assert_eq!(by_p.destruction[1], 0.0);
    }

    #[test]
    fn read_picks_up_new_coefficients() {
        let fixture = Fixture::new(CONFIG, 1);
        let mut model = Kunz::new(&fixture.dictionary(), fixture.components()).unwrap();

        fixture
            .source
            .replace(CONFIG.replace("free_stream_velocity = 10.0", "free_stream_velocity = 25.0"));
        assert!(model.read());
        assert_relative_eq!(model.coeffs().u_inf.get::<meter_per_second>(), 25.0);
        assert_eq!(model.p_sat(), Pressure::new::<pascal>(2000.0));
    }

    #[test]
    fn failed_read_keeps_previous_state() {
        let fixture = Fixture::new(CONFIG, 2);
        fixture.set_state(&[1000.0, 5000.0], &[0.5, 0.5]);
        let mut model = Kunz::new(&fixture.dictionary(), fixture.components()).unwrap();

        assert!(model.read());
        let coeffs = model.coeffs();
        assert!(model.read());
        assert_eq!(model.coeffs(), coeffs);

        fixture.source.replace(
            CONFIG
                .replace("p_sat = 2000.0", "p_sat = 3000.0")
                .replace("condensation_coeff = 100.0", "condensation_coeff = -1.0"),
        );
        assert!(!model.read());
        assert_eq!(model.coeffs(), coeffs);
        assert_eq!(model.p_sat(), Pressure::new::<pascal>(2000.0));

        let rates = model.m_dot_alpha_w();
        model.correct();
        assert_eq!(model.m_dot_alpha_w(), rates);
    }
}
