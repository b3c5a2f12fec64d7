use crate::support::{
    config::{Dictionary, DictionarySource, TomlString},
    field::{ScalarField, Shared, VectorField},
    phase::Phase,
};

use super::Components;

pub(super) const RHO_LIQUID: f64 = 1000.0;
pub(super) const RHO_VAPOR: f64 = 0.02;

/// A set of host fields over a small domain, at atmospheric pressure and
/// filled with liquid.
#[derive(Debug)]
pub(super) struct Fixture {
    pub(super) source: TomlString,
    pub(super) velocity: Shared<VectorField>,
    pub(super) flux: Shared<ScalarField>,
    pub(super) pressure: Shared<ScalarField>,
    pub(super) rho_liquid: Shared<ScalarField>,
    pub(super) rho_vapor: Shared<ScalarField>,
    pub(super) water: Phase,
    pub(super) vapour: Phase,
}

impl Fixture {
    pub(super) fn new(config: &str, cells: usize) -> Self {
        Self {
            source: TomlString::new(config),
            velocity: Shared::new("U", VectorField::uniform(cells, [0.0; 3])),
            flux: Shared::new("phi", ScalarField::uniform(cells, 0.0)),
            pressure: Shared::new("p", ScalarField::uniform(cells, 1.0e5)),
            rho_liquid: Shared::new("rho.water", ScalarField::uniform(cells, RHO_LIQUID)),
            rho_vapor: Shared::new("rho.vapour", ScalarField::uniform(cells, RHO_VAPOR)),
            water: Phase::new("water", ScalarField::uniform(cells, 1.0)),
            vapour: Phase::new("vapour", ScalarField::uniform(cells, 0.0)),
        }
    }

    pub(super) fn dictionary(&self) -> Dictionary {
        self.source.load().expect("fixture configuration should parse")
    }

    pub(super) fn components(&self) -> Components<'_> {
        Components {
            source: &self.source,
            velocity: &self.velocity,
            flux: &self.flux,
            pressure: &self.pressure,
            rho_liquid: &self.rho_liquid,
            rho_vapor: &self.rho_vapor,
            alpha_liquid: &self.water,
            alpha_vapor: &self.vapour,
        }
    }

    /// Sets the pressure and the liquid fraction, with the vapor fraction as
    /// its complement.
    pub(super) fn set_state(&self, pressure: &[f64], alpha_liquid: &[f64]) {
        let alpha = ScalarField::from(alpha_liquid.to_vec());
        self.pressure.set(ScalarField::from(pressure.to_vec()));
        self.vapour.field().set(1.0 - &alpha);
        self.water.field().set(alpha);
    }
}
