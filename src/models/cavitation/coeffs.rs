//! Validated coefficient sets shared by several correlations.

use serde::Deserialize;
use uom::si::{
    f64::{Time, Velocity},
    time::second,
    velocity::meter_per_second,
};

use crate::support::{
    config::Dictionary,
    constraint::{Constraint, NonNegative, StrictlyPositive},
};

use super::CavitationError;

/// Checks a coefficient with constraint `C`, naming it in the error.
pub(super) fn checked<C: Constraint<f64>>(
    name: &'static str,
    value: f64,
) -> Result<f64, CavitationError> {
    C::check(&value).map_err(|source| CavitationError::InvalidCoefficient { name, source })?;
    Ok(value)
}

/// Free-stream scaling coefficients used by the Kunz and Merkle correlations.
///
/// Both correlations scale the transfer rates by a characteristic
/// free-stream velocity and mean-flow time scale, and weight condensation and
/// vaporization by empirical constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeStreamCoeffs {
    /// Free-stream velocity `U∞`.
    pub u_inf: Velocity,
    /// Mean-flow time scale `t∞`.
    pub t_inf: Time,
    /// Condensation constant `Cc`.
    pub cc: f64,
    /// Vaporization constant `Cv`.
    pub cv: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FreeStreamEntries {
    free_stream_velocity: f64,
    free_stream_time: f64,
    condensation_coeff: f64,
    vaporization_coeff: f64,
}

impl FreeStreamCoeffs {
    /// Reads and validates the coefficients from a model table.
    ///
    /// All four entries are required. `U∞` and `t∞` must be strictly
    /// positive; `Cc` and `Cv` must be non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`CavitationError`] if an entry is missing, unknown, or out of range.
    pub fn from_dict(dict: &Dictionary) -> Result<Self, CavitationError> {
        let entries: FreeStreamEntries = dict.deserialize()?;
        Ok(Self {
            u_inf: Velocity::new::<meter_per_second>(checked::<StrictlyPositive>(
                "free_stream_velocity",
                entries.free_stream_velocity,
            )?),
            t_inf: Time::new::<second>(checked::<StrictlyPositive>(
                "free_stream_time",
                entries.free_stream_time,
            )?),
            cc: checked::<NonNegative>("condensation_coeff", entries.condensation_coeff)?,
            cv: checked::<NonNegative>("vaporization_coeff", entries.vaporization_coeff)?,
        })
    }

    /// Returns the dynamic-pressure time scale `½ U∞² t∞` in SI (m²/s).
    #[must_use]
    pub(super) fn dynamic_scale(&self) -> f64 {
        let u_inf = self.u_inf.get::<meter_per_second>();
        0.5 * u_inf * u_inf * self.t_inf.get::<second>()
    }
}
