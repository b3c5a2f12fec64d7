//! Production/destruction rate pairs and the mass-to-volume conversions.
//!
//! Every concrete model supplies mass transfer coefficients; the functions
//! in this module turn them into the volumetric coefficients consumed by the
//! phase-fraction and pressure equations. They are the only place the
//! conversion is implemented.

use std::fmt;

use thiserror::Error;

use crate::support::{
    constraint::{Constraint, ConstraintError, NonNegative},
    field::ScalarField,
};

/// Identifies one half of a [`RatePair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Index 0: the term increasing the target phase.
    Production,
    /// Index 1: the complementary term decreasing it.
    Destruction,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Destruction => f.write_str("destruction"),
        }
    }
}

/// An ordered `(production, destruction)` pair of rate fields.
///
/// For liquid-fraction coefficients, `production` multiplies `(1 − αw)` and
/// `destruction` multiplies `αw`. Both components are non-negative; which
/// equation subtracts which component encodes the transfer direction.
///
/// Conversion into `[ScalarField; 2]` preserves the index convention:
/// `[0]` is production and `[1]` is destruction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatePair {
    pub production: ScalarField,
    pub destruction: ScalarField,
}

impl RatePair {
    #[must_use]
    pub fn new(production: ScalarField, destruction: ScalarField) -> Self {
        Self {
            production,
            destruction,
        }
    }

    /// Returns the component selected by `component`.
    #[must_use]
    pub fn get(&self, component: Component) -> &ScalarField {
        match component {
            Component::Production => &self.production,
            Component::Destruction => &self.destruction,
        }
    }

    /// Returns the pair with production and destruction exchanged.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            production: self.destruction,
            destruction: self.production,
        }
    }

    /// Applies `f` to both components.
    #[must_use]
    pub fn map(&self, f: impl Fn(&ScalarField) -> ScalarField) -> Self {
        Self {
            production: f(&self.production),
            destruction: f(&self.destruction),
        }
    }

    /// Checks that both components span `len` elements and hold no negative
    /// or `NaN` values.
    ///
    /// Rate accessors never call this: non-negativity and domain agreement
    /// are preconditions on concrete models. Hosts and test suites use it to
    /// verify a model upholds them.
    ///
    /// # Errors
    ///
    /// Returns the first [`RateError`] found, production before destruction.
    pub fn validate(&self, len: usize) -> Result<(), RateError> {
        for component in [Component::Production, Component::Destruction] {
            let field = self.get(component);
            if field.len() != len {
                return Err(RateError::DomainMismatch {
                    component,
                    expected: len,
                    found: field.len(),
                });
            }
            for (index, value) in field.iter().enumerate() {
                NonNegative::check(&value).map_err(|source| RateError::Invalid {
                    component,
                    index,
                    value,
                    source,
                })?;
            }
        }
        Ok(())
    }
}

impl From<RatePair> for [ScalarField; 2] {
    fn from(pair: RatePair) -> Self {
        [pair.production, pair.destruction]
    }
}

/// A violated [`RatePair`] precondition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    /// A component is defined over a different number of elements than the phase fields.
    #[error("{component} spans {found} elements, expected {expected}")]
    DomainMismatch {
        component: Component,
        expected: usize,
        found: usize,
    },

    /// A component holds a negative or `NaN` value.
    #[error("{component}[{index}] = {value} is not a valid rate")]
    Invalid {
        component: Component,
        index: usize,
        value: f64,
        #[source]
        source: ConstraintError,
    },
}

/// Converts liquid-fraction mass coefficients into volumetric coefficients
/// for the liquid-fraction equation.
///
/// Each component is divided by the liquid density: `(ṁp/ρl, ṁd/ρl)`.
#[must_use]
pub fn v_dot_alpha_w(m_dot_alpha_w: &RatePair, rho_liquid: &ScalarField) -> RatePair {
    m_dot_alpha_w.map(|m_dot| m_dot / rho_liquid)
}

/// Converts liquid-fraction mass coefficients into volumetric coefficients
/// for the vapor-fraction equation.
///
/// Mass leaving the liquid enters the vapor, so the components swap and the
/// vapor density divides: `(ṁd/ρv, ṁp/ρv)`.
#[must_use]
pub fn v_dot_alpha_v(m_dot_alpha_w: &RatePair, rho_vapor: &ScalarField) -> RatePair {
    m_dot_alpha_w.map(|m_dot| m_dot / rho_vapor).swapped()
}

/// Converts pressure-based mass coefficients into volumetric coefficients.
///
/// Each component is divided by the liquid density: `(ṁp/ρl, ṁd/ρl)`.
#[must_use]
pub fn v_dot_p(m_dot_p: &RatePair, rho_liquid: &ScalarField) -> RatePair {
    m_dot_p.map(|m_dot| m_dot / rho_liquid)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn uniform(value: f64) -> ScalarField {
        ScalarField::uniform(1, value)
    }

    fn pair(production: f64, destruction: f64) -> RatePair {
        RatePair::new(uniform(production), uniform(destruction))
    }

    #[test]
    fn single_cell_liquid_and_vapor_views() {
        let m_dot = pair(2000.0, 500.0);
        let rho_liquid = uniform(1000.0);
        let rho_vapor = uniform(1.0);

        let liquid = v_dot_alpha_w(&m_dot, &rho_liquid);
        assert_relative_eq!(liquid.production[0], 2.0);
        assert_relative_eq!(liquid.destruction[0], 0.5);

        let vapor = v_dot_alpha_v(&m_dot, &rho_vapor);
        assert_relative_eq!(vapor.production[0], 500.0);
        assert_relative_eq!(vapor.destruction[0], 2000.0);
    }

    #[test]
    fn single_cell_pressure_based() {
        let v_dot = v_dot_p(&pair(10.0, 4.0), &uniform(1000.0));
        assert_relative_eq!(v_dot.production[0], 0.01);
        assert_relative_eq!(v_dot.destruction[0], 0.004);
    }

    #[test]
    fn liquid_view_divides_pointwise() {
        let m_dot = RatePair::new(
            ScalarField::from(vec![0.0, 12.0, 3.5e4]),
            ScalarField::from(vec![7.0, 0.0, 1.0e-3]),
        );
        let rho_liquid = ScalarField::from(vec![998.2, 1000.0, 958.4]);

        let v_dot = v_dot_alpha_w(&m_dot, &rho_liquid);
        for i in 0..3 {
            assert_relative_eq!(
                v_dot.production[i],
                m_dot.production[i] / rho_liquid[i]
            );
            assert_relative_eq!(
                v_dot.destruction[i],
                m_dot.destruction[i] / rho_liquid[i]
            );
        }
    }

    #[test]
    fn vapor_view_mirrors_liquid_view() {
        let m_dot = RatePair::new(
            ScalarField::from(vec![4.0, 0.0, 250.0]),
            ScalarField::from(vec![0.0, 9.0, 80.0]),
        );
        let rho_liquid = ScalarField::from(vec![1000.0, 998.0, 990.0]);
        let rho_vapor = ScalarField::from(vec![0.02, 0.5, 1.0]);

        let liquid = v_dot_alpha_w(&m_dot, &rho_liquid);
        let vapor = v_dot_alpha_v(&m_dot, &rho_vapor);

        for i in 0..3 {
            let ratio = rho_liquid[i] / rho_vapor[i];
            assert_relative_eq!(
                vapor.production[i],
                liquid.destruction[i] * ratio,
                max_relative = 1e-12
            );
            assert_relative_eq!(
                vapor.destruction[i],
                liquid.production[i] * ratio,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn index_convention() {
        let [production, destruction]: [ScalarField; 2] = pair(1.0, 2.0).into();
        assert_eq!(production[0], 1.0);
        assert_eq!(destruction[0], 2.0);

        let swapped = pair(1.0, 2.0).swapped();
        assert_eq!(swapped.get(Component::Production)[0], 2.0);
    }

    #[test]
    fn validate_accepts_zero_and_positive() {
        assert_eq!(pair(0.0, 3.0).validate(1), Ok(()));
    }

    #[test]
    fn validate_reports_negative_values() {
        let err = RatePair::new(
            ScalarField::from(vec![1.0, 2.0]),
            ScalarField::from(vec![0.0, -1.0]),
        )
        .validate(2)
        .unwrap_err();
        assert!(matches!(
            err,
            RateError::Invalid {
                component: Component::Destruction,
                index: 1,
                source: ConstraintError::Negative,
                ..
            }
        ));
    }

    #[test]
    fn validate_reports_domain_mismatch() {
        let err = pair(1.0, 1.0).validate(4).unwrap_err();
        assert_eq!(
            err,
            RateError::DomainMismatch {
                component: Component::Production,
                expected: 4,
                found: 1,
            }
        );
    }
}
