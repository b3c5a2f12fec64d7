//! Phase-fraction providers.
//!
//! Cavitation models read the liquid and vapor volume fractions through the
//! [`PhaseFraction`] trait, so a host can back them with whatever phase
//! representation it already has. [`Phase`] is a ready-made implementation
//! over a [`Shared`] scalar field.

use std::{cell::Ref, fmt};

use crate::support::field::{ScalarField, Shared};

/// Read-only access to the current volume fraction of a named phase.
pub trait PhaseFraction: fmt::Debug {
    /// Returns the phase name (for example `"water"` or `"vapour"`).
    fn phase_name(&self) -> &str;

    /// Borrows the current volume fraction field.
    ///
    /// Values are nominally in `[0, 1]`, but transport schemes may overshoot
    /// slightly; consumers clamp where it matters.
    fn alpha(&self) -> Ref<'_, ScalarField>;
}

/// A phase backed by a host-owned volume fraction field.
#[derive(Debug)]
pub struct Phase {
    alpha: Shared<ScalarField>,
}

impl Phase {
    /// Creates a phase named `name` with the given initial volume fraction.
    ///
    /// The underlying field is named `alpha.<name>`.
    pub fn new(name: &str, alpha: ScalarField) -> Self {
        Self {
            alpha: Shared::new(format!("alpha.{name}"), alpha),
        }
    }

    /// Returns the shared field handle, through which the host updates the fraction.
    #[must_use]
    pub fn field(&self) -> &Shared<ScalarField> {
        &self.alpha
    }
}

impl PhaseFraction for Phase {
    fn phase_name(&self) -> &str {
        self.alpha
            .name()
            .strip_prefix("alpha.")
            .unwrap_or(self.alpha.name())
    }

    fn alpha(&self) -> Ref<'_, ScalarField> {
        self.alpha.get()
    }
}
