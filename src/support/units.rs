//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all dimensioned scalar configuration values
//! (saturation pressure, free-stream velocity, nucleus diameter, ...).
//! This module names the quantities the cavitation models need that [`uom`]
//! does not provide out of the box.
//!
//! ## Number density
//!
//! Bubble-dynamics models parameterize the liquid by the number of
//! cavitation nuclei per unit volume. [`NumberDensity`] has dimension `L⁻³`
//! and can be built with ordinary [`uom`] arithmetic:
//!
//! ```
//! use cavitation_models::support::units::NumberDensity;
//! use uom::si::{
//!     f64::{Ratio, Volume},
//!     ratio::ratio,
//!     volume::cubic_meter,
//! };
//!
//! let n: NumberDensity = Ratio::new::<ratio>(1.6e13) / Volume::new::<cubic_meter>(1.0);
//! assert_eq!(n.value, 1.6e13);
//! ```

mod quantities;

pub use quantities::{NumberDensity, number_density};
