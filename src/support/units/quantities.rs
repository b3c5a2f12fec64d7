use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Ratio, Volume},
        ratio::ratio,
        volume::cubic_meter,
    },
    typenum::{N3, Z0},
};

/// Number density, 1/m³ in SI.
pub type NumberDensity = Quantity<ISQ<N3, Z0, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Returns a [`NumberDensity`] from a count per cubic meter.
#[must_use]
pub fn number_density(per_cubic_meter: f64) -> NumberDensity {
    Ratio::new::<ratio>(per_cubic_meter) / Volume::new::<cubic_meter>(1.0)
}
