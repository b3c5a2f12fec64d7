//! # Cavitation Models
//!
//! Phase-change (cavitation) models for two-phase liquid/vapor flow, and the
//! shared rate algebra every model reuses.
//!
//! ## Crate layout
//!
//! - [`models`]: The cavitation model contract, the rate-conversion algebra,
//!   the model registry, and concrete correlations.
//! - [`support`]: Supporting utilities used by models (fields, phases,
//!   configuration, numeric constraints, and unit extensions).
//!
//! ## Conventions
//!
//! Every rate the crate produces is a [`RatePair`](models::cavitation::RatePair)
//! of `(production, destruction)` fields. Both components are non-negative;
//! the direction of transfer is encoded by which equation consumes which
//! component, never by the sign of the values.
//!
//! Field values are stored as SI magnitudes. Scalar configuration values are
//! carried as [`uom`] quantities wherever they have a physical dimension.

pub mod models;
pub mod support;
