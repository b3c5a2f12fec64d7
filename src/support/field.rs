//! Minimal field containers.
//!
//! A field is a sequence of cell (or face) values over a spatial domain.
//! The cavitation models only ever operate on whole fields: every operation
//! here is elementwise, and every arithmetic operator returns a newly owned
//! field so results never alias their inputs.
//!
//! Hosts own their fields and hand them to models through [`Shared`], a named
//! handle with interior mutability. Models borrow the handle, read the
//! current value, and never write to it.

mod scalar;
mod shared;
mod vector;

pub use scalar::ScalarField;
pub use shared::Shared;
pub use vector::VectorField;
