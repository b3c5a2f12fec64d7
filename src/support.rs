//! Supporting utilities used by models.
//!
//! These modules are public because hosts need them to hand fields and
//! configuration to a model, but their APIs are not stable.

pub mod config;
pub mod constraint;
pub mod field;
pub mod phase;
pub mod units;
