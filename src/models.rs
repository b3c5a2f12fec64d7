//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Currently the only
//! domain is [`cavitation`], which covers liquid/vapor mass transfer.
//!
//! # Model structure
//!
//! Each concrete correlation lives in its own module and implements the
//! shared [`cavitation::CavitationModel`] contract. Quantities derived from
//! that contract (volumetric rates, linearized sources) are implemented once
//! and reused by every correlation.

pub mod cavitation;
