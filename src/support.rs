//! Supporting equations and types used by models.
//!
//! - [`constraint`]: Type-level numeric constraints.
//! - [`coverage`]: Cirrus and contrail cirrus coverage (Burkhardt et al., 2008).
//! - [`nucleation`]: Homogeneous freezing threshold (Koop, 2004).

pub mod constraint;
pub mod coverage;
pub mod nucleation;
