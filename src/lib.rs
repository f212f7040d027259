//! # Contrail Models
//!
//! Diagnostic cloud-coverage models for a single grid box of an atmospheric
//! model, following the potential contrail coverage parameterization of
//! Burkhardt et al. (2008) and the homogeneous freezing threshold of Koop (2004).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] adapters over humidity and temperature fields.
//! - [`support`]: The closed-form equations and the types they share.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because the equations are
//! useful on their own, but their APIs are not stable.
//! Breaking changes may occur as needed.

pub mod models;
pub mod support;
