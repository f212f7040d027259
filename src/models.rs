//! Public Twine models.
//!
//! Models are organized into domain-specific submodules. Only `atmosphere`
//! exists today.
//!
//! # Model structure
//!
//! Each [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the equations in [`crate::support`]. Adapters validate their
//! configuration once at construction, so calling them cannot fail.

pub mod atmosphere;
