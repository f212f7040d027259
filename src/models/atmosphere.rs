//! Atmospheric cloud-coverage models.
//!
//! These models evaluate the equations in [`crate::support::coverage`] and
//! [`crate::support::nucleation`] over the cells of a humidity or temperature
//! field. Fields are flat `Vec<f64>` buffers; the output always has the same
//! length as the input and keeps the cell order.

mod coverage;
mod freezing;

pub use coverage::{CirrusCoverage, ContrailCirrusCoverage};
pub use freezing::HomogeneousFreezing;
