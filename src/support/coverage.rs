//! Cirrus and contrail cirrus coverage of a grid box.
//!
//! Implements the diagnostic coverage parameterization of Burkhardt et al. (2008).
//! Coverage is a function of the grid-box mean relative humidity with respect
//! to ice (`RHi`) and three humidity thresholds:
//!
//! - `RHi_cc`: above this, part of the grid box is ice supersaturated and can
//!   hold persistent contrails.
//! - `RHi_ci`: above this, part of the grid box forms natural cirrus.
//! - `RHi_sat`: at this, the whole grid box is cloudy.
//!
//! The physics expects `RHi_cc < RHi_ci < RHi_sat`. The free functions do not
//! check it; [`Thresholds::new`] does.
//!
//! # Numeric behavior
//!
//! The equations are evaluated exactly as written, in `f64`, with IEEE semantics:
//!
//! - `RHi > RHi_sat` makes the radicand of Eq. 1 negative, so
//!   [`cirrus_coverage`] returns `NaN`.
//! - `RHi_sat == RHi_ci` divides by zero, giving `±inf` or `NaN`.
//! - The zero floor applied to cirrus coverage inside
//!   [`contrail_cirrus_coverage`] propagates `NaN` instead of discarding it.
//! - No upper clamp is applied. Outputs outside `[0, 1]` are returned as is;
//!   use [`checked_fraction`] to validate one.
//!
//! Functions with a `_field` suffix apply the scalar equation to every element
//! of a slice and return a new vector of the same length, with `output[i]`
//! corresponding to `rhi[i]`.
//!
//! # Example
//!
//! ```
//! use contrail_models::support::coverage::Thresholds;
//!
//! let thresholds = Thresholds::default();
//! let coverage = thresholds.contrail_cirrus_coverage_field(&[0.3, 0.5, 0.95]);
//!
//! assert_eq!(coverage.len(), 3);
//! assert_eq!(coverage[2], 1.0);
//! ```

mod cirrus;
mod contrail_cirrus;
mod error;
mod thresholds;

pub use cirrus::{cirrus_coverage, cirrus_coverage_field};
pub use contrail_cirrus::{contrail_cirrus_coverage, contrail_cirrus_coverage_field, rhi_star};
pub use error::ThresholdError;
pub use thresholds::{DEFAULT_RHI_CC, DEFAULT_RHI_CI, DEFAULT_RHI_SAT, Thresholds};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

/// Validates a raw coverage value as a fraction in `[0, 1]`.
///
/// The coverage equations can leave `[0, 1]` for inputs outside their intended
/// domain. This lets a caller decide what to do with such values instead of
/// having them clamped silently.
///
/// # Errors
///
/// Returns [`ConstraintError::BelowMinimum`](crate::support::constraint::ConstraintError::BelowMinimum),
/// [`ConstraintError::AboveMaximum`](crate::support::constraint::ConstraintError::AboveMaximum),
/// or [`ConstraintError::NotANumber`](crate::support::constraint::ConstraintError::NotANumber)
/// if the value is not a valid fraction.
pub fn checked_fraction(value: f64) -> ConstraintResult<Constrained<f64, UnitInterval>> {
    UnitInterval::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn checked_fraction_accepts_physical_coverage() {
        let thresholds = Thresholds::default();
        for rhi in [0.45, 0.7, 0.85, 0.95] {
            let b_cc_ci = thresholds.contrail_cirrus_coverage(rhi);
            assert!(checked_fraction(b_cc_ci).is_ok(), "rhi={rhi} b={b_cc_ci}");
        }
    }

    #[test]
    fn checked_fraction_rejects_out_of_range_coverage() {
        let thresholds = Thresholds::default();

        // Below RHi_cc the base formula goes negative.
        let dry = thresholds.contrail_cirrus_coverage(0.3);
        assert_eq!(checked_fraction(dry), Err(ConstraintError::BelowMinimum));

        // Above RHi_sat natural cirrus coverage is undefined.
        let supersaturated = thresholds.cirrus_coverage(1.2);
        assert_eq!(
            checked_fraction(supersaturated),
            Err(ConstraintError::NotANumber)
        );
    }
}
