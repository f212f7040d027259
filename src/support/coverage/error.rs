use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur when validating coverage [`Thresholds`](super::Thresholds).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThresholdError {
    /// A threshold is infinite or `NaN`.
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    /// Two thresholds are not strictly ordered.
    ///
    /// The coverage equations require `RHi_cc < RHi_ci < RHi_sat`.
    #[error("{lower} must be strictly below {upper}")]
    NotOrdered {
        lower: &'static str,
        upper: &'static str,
        #[source]
        source: ConstraintError,
    },
}
