use tracing::debug;
use uom::si::{f64::ThermodynamicTemperature, ratio::ratio};

use crate::support::{constraint::StrictlyPositive, nucleation::homogeneous_freezing_threshold_of};

use super::{
    ThresholdError, cirrus_coverage, cirrus_coverage_field, contrail_cirrus_coverage,
    contrail_cirrus_coverage_field, rhi_star,
};

/// Reference `RHi_ci` from Burkhardt et al. (2008).
pub const DEFAULT_RHI_CI: f64 = 0.6;

/// Reference `RHi_cc` from Burkhardt et al. (2008).
pub const DEFAULT_RHI_CC: f64 = 0.4;

/// Reference `RHi_sat` from Burkhardt et al. (2008).
pub const DEFAULT_RHI_SAT: f64 = 1.0;

/// The humidity thresholds of the coverage parameterization.
///
/// Thresholds are passed by value and shared by every grid cell of a field.
/// A value built with [`Thresholds::new`] satisfies `RHi_cc < RHi_ci < RHi_sat`,
/// so none of its methods can divide by zero.
///
/// # Example
///
/// ```
/// use contrail_models::support::coverage::Thresholds;
///
/// let thresholds = Thresholds::new(0.7, 0.5, 1.0).unwrap();
/// assert!(thresholds.rhi_star() < thresholds.rhi_sat());
///
/// assert!(Thresholds::new(0.6, 0.6, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    rhi_ci: f64,
    rhi_cc: f64,
    rhi_sat: f64,
}

impl Thresholds {
    /// The reference thresholds: `RHi_ci = 0.6`, `RHi_cc = 0.4`, `RHi_sat = 1.0`.
    pub const BURKHARDT_2008: Self = Self {
        rhi_ci: DEFAULT_RHI_CI,
        rhi_cc: DEFAULT_RHI_CC,
        rhi_sat: DEFAULT_RHI_SAT,
    };

    /// Constructs validated thresholds.
    ///
    /// # Errors
    ///
    /// Returns a [`ThresholdError`] if any threshold is not finite or if
    /// `RHi_cc < RHi_ci < RHi_sat` does not hold.
    pub fn new(rhi_ci: f64, rhi_cc: f64, rhi_sat: f64) -> Result<Self, ThresholdError> {
        for (name, value) in [("RHi_ci", rhi_ci), ("RHi_cc", rhi_cc), ("RHi_sat", rhi_sat)] {
            if !value.is_finite() {
                debug!(threshold = name, value, "rejecting non-finite coverage threshold");
                return Err(ThresholdError::NotFinite { name, value });
            }
        }

        for (lower, upper, gap) in [
            ("RHi_cc", "RHi_ci", rhi_ci - rhi_cc),
            ("RHi_ci", "RHi_sat", rhi_sat - rhi_ci),
        ] {
            StrictlyPositive::new(gap).map_err(|source| {
                debug!(lower, upper, gap, "rejecting unordered coverage thresholds");
                ThresholdError::NotOrdered {
                    lower,
                    upper,
                    source,
                }
            })?;
        }

        Ok(Self::new_unchecked(rhi_ci, rhi_cc, rhi_sat))
    }

    /// Constructs thresholds whose saturation humidity is the homogeneous
    /// freezing threshold at `temperature`.
    ///
    /// Natural cirrus forms by homogeneous freezing, so `RHi_nuc` from
    /// [`homogeneous_freezing_threshold_of`] marks where the whole grid box is cloudy.
    ///
    /// # Errors
    ///
    /// Returns a [`ThresholdError`] under the same conditions as [`Thresholds::new`],
    /// for example when the temperature is so warm that `RHi_nuc <= rhi_ci`.
    pub fn at_temperature(
        temperature: ThermodynamicTemperature,
        rhi_ci: f64,
        rhi_cc: f64,
    ) -> Result<Self, ThresholdError> {
        let rhi_nuc = homogeneous_freezing_threshold_of(temperature).get::<ratio>();
        Self::new(rhi_ci, rhi_cc, rhi_nuc)
    }

    /// Constructs thresholds without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure `RHi_cc < RHi_ci < RHi_sat`.
    /// Violating this invariant yields infinite, `NaN`, or non-physical coverage.
    #[must_use]
    pub const fn new_unchecked(rhi_ci: f64, rhi_cc: f64, rhi_sat: f64) -> Self {
        Self {
            rhi_ci,
            rhi_cc,
            rhi_sat,
        }
    }

    /// Returns the humidity above which part of the grid box forms natural cirrus.
    #[must_use]
    pub fn rhi_ci(&self) -> f64 {
        self.rhi_ci
    }

    /// Returns the humidity above which part of the grid box is ice supersaturated.
    #[must_use]
    pub fn rhi_cc(&self) -> f64 {
        self.rhi_cc
    }

    /// Returns the humidity at which the whole grid box is cloudy.
    #[must_use]
    pub fn rhi_sat(&self) -> f64 {
        self.rhi_sat
    }

    /// Returns the humidity above which contrail cirrus covers the whole grid box.
    #[must_use]
    pub fn rhi_star(&self) -> f64 {
        rhi_star(self.rhi_sat, self.rhi_ci, self.rhi_cc)
    }

    /// Returns the natural cirrus coverage at `rhi`.
    #[must_use]
    pub fn cirrus_coverage(&self, rhi: f64) -> f64 {
        cirrus_coverage(rhi, self.rhi_ci, self.rhi_sat)
    }

    /// Returns the natural cirrus coverage of each cell in `rhi`.
    #[must_use]
    pub fn cirrus_coverage_field(&self, rhi: &[f64]) -> Vec<f64> {
        cirrus_coverage_field(rhi, self.rhi_ci, self.rhi_sat)
    }

    /// Returns the potential contrail cirrus coverage at `rhi`.
    #[must_use]
    pub fn contrail_cirrus_coverage(&self, rhi: f64) -> f64 {
        contrail_cirrus_coverage(rhi, self.rhi_ci, self.rhi_cc, self.rhi_sat)
    }

    /// Returns the potential contrail cirrus coverage of each cell in `rhi`.
    #[must_use]
    pub fn contrail_cirrus_coverage_field(&self, rhi: &[f64]) -> Vec<f64> {
        contrail_cirrus_coverage_field(rhi, self.rhi_ci, self.rhi_cc, self.rhi_sat)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::BURKHARDT_2008
    }
}
