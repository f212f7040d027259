use std::convert::Infallible;

use tracing::trace;
use twine_core::Model;

use crate::support::coverage::{ThresholdError, Thresholds};

/// Natural cirrus coverage of each cell in a relative humidity field.
///
/// Input is relative humidity with respect to ice per cell; output is `b_ci`
/// per cell, unclamped (see [`crate::support::coverage::cirrus_coverage`]).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CirrusCoverage {
    thresholds: Thresholds,
}

impl CirrusCoverage {
    /// Creates a model from validated thresholds.
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Creates a model from raw thresholds.
    ///
    /// # Errors
    ///
    /// Returns a [`ThresholdError`] if the thresholds are not finite and ordered.
    pub fn from_values(rhi_ci: f64, rhi_cc: f64, rhi_sat: f64) -> Result<Self, ThresholdError> {
        Ok(Self::new(Thresholds::new(rhi_ci, rhi_cc, rhi_sat)?))
    }

    /// Returns the thresholds used by this model.
    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }
}

impl Model for CirrusCoverage {
    type Input = Vec<f64>;
    type Output = Vec<f64>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        trace!(cells = input.len(), "evaluating cirrus coverage");
        Ok(self.thresholds.cirrus_coverage_field(input))
    }
}

/// Potential contrail cirrus coverage of each cell in a relative humidity field.
///
/// Cells with humidity above `RHi_star` are fully covered (`1.0`); the rest
/// follow Eq. 3 of Burkhardt et al. (2008) and may fall outside `[0, 1]` when
/// drier than `RHi_cc`.
///
/// # Example
///
/// ```
/// use contrail_models::models::atmosphere::ContrailCirrusCoverage;
/// use twine_core::Model;
///
/// let model = ContrailCirrusCoverage::default();
/// let coverage = model.call(&vec![0.5, 0.95]).unwrap();
///
/// assert!((coverage[0] - 0.25).abs() < 1e-12);
/// assert_eq!(coverage[1], 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContrailCirrusCoverage {
    thresholds: Thresholds,
}

impl ContrailCirrusCoverage {
    /// Creates a model from validated thresholds.
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Creates a model from raw thresholds.
    ///
    /// # Errors
    ///
    /// Returns a [`ThresholdError`] if the thresholds are not finite and ordered.
    pub fn from_values(rhi_ci: f64, rhi_cc: f64, rhi_sat: f64) -> Result<Self, ThresholdError> {
        Ok(Self::new(Thresholds::new(rhi_ci, rhi_cc, rhi_sat)?))
    }

    /// Returns the thresholds used by this model.
    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }
}

impl Model for ContrailCirrusCoverage {
    type Input = Vec<f64>;
    type Output = Vec<f64>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        trace!(
            cells = input.len(),
            rhi_star = self.thresholds.rhi_star(),
            "evaluating contrail cirrus coverage"
        );
        Ok(self.thresholds.contrail_cirrus_coverage_field(input))
    }
}
