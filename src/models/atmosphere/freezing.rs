use std::convert::Infallible;

use tracing::trace;
use twine_core::Model;
use uom::si::f64::{Ratio, ThermodynamicTemperature};

use crate::support::nucleation::homogeneous_freezing_threshold_of;

/// Homogeneous freezing threshold `RHi_nuc` as a function of temperature (Koop, 2004).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomogeneousFreezing;

impl Model for HomogeneousFreezing {
    type Input = ThermodynamicTemperature;
    type Output = Ratio;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        trace!(temperature = ?input, "evaluating homogeneous freezing threshold");
        Ok(homogeneous_freezing_threshold_of(*input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{ratio::ratio, thermodynamic_temperature::kelvin};

    #[test]
    fn threshold_at_reference_temperatures() {
        let model = HomogeneousFreezing;

        let rhi_nuc = model
            .call(&ThermodynamicTemperature::new::<kelvin>(0.0))
            .unwrap();
        assert_relative_eq!(rhi_nuc.get::<ratio>(), 2.349);

        let rhi_nuc = model
            .call(&ThermodynamicTemperature::new::<kelvin>(259.0))
            .unwrap();
        assert_relative_eq!(rhi_nuc.get::<ratio>(), 1.349, epsilon = 1e-12);
    }
}
