//! Homogeneous freezing threshold for cirrus formation.
//!
//! Koop (2004) gives the relative humidity with respect to ice at which
//! solution droplets freeze homogeneously as a linear function of temperature:
//!
//! ```text
//! RHi_nuc = 2.349 - T / 259
//! ```
//!
//! with `T` in kelvin. The function is total: there is no domain restriction,
//! so out-of-range temperatures simply extrapolate the line.
//!
//! # Example
//!
//! ```
//! use contrail_models::support::nucleation::homogeneous_freezing_threshold_of;
//! use uom::si::{
//!     f64::ThermodynamicTemperature, ratio::ratio, thermodynamic_temperature::kelvin,
//! };
//!
//! let rhi_nuc = homogeneous_freezing_threshold_of(ThermodynamicTemperature::new::<kelvin>(259.0));
//! assert!((rhi_nuc.get::<ratio>() - 1.349).abs() < 1e-12);
//! ```

use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

/// Intercept of the Koop (2004) threshold line.
const INTERCEPT: f64 = 2.349;

/// Temperature scale of the Koop (2004) threshold line, in kelvin.
const SLOPE_KELVIN: f64 = 259.0;

/// Returns the homogeneous freezing threshold `RHi_nuc` for a temperature in kelvin.
#[must_use]
pub fn homogeneous_freezing_threshold(t_kelvin: f64) -> f64 {
    INTERCEPT - t_kelvin / SLOPE_KELVIN
}

/// Applies [`homogeneous_freezing_threshold`] to each temperature in `t_kelvin`.
///
/// The output has the same length as the input and `output[i]` corresponds to `t_kelvin[i]`.
#[must_use]
pub fn homogeneous_freezing_threshold_field(t_kelvin: &[f64]) -> Vec<f64> {
    t_kelvin
        .iter()
        .map(|&t| homogeneous_freezing_threshold(t))
        .collect()
}

/// Returns the homogeneous freezing threshold for a [`ThermodynamicTemperature`].
#[must_use]
pub fn homogeneous_freezing_threshold_of(temperature: ThermodynamicTemperature) -> Ratio {
    Ratio::new::<ratio>(homogeneous_freezing_threshold(
        temperature.get::<kelvin>(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    #[allow(clippy::float_cmp)]
    fn matches_line() {
        assert_eq!(homogeneous_freezing_threshold(0.0), 2.349);
        assert_eq!(homogeneous_freezing_threshold(259.0), 2.349 - 1.0);
        assert_relative_eq!(homogeneous_freezing_threshold(259.0), 1.349, epsilon = 1e-12);
        assert_eq!(
            homogeneous_freezing_threshold(233.15),
            2.349 - 233.15 / 259.0
        );
    }

    #[test]
    fn crosses_zero() {
        assert_relative_eq!(
            homogeneous_freezing_threshold(259.0 * 2.349),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn decreases_with_temperature() {
        let field = homogeneous_freezing_threshold_field(&[200.0, 220.0, 240.0]);
        assert_eq!(field.len(), 3);
        assert!(field[0] > field[1] && field[1] > field[2]);
    }

    #[test]
    fn field_preserves_order() {
        let temps = [240.0, 200.0, 259.0];
        let field = homogeneous_freezing_threshold_field(&temps);
        for (t, rhi_nuc) in temps.iter().zip(&field) {
            assert_eq!(rhi_nuc.to_bits(), homogeneous_freezing_threshold(*t).to_bits());
        }
        assert!(homogeneous_freezing_threshold_field(&[]).is_empty());
    }

    #[test]
    fn typed_temperature() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(-40.0);
        let rhi_nuc = homogeneous_freezing_threshold_of(t);
        assert_relative_eq!(
            rhi_nuc.get::<ratio>(),
            2.349 - 233.15 / 259.0,
            epsilon = 1e-12
        );
    }
}
