/// Returns the natural cirrus coverage `b_ci` of a grid box (Eq. 1).
///
/// ```text
/// b_ci = 1 - sqrt(1 - (RHi - RHi_ci) / (RHi_sat - RHi_ci))
/// ```
///
/// The result is 0 at `RHi_ci` and 1 at `RHi_sat`.
/// Below `RHi_ci` the result is negative, and above `RHi_sat` the radicand is
/// negative and the result is `NaN`. Neither case is clamped here.
#[must_use]
pub fn cirrus_coverage(rhi: f64, rhi_ci: f64, rhi_sat: f64) -> f64 {
    1.0 - (1.0 - (rhi - rhi_ci) / (rhi_sat - rhi_ci)).sqrt()
}

/// Applies [`cirrus_coverage`] to each element of `rhi`.
#[must_use]
pub fn cirrus_coverage_field(rhi: &[f64], rhi_ci: f64, rhi_sat: f64) -> Vec<f64> {
    rhi.iter()
        .map(|&rhi| cirrus_coverage(rhi, rhi_ci, rhi_sat))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_at_cirrus_threshold() {
        for (rhi_ci, rhi_sat) in [(0.6, 1.0), (0.8, 1.45), (0.95, 1.0), (-0.3, 0.2)] {
            assert_eq!(cirrus_coverage(rhi_ci, rhi_ci, rhi_sat), 0.0);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn one_at_saturation() {
        for (rhi_ci, rhi_sat) in [(0.6, 1.0), (0.8, 1.45), (0.95, 1.0), (-0.3, 0.2)] {
            assert_eq!(cirrus_coverage(rhi_sat, rhi_ci, rhi_sat), 1.0);
        }
    }

    #[test]
    fn halfway_between_thresholds() {
        assert_relative_eq!(
            cirrus_coverage(0.8, 0.6, 1.0),
            1.0 - 0.5_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn negative_below_cirrus_threshold() {
        let b_ci = cirrus_coverage(0.3, 0.6, 1.0);
        assert!(b_ci < 0.0);
        assert_relative_eq!(b_ci, 1.0 - 1.75_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn nan_above_saturation() {
        assert!(cirrus_coverage(1.2, 0.6, 1.0).is_nan());
    }

    #[test]
    fn degenerate_thresholds_do_not_panic() {
        assert!(cirrus_coverage(0.6, 0.6, 0.6).is_nan());
        assert!(cirrus_coverage(0.7, 0.6, 0.6).is_nan());
        assert_eq!(cirrus_coverage(0.5, 0.6, 0.6), f64::NEG_INFINITY);
    }

    #[test]
    fn field_is_elementwise() {
        let rhi = [1.0, 0.6, 0.8, 1.2];
        let field = cirrus_coverage_field(&rhi, 0.6, 1.0);

        assert_eq!(field.len(), rhi.len());
        for (&rhi, &b_ci) in rhi.iter().zip(&field) {
            assert_eq!(
                b_ci.to_bits(),
                cirrus_coverage(rhi, 0.6, 1.0).to_bits(),
                "rhi={rhi}"
            );
        }
    }
}
