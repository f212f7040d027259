use super::cirrus_coverage;

/// Returns `RHi_star`, the humidity at which the grid box is fully covered by
/// contrail cirrus (Eq. 3).
///
/// ```text
/// RHi_star = RHi_sat - (RHi_ci - RHi_cc)^2 / (RHi_sat - RHi_ci)
/// ```
///
/// The caller must ensure `rhi_sat != rhi_ci`; otherwise the result is
/// `-inf` (or `NaN` when `rhi_ci == rhi_cc` as well).
#[must_use]
pub fn rhi_star(rhi_sat: f64, rhi_ci: f64, rhi_cc: f64) -> f64 {
    rhi_sat - (rhi_ci - rhi_cc).powi(2) / (rhi_sat - rhi_ci)
}

/// Returns the potential contrail cirrus coverage `B_cc_ci` of a grid box (Eq. 3).
///
/// For `RHi <= RHi_star`:
///
/// ```text
/// b_ci    = max(0, cirrus_coverage(RHi, RHi_ci, RHi_sat))
/// B_cc_ci = (RHi - RHi_cc) / (RHi_sat - RHi_ci) - b_ci * (1 - b_ci)
/// ```
///
/// For `RHi > RHi_star` the grid box is fully covered and the result is exactly `1.0`.
///
/// Values below `RHi_cc` yield a negative coverage, which is returned as is.
/// A `NaN` humidity yields `NaN`.
#[must_use]
pub fn contrail_cirrus_coverage(rhi: f64, rhi_ci: f64, rhi_cc: f64, rhi_sat: f64) -> f64 {
    let rhi_star = rhi_star(rhi_sat, rhi_ci, rhi_cc);
    coverage_given_star(rhi, rhi_star, rhi_ci, rhi_cc, rhi_sat)
}

/// Applies [`contrail_cirrus_coverage`] to each element of `rhi`.
///
/// `RHi_star` depends only on the thresholds and is computed once.
/// The input is only borrowed; the override for `RHi > RHi_star` is a
/// selection into the returned vector.
#[must_use]
pub fn contrail_cirrus_coverage_field(
    rhi: &[f64],
    rhi_ci: f64,
    rhi_cc: f64,
    rhi_sat: f64,
) -> Vec<f64> {
    let rhi_star = rhi_star(rhi_sat, rhi_ci, rhi_cc);
    rhi.iter()
        .map(|&rhi| coverage_given_star(rhi, rhi_star, rhi_ci, rhi_cc, rhi_sat))
        .collect()
}

#[inline]
fn coverage_given_star(rhi: f64, rhi_star: f64, rhi_ci: f64, rhi_cc: f64, rhi_sat: f64) -> f64 {
    if rhi > rhi_star {
        return 1.0;
    }
    let b_ci = floor_at_zero(cirrus_coverage(rhi, rhi_ci, rhi_sat));
    (rhi - rhi_cc) / (rhi_sat - rhi_ci) - b_ci * (1.0 - b_ci)
}

/// `max(0, x)` that keeps `NaN`, unlike [`f64::max`].
#[inline]
fn floor_at_zero(x: f64) -> f64 {
    if x < 0.0 { 0.0 } else { x }
}
