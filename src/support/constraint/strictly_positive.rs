use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Threshold validation uses this for the gaps between consecutive humidity
/// thresholds, since every coverage equation divides by `RHi_sat - RHi_ci`.
///
/// # Examples
///
/// ```
/// use contrail_models::support::constraint::{Constrained, StrictlyPositive};
///
/// // Generic constructor:
/// let gap = Constrained::<_, StrictlyPositive>::new(1.0 - 0.6).unwrap();
/// assert!(gap.into_inner() > 0.0);
///
/// // Associated constructor:
/// let y = StrictlyPositive::new(0.2).unwrap();
/// assert_eq!(y.into_inner(), 0.2);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0.6 - 0.6).is_err());
/// assert!(StrictlyPositive::new(-0.1).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
