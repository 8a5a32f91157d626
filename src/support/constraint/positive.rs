use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// # Examples
///
/// ```
/// use teg_models::support::constraint::StrictlyPositive;
/// use teg_models::support::units::thermal_resistance_k_per_w;
///
/// assert!(StrictlyPositive::new(thermal_resistance_k_per_w(1.52)).is_ok());
/// assert!(StrictlyPositive::new(thermal_resistance_k_per_w(0.0)).is_err());
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
    ) -> ConstraintResult<Constrained<T, StrictlyPositive>> {
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

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// # Examples
///
/// ```
/// use teg_models::support::constraint::NonNegative;
///
/// // A zero electronics allowance is valid, a negative one is not.
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, NonNegative>> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance, f64::Power, power::watt};

    #[test]
    fn strictly_positive_floats() {
        assert!(StrictlyPositive::new(0.000_375).is_ok());
        assert!(matches!(
            StrictlyPositive::new(0.0),
            Err(ConstraintError::Zero)
        ));
        assert!(matches!(
            StrictlyPositive::new(-0.04),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn strictly_positive_integers() {
        assert!(StrictlyPositive::new(1620_u32).is_ok());
        assert!(StrictlyPositive::new(0_u32).is_err());
    }

    #[test]
    fn strictly_positive_quantities() {
        let internal = ElectricalResistance::new::<ohm>(1.5);
        assert_eq!(StrictlyPositive::new(internal).unwrap().into_inner(), internal);
        assert!(StrictlyPositive::check(&ElectricalResistance::new::<ohm>(0.0)).is_err());
    }

    #[test]
    fn non_negative_quantities() {
        assert!(NonNegative::new(Power::new::<watt>(0.0)).is_ok());
        assert!(NonNegative::new(Power::new::<watt>(3.0)).is_ok());
        assert!(matches!(
            NonNegative::check(&Power::new::<watt>(-1.0)),
            Err(ConstraintError::Negative)
        ));
    }
}
