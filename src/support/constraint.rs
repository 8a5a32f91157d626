//! Type-level numeric constraints.
//!
//! Physical inputs to the array models carry simple invariants: resistances
//! and lengths are strictly positive, allowances are non-negative, and
//! efficiencies lie in the unit interval. The marker types here express
//! those invariants and are checked once, at construction or validation time.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1`
//! - [`UnitIntervalLowerOpen`]: Lower-open unit interval `0 < x ≤ 1`
//! - [`UnitIntervalUpperOpen`]: Upper-open unit interval `0 ≤ x < 1`
//!
//! Configuration fields whose range never changes hold a [`Constrained<T, C>`]
//! so the invariant travels with the value. Inputs validated together as a
//! group go through [`Constraint::check`] instead.

mod positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use positive::{NonNegative, StrictlyPositive};
pub use unit_interval::{
    UnitBounds, UnitInterval, UnitIntervalLowerOpen, UnitIntervalUpperOpen,
};

/// A trait for enforcing numeric invariants.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use teg_models::support::constraint::{Constrained, UnitIntervalLowerOpen};
///
/// let pump_efficiency = Constrained::<_, UnitIntervalLowerOpen>::new(0.65).unwrap();
/// assert_eq!(pump_efficiency.into_inner(), 0.65);
///
/// assert!(Constrained::<f64, UnitIntervalLowerOpen>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Wraps a value without checking it.
    ///
    /// # Warning
    ///
    /// The caller must ensure `value` satisfies the constraint. This is meant
    /// for literal defaults known to be in range.
    pub const fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
