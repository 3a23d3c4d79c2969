use crate::units::Power;

use std::cmp::Ordering;
use std::fmt::Debug;

/// The arithmetic a numeric type must support to be used as the value
/// of a [`GenericMeasure`](super::GenericMeasure).
///
/// An implementation is a strategy type, usually a unit struct, naming
/// the value type it operates on. Supporting a new numeric
/// representation only requires a new implementation of this trait.
pub trait NumericOperations {
  type Value: Clone + Debug;

  /// The multiplicative identity.
  fn one() -> Self::Value;

  fn negate(value: &Self::Value) -> Self::Value;

  fn add(left: &Self::Value, right: &Self::Value) -> Self::Value;

  fn subtract(left: &Self::Value, right: &Self::Value) -> Self::Value;

  fn multiply(left: &Self::Value, right: &Self::Value) -> Self::Value;

  fn divide(left: &Self::Value, right: &Self::Value) -> Self::Value;

  /// Raises `value` to a (possibly fractional) power. Fractional
  /// powers are only requested for roots whose unit has already been
  /// validated.
  fn power(value: &Self::Value, exponent: &Power) -> Self::Value;

  /// Compares two values. This must be a total order for measures to
  /// compare consistently.
  fn compare(left: &Self::Value, right: &Self::Value) -> Ordering;

  fn format(value: &Self::Value) -> String;
}
