use super::basis::MeasureBasis;
use super::error::MeasureError;
use super::numeric::NumericOperations;
use crate::units::{Unit, Power};
use crate::util::TryPow;

use serde::{Serialize, Deserialize};

use std::cmp::Ordering;
use std::fmt::{self, Formatter, Display, Debug};
use std::marker::PhantomData;
use std::ops::{Neg, Mul, Div};

/// A value tagged with a unit. The value type, and all arithmetic on
/// it, is supplied by the strategy `N`.
///
/// Measures are immutable. Every operation produces a new measure, and
/// a failed operation leaves its operands untouched.
#[derive(Serialize, Deserialize)]
#[serde(bound(
  serialize = "N::Value: Serialize",
  deserialize = "N::Value: Deserialize<'de>",
))]
pub struct GenericMeasure<N: NumericOperations> {
  value: N::Value,
  unit: Unit,
  #[serde(skip)]
  _ops: PhantomData<N>,
}

impl<N: NumericOperations> GenericMeasure<N> {
  pub fn new(value: N::Value, unit: Unit) -> Self {
    Self { value, unit, _ops: PhantomData }
  }

  /// Measures `value` against `basis`. If `basis` is a unit, the
  /// result is simply `value` in that unit. If `basis` is another
  /// measure, that measure acts as a scaled unit: 5.2 of a 1000 meter
  /// measure is 5200 meters.
  pub fn of(value: N::Value, basis: impl MeasureBasis<N>) -> Self {
    basis.measure(value)
  }

  /// A dimensionless measure.
  pub fn scalar(value: N::Value) -> Self {
    Self::new(value, Unit::scalar())
  }

  pub fn value(&self) -> &N::Value {
    &self.value
  }

  pub fn unit(&self) -> &Unit {
    &self.unit
  }

  pub fn into_parts(self) -> (N::Value, Unit) {
    (self.value, self.unit)
  }

  pub fn negate(&self) -> Self {
    Self::new(N::negate(&self.value), self.unit)
  }

  pub fn plus(&self, other: &Self) -> Result<Self, MeasureError> {
    self.check_same_unit(other)?;
    Ok(Self::new(N::add(&self.value, &other.value), self.unit))
  }

  pub fn minus(&self, other: &Self) -> Result<Self, MeasureError> {
    self.check_same_unit(other)?;
    Ok(Self::new(N::subtract(&self.value, &other.value), self.unit))
  }

  /// # Panics
  ///
  /// Panics if an exponent of the product unit overflows. See
  /// [`GenericMeasure::checked_times`].
  pub fn times(&self, other: &Self) -> Self {
    Self::new(N::multiply(&self.value, &other.value), self.unit * other.unit)
  }

  /// # Panics
  ///
  /// Panics if an exponent of the quotient unit overflows. See
  /// [`GenericMeasure::checked_over`].
  pub fn over(&self, other: &Self) -> Self {
    Self::new(N::divide(&self.value, &other.value), self.unit / other.unit)
  }

  pub fn checked_times(&self, other: &Self) -> Result<Self, MeasureError> {
    let unit = self.unit.checked_mul(other.unit)?;
    Ok(Self::new(N::multiply(&self.value, &other.value), unit))
  }

  pub fn checked_over(&self, other: &Self) -> Result<Self, MeasureError> {
    let unit = self.unit.checked_div(other.unit)?;
    Ok(Self::new(N::divide(&self.value, &other.value), unit))
  }

  /// Raises the measure to an integer power. Fails only if an
  /// exponent of the unit overflows.
  pub fn to_the(&self, power: i64) -> Result<Self, MeasureError> {
    self.to_the_ratio(Power::from_integer(power))
  }

  /// Raises the measure to a rational power. Fails if some exponent
  /// of the unit would stop being an integer.
  pub fn to_the_ratio(&self, power: Power) -> Result<Self, MeasureError> {
    let unit = self.unit.try_pow(power)?;
    Ok(Self::new(N::power(&self.value, &power), unit))
  }

  pub fn nth_root(&self, n: i64) -> Result<Self, MeasureError> {
    let unit = self.unit.nth_root(n)?;
    Ok(self.unsafe_map(|value| N::power(value, &Power::new(1, n)), |_| unit))
  }

  pub fn sqrt(&self) -> Result<Self, MeasureError> {
    self.nth_root(2)
  }

  pub fn cbrt(&self) -> Result<Self, MeasureError> {
    self.nth_root(3)
  }

  /// Applies arbitrary functions to the value and the unit. Nothing
  /// checks that the two results belong together; the caller is
  /// responsible for dimensional correctness. This is not `unsafe` in
  /// the memory-safety sense.
  pub fn unsafe_map<F, G>(&self, value_fn: F, unit_fn: G) -> Self
  where F: FnOnce(&N::Value) -> N::Value,
        G: FnOnce(Unit) -> Unit {
    Self::new(value_fn(&self.value), unit_fn(self.unit))
  }

  /// Compares two measures of the same unit.
  pub fn compare(&self, other: &Self) -> Result<Ordering, MeasureError> {
    self.check_same_unit(other)?;
    Ok(N::compare(&self.value, &other.value))
  }

  pub fn is_less_than(&self, other: &Self) -> Result<bool, MeasureError> {
    self.compare(other).map(Ordering::is_lt)
  }

  pub fn is_less_than_or_equal_to(&self, other: &Self) -> Result<bool, MeasureError> {
    self.compare(other).map(Ordering::is_le)
  }

  pub fn is_equal_to(&self, other: &Self) -> Result<bool, MeasureError> {
    self.compare(other).map(Ordering::is_eq)
  }

  pub fn is_not_equal_to(&self, other: &Self) -> Result<bool, MeasureError> {
    self.compare(other).map(Ordering::is_ne)
  }

  pub fn is_greater_than_or_equal_to(&self, other: &Self) -> Result<bool, MeasureError> {
    self.compare(other).map(Ordering::is_ge)
  }

  pub fn is_greater_than(&self, other: &Self) -> Result<bool, MeasureError> {
    self.compare(other).map(Ordering::is_gt)
  }

  pub(super) fn check_same_unit(&self, other: &Self) -> Result<(), MeasureError> {
    if self.unit == other.unit {
      Ok(())
    } else {
      log::debug!("Unit mismatch between {} and {}", self.unit, other.unit);
      Err(MeasureError::UnitMismatch { left: self.unit, right: other.unit })
    }
  }
}

// Derived impls would require `N: Clone`, `N: Debug` and
// `N: PartialEq` on the strategy type itself.

impl<N: NumericOperations> Clone for GenericMeasure<N> {
  fn clone(&self) -> Self {
    Self::new(self.value.clone(), self.unit)
  }
}

impl<N: NumericOperations> Debug for GenericMeasure<N> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_struct("GenericMeasure")
      .field("value", &self.value)
      .field("unit", &self.unit)
      .finish()
  }
}

impl<N> PartialEq for GenericMeasure<N>
where N: NumericOperations,
      N::Value: PartialEq {
  fn eq(&self, other: &Self) -> bool {
    self.value == other.value && self.unit == other.unit
  }
}

impl<N: NumericOperations> Display for GenericMeasure<N> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.unit.is_scalar() {
      write!(f, "{}", N::format(&self.value))
    } else {
      write!(f, "{} {}", N::format(&self.value), self.unit)
    }
  }
}

impl<N: NumericOperations> Neg for GenericMeasure<N> {
  type Output = GenericMeasure<N>;

  fn neg(self) -> Self::Output {
    self.negate()
  }
}

impl<'a, N: NumericOperations> Neg for &'a GenericMeasure<N> {
  type Output = GenericMeasure<N>;

  fn neg(self) -> Self::Output {
    self.negate()
  }
}

impl<N: NumericOperations> Mul for GenericMeasure<N> {
  type Output = GenericMeasure<N>;

  fn mul(self, rhs: Self) -> Self::Output {
    self.times(&rhs)
  }
}

impl<'a, N: NumericOperations> Mul for &'a GenericMeasure<N> {
  type Output = GenericMeasure<N>;

  fn mul(self, rhs: Self) -> Self::Output {
    self.times(rhs)
  }
}

impl<N: NumericOperations> Div for GenericMeasure<N> {
  type Output = GenericMeasure<N>;

  fn div(self, rhs: Self) -> Self::Output {
    self.over(&rhs)
  }
}

impl<'a, N: NumericOperations> Div for &'a GenericMeasure<N> {
  type Output = GenericMeasure<N>;

  fn div(self, rhs: Self) -> Self::Output {
    self.over(rhs)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::{Dimension, ArithmeticError};

  use num::pow::Pow;

  /// Exact integer arithmetic, to check that nothing in the measure
  /// itself is specific to floating point.
  struct IntegerOperations;

  impl NumericOperations for IntegerOperations {
    type Value = i64;

    fn one() -> i64 {
      1
    }

    fn negate(value: &i64) -> i64 {
      -value
    }

    fn add(left: &i64, right: &i64) -> i64 {
      left + right
    }

    fn subtract(left: &i64, right: &i64) -> i64 {
      left - right
    }

    fn multiply(left: &i64, right: &i64) -> i64 {
      left * right
    }

    fn divide(left: &i64, right: &i64) -> i64 {
      left / right
    }

    fn power(value: &i64, exponent: &Power) -> i64 {
      if *exponent.denom() == 1 {
        let n = *exponent.numer();
        if n >= 0 {
          value.pow(n as u32)
        } else {
          Self::one() / value.pow((-n) as u32)
        }
      } else {
        let exponent = *exponent.numer() as f64 / *exponent.denom() as f64;
        (*value as f64).powf(exponent).round() as i64
      }
    }

    fn compare(left: &i64, right: &i64) -> Ordering {
      left.cmp(right)
    }

    fn format(value: &i64) -> String {
      value.to_string()
    }
  }

  type IntMeasure = GenericMeasure<IntegerOperations>;

  fn meter() -> Unit {
    Unit::basis(Dimension::Length)
  }

  fn second() -> Unit {
    Unit::basis(Dimension::Time)
  }

  #[test]
  fn test_of_unit() {
    let measure = IntMeasure::of(10, meter().per(second()));
    assert_eq!(measure.value(), &10);
    assert_eq!(measure.unit(), &meter().per(second()));
  }

  #[test]
  fn test_of_dimension() {
    let measure = IntMeasure::of(3, Dimension::Mass);
    assert_eq!(measure.unit(), &Unit::basis(Dimension::Mass));
  }

  #[test]
  fn test_of_measure_scales_value() {
    let kilometer = IntMeasure::of(1000, meter());
    let measure = IntMeasure::of(7, &kilometer);
    assert_eq!(measure.value(), &7000);
    assert_eq!(measure.unit(), &meter());
    // The scaling measure is still usable afterward.
    assert_eq!(kilometer.value(), &1000);
  }

  #[test]
  fn test_scalar() {
    let measure = IntMeasure::scalar(3);
    assert_eq!(measure.into_parts(), (3, Unit::scalar()));
  }

  #[test]
  fn test_plus_and_minus() {
    let left = IntMeasure::of(10, second());
    let right = IntMeasure::of(4, second());
    assert_eq!(left.plus(&right), Ok(IntMeasure::of(14, second())));
    assert_eq!(left.minus(&right), Ok(IntMeasure::of(6, second())));
  }

  #[test]
  fn test_plus_mismatched_units() {
    let left = IntMeasure::of(10, second());
    let right = IntMeasure::of(4, meter());
    assert_eq!(
      left.plus(&right),
      Err(MeasureError::UnitMismatch { left: second(), right: meter() }),
    );
    assert_eq!(
      left.minus(&right),
      Err(MeasureError::UnitMismatch { left: second(), right: meter() }),
    );
    assert_eq!(left, IntMeasure::of(10, second()));
  }

  #[test]
  fn test_plus_negation_is_zero() {
    let value = IntMeasure::of(17, meter().squared());
    let sum = value.plus(&value.negate()).unwrap();
    assert_eq!(sum.value(), &0);
    assert_eq!(sum.unit(), &meter().squared());
  }

  #[test]
  fn test_times_and_over() {
    let speed = IntMeasure::of(10, meter().per(second()));
    let time = IntMeasure::of(5, second());
    assert_eq!(speed.times(&time), IntMeasure::of(50, meter()));
    assert_eq!(speed.over(&time), IntMeasure::of(2, meter().per(second()).per(second())));
    assert_eq!(&speed * &time, IntMeasure::of(50, meter()));
    assert_eq!(speed.clone() / time.clone(), IntMeasure::of(2, meter() / second().squared()));
  }

  #[test]
  fn test_neg_operator() {
    let value = IntMeasure::of(3, meter());
    assert_eq!(-&value, IntMeasure::of(-3, meter()));
    assert_eq!(-value, IntMeasure::of(-3, meter()));
  }

  #[test]
  fn test_to_the() {
    let value = IntMeasure::of(10, meter());
    assert_eq!(value.to_the(0), Ok(IntMeasure::scalar(1)));
    assert_eq!(value.to_the(1), Ok(value.clone()));
    assert_eq!(value.to_the(3), Ok(IntMeasure::of(1000, meter().cubed())));
    assert_eq!(value.to_the_ratio(Power::from_integer(2)), Ok(IntMeasure::of(100, meter().squared())));
  }

  #[test]
  fn test_to_the_exponent_overflow() {
    let area = IntMeasure::of(2, meter().squared());
    assert_eq!(
      area.to_the(i64::MAX),
      Err(MeasureError::Arithmetic(ArithmeticError::PowerOverflow {
        unit: meter().squared(),
        power: Power::from_integer(i64::MAX),
      })),
    );
    assert!(IntMeasure::of(1, meter()).to_the(i64::MAX).is_ok());
  }

  #[test]
  fn test_checked_times_and_over() {
    let speed = IntMeasure::of(10, meter().per(second()));
    let time = IntMeasure::of(5, second());
    assert_eq!(speed.checked_times(&time), Ok(IntMeasure::of(50, meter())));
    assert_eq!(speed.checked_over(&time), Ok(speed.over(&time)));

    let huge = IntMeasure::of(1, meter().pow(i64::MAX));
    let length = IntMeasure::of(1, meter());
    assert!(matches!(
      huge.checked_times(&length),
      Err(MeasureError::Arithmetic(ArithmeticError::ProductOverflow { .. })),
    ));
    assert!(huge.checked_over(&length).is_ok());
  }

  #[test]
  #[should_panic(expected = "exponent overflow")]
  fn test_times_panics_on_exponent_overflow() {
    let huge = IntMeasure::of(1, meter().pow(i64::MAX));
    let _ = huge.times(&IntMeasure::of(1, meter()));
  }

  #[test]
  fn test_to_the_fraction() {
    let value = IntMeasure::of(16, meter().pow(4));
    assert_eq!(value.to_the_ratio(Power::new(1, 2)), Ok(IntMeasure::of(4, meter().squared())));
    assert_eq!(value.to_the_ratio(Power::new(3, 4)), Ok(IntMeasure::of(8, meter().cubed())));
    assert!(matches!(value.to_the_ratio(Power::new(1, 3)), Err(MeasureError::Arithmetic(_))));
  }

  #[test]
  fn test_roots() {
    assert_eq!(IntMeasure::of(49, meter().squared()).sqrt(), Ok(IntMeasure::of(7, meter())));
    assert_eq!(IntMeasure::of(27, second().cubed()).cbrt(), Ok(IntMeasure::of(3, second())));
    assert!(IntMeasure::of(27, second()).cbrt().is_err());
    assert!(IntMeasure::of(27, second()).nth_root(0).is_err());
  }

  #[test]
  fn test_nth_root_of_minimum_index() {
    assert_eq!(
      IntMeasure::of(1, meter()).nth_root(i64::MIN),
      Err(MeasureError::Arithmetic(ArithmeticError::InvalidRootIndex { unit: meter(), index: i64::MIN })),
    );
    assert!(IntMeasure::scalar(1).nth_root(i64::MIN).is_err());
  }

  #[test]
  fn test_unsafe_map() {
    let value = IntMeasure::of(5, meter());
    let mapped = value.unsafe_map(|x| x * 2, |u| u * second());
    assert_eq!(mapped, IntMeasure::of(10, meter() * second()));
  }

  #[test]
  fn test_comparisons() {
    let zero = IntMeasure::of(0, meter());
    let five = IntMeasure::of(5, meter());
    let ten = IntMeasure::of(10, meter());
    assert_eq!(five.compare(&zero), Ok(Ordering::Greater));
    assert_eq!(five.is_less_than(&ten), Ok(true));
    assert_eq!(five.is_less_than_or_equal_to(&five), Ok(true));
    assert_eq!(five.is_equal_to(&ten), Ok(false));
    assert_eq!(five.is_not_equal_to(&zero), Ok(true));
    assert_eq!(five.is_greater_than_or_equal_to(&ten), Ok(false));
    assert_eq!(five.is_greater_than(&zero), Ok(true));
  }

  #[test]
  fn test_comparison_mismatched_units() {
    let five_meters = IntMeasure::of(5, meter());
    let five_seconds = IntMeasure::of(5, second());
    assert!(five_meters.is_equal_to(&five_seconds).is_err());
    assert!(five_meters.is_less_than(&five_seconds).is_err());
    assert!(five_meters.compare(&five_seconds).is_err());
  }

  #[test]
  fn test_display() {
    assert_eq!(IntMeasure::scalar(4).to_string(), "4");
    assert_eq!(IntMeasure::of(4, meter().per(second())).to_string(), "4 length / time");
  }

  #[test]
  fn test_serde() {
    let value = IntMeasure::of(9, meter().per(second()));
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"value":9,"unit":{"length":1,"time":-1}}"#);
    let back: IntMeasure = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
  }
}
