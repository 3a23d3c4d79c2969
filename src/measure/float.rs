//! Measures over `f64`, together with the usual floating point
//! helpers lifted to measures.

use super::error::MeasureError;
use super::generic::GenericMeasure;
use super::numeric::NumericOperations;
use crate::units::Power;

use std::cmp::Ordering;

/// Native double-precision arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatOperations;

pub type Measure = GenericMeasure<FloatOperations>;

impl NumericOperations for FloatOperations {
  type Value = f64;

  fn one() -> f64 {
    1.0
  }

  fn negate(value: &f64) -> f64 {
    -value
  }

  fn add(left: &f64, right: &f64) -> f64 {
    left + right
  }

  fn subtract(left: &f64, right: &f64) -> f64 {
    left - right
  }

  fn multiply(left: &f64, right: &f64) -> f64 {
    left * right
  }

  fn divide(left: &f64, right: &f64) -> f64 {
    left / right
  }

  fn power(value: &f64, exponent: &Power) -> f64 {
    let (numer, denom) = (*exponent.numer(), *exponent.denom());
    if denom == 1 {
      match i32::try_from(numer) {
        Ok(n) => value.powi(n),
        Err(_) => value.powf(numer as f64),
      }
    } else if numer == 1 && denom == 2 {
      value.sqrt()
    } else if numer == 1 && denom == 3 {
      value.cbrt()
    } else if *value < 0.0 && denom % 2 != 0 {
      // Odd roots of negative numbers are real.
      let magnitude = (-value).powf(numer as f64 / denom as f64);
      if numer % 2 == 0 { magnitude } else { -magnitude }
    } else {
      value.powf(numer as f64 / denom as f64)
    }
  }

  fn compare(left: &f64, right: &f64) -> Ordering {
    // NaN is ordered by the IEEE total order.
    left.partial_cmp(right).unwrap_or_else(|| left.total_cmp(right))
  }

  fn format(value: &f64) -> String {
    value.to_string()
  }
}

fn unary(measure: &Measure, f: fn(f64) -> f64) -> Measure {
  measure.unsafe_map(|x| f(*x), |unit| unit)
}

pub fn abs(measure: &Measure) -> Measure {
  unary(measure, f64::abs)
}

pub fn ceil(measure: &Measure) -> Measure {
  unary(measure, f64::ceil)
}

pub fn floor(measure: &Measure) -> Measure {
  unary(measure, f64::floor)
}

/// Rounds to the nearest value representable in single precision.
pub fn fround(measure: &Measure) -> Measure {
  unary(measure, |x| x as f32 as f64)
}

/// Rounds to the nearest integer, with halves rounding toward
/// positive infinity.
pub fn round(measure: &Measure) -> Measure {
  unary(measure, |x| {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
  })
}

pub fn trunc(measure: &Measure) -> Measure {
  unary(measure, f64::trunc)
}

/// The square root of the sum of squares of the measures, all of
/// which must have the same unit.
pub fn hypot<'a, I>(measures: I) -> Result<Measure, MeasureError>
where I: IntoIterator<Item = &'a Measure> {
  let mut measures = measures.into_iter();
  let first = measures.next().ok_or(MeasureError::NoOperands)?;
  measures.try_fold(abs(first), |acc, measure| {
    acc.check_same_unit(measure)?;
    Ok(acc.unsafe_map(|x| x.hypot(*measure.value()), |unit| unit))
  })
}

pub fn sqrt(measure: &Measure) -> Result<Measure, MeasureError> {
  let unit = measure.unit().sqrt()?;
  Ok(measure.unsafe_map(|x| x.sqrt(), |_| unit))
}

pub fn cbrt(measure: &Measure) -> Result<Measure, MeasureError> {
  let unit = measure.unit().cbrt()?;
  Ok(measure.unsafe_map(|x| x.cbrt(), |_| unit))
}
