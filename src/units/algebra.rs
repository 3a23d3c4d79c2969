//! Arithmetic on units. Multiplication and division of units are
//! point-wise addition and subtraction of exponent vectors, and
//! exponentiation scales the vector.
//!
//! Exponent arithmetic is checked. The `checked_*` methods and
//! [`TryPow`] report overflow as an [`ArithmeticError`]; the operator
//! impls panic on it.

use super::dimension::{Dimension, NDIMS};
use super::error::ArithmeticError;
use super::unit::{Unit, Exponent, Power};
use crate::util::{zip_with, TryPow};

use num::pow::Pow;
use num::traits::CheckedMul;

use std::ops::{Mul, Div};

impl Unit {
  /// Synonym for division, reading as "meters per second".
  pub fn per(self, other: impl Into<Unit>) -> Unit {
    self / other.into()
  }

  pub fn squared(self) -> Unit {
    self.pow(2)
  }

  pub fn cubed(self) -> Unit {
    self.pow(3)
  }

  pub fn reciprocal(self) -> Unit {
    self.pow(-1)
  }

  /// The product of two units, or an error if any exponent of the
  /// result overflows.
  pub fn checked_mul(self, rhs: Unit) -> Result<Unit, ArithmeticError> {
    let sums = zip_with(*self.as_complete(), *rhs.as_complete(), |a, b| a.checked_add(b));
    let mut exponents = [0; NDIMS];
    for (slot, sum) in exponents.iter_mut().zip(sums) {
      *slot = sum.ok_or_else(|| {
        log::debug!("Exponent overflow multiplying {} by {}", self, rhs);
        ArithmeticError::ProductOverflow { left: self, right: rhs }
      })?;
    }
    Ok(Unit::from_complete(exponents))
  }

  pub fn checked_div(self, rhs: Unit) -> Result<Unit, ArithmeticError> {
    self.checked_mul(rhs.checked_pow(-1)?)
  }

  pub fn checked_pow(self, power: i64) -> Result<Unit, ArithmeticError> {
    self.try_pow(Power::from_integer(power))
  }

  /// The `n`th root of this unit. Succeeds only if every exponent is
  /// divisible by `n`. The index must be nonzero and have a
  /// representable negation.
  pub fn nth_root(self, n: i64) -> Result<Unit, ArithmeticError> {
    if n == 0 || n == i64::MIN {
      log::debug!("Refusing to take the root of index {} of {}", n, self);
      return Err(ArithmeticError::InvalidRootIndex { unit: self, index: n });
    }
    self.try_pow(Power::new(1, n))
  }

  pub fn sqrt(self) -> Result<Unit, ArithmeticError> {
    self.nth_root(2)
  }

  pub fn cbrt(self) -> Result<Unit, ArithmeticError> {
    self.nth_root(3)
  }
}

enum ScaleFailure {
  NonIntegral,
  Overflow,
}

/// Scales an exponent by a rational power, if the result is still a
/// representable integer.
fn scale_exponent(exponent: Exponent, power: &Power) -> Result<Exponent, ScaleFailure> {
  let scaled = Power::from_integer(exponent).checked_mul(power).ok_or(ScaleFailure::Overflow)?;
  if scaled.is_integer() {
    Ok(scaled.to_integer())
  } else {
    Err(ScaleFailure::NonIntegral)
  }
}

/// # Panics
///
/// Panics if an exponent of the product overflows. See
/// [`Unit::checked_mul`].
impl Mul for Unit {
  type Output = Unit;

  fn mul(self, rhs: Unit) -> Unit {
    self.checked_mul(rhs).unwrap_or_else(|err| panic!("{}", err))
  }
}

impl Mul<Dimension> for Unit {
  type Output = Unit;

  fn mul(self, rhs: Dimension) -> Unit {
    self * Unit::basis(rhs)
  }
}

impl Div for Unit {
  type Output = Unit;

  #[allow(clippy::suspicious_arithmetic_impl)] // Multiply by reciprocal is correct
  fn div(self, rhs: Unit) -> Unit {
    self * rhs.reciprocal()
  }
}

impl Div<Dimension> for Unit {
  type Output = Unit;

  fn div(self, rhs: Dimension) -> Unit {
    self / Unit::basis(rhs)
  }
}

impl Mul for Dimension {
  type Output = Unit;

  fn mul(self, rhs: Dimension) -> Unit {
    Unit::basis(self) * Unit::basis(rhs)
  }
}

impl Mul<Unit> for Dimension {
  type Output = Unit;

  fn mul(self, rhs: Unit) -> Unit {
    Unit::basis(self) * rhs
  }
}

impl Div for Dimension {
  type Output = Unit;

  fn div(self, rhs: Dimension) -> Unit {
    Unit::basis(self) / Unit::basis(rhs)
  }
}

impl Div<Unit> for Dimension {
  type Output = Unit;

  fn div(self, rhs: Unit) -> Unit {
    Unit::basis(self) / rhs
  }
}

/// # Panics
///
/// Panics if a scaled exponent overflows. See [`Unit::checked_pow`].
impl Pow<i64> for Unit {
  type Output = Unit;

  fn pow(self, power: i64) -> Unit {
    self.checked_pow(power).unwrap_or_else(|err| panic!("{}", err))
  }
}

impl Pow<i64> for Dimension {
  type Output = Unit;

  fn pow(self, power: i64) -> Unit {
    Unit::basis(self).pow(power)
  }
}

impl TryPow<Power> for Unit {
  type Output = Unit;
  type Error = ArithmeticError;

  fn try_pow(self, power: Power) -> Result<Unit, ArithmeticError> {
    let mut exponents = [0; NDIMS];
    for (slot, exponent) in exponents.iter_mut().zip(self.as_complete()) {
      *slot = scale_exponent(*exponent, &power).map_err(|failure| {
        log::debug!("Cannot raise {} to the power {}", self, power);
        match failure {
          ScaleFailure::NonIntegral => ArithmeticError::NonIntegralExponent { unit: self, power },
          ScaleFailure::Overflow => ArithmeticError::PowerOverflow { unit: self, power },
        }
      })?;
    }
    Ok(Unit::from_complete(exponents))
  }
}
