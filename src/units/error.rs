use super::unit::{Unit, Power};

use thiserror::Error;

/// A unit operation whose result cannot be represented as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ArithmeticError {
  #[error("Cannot raise {unit} to the power {power}: exponents must remain integers")]
  NonIntegralExponent { unit: Unit, power: Power },
  #[error("Cannot raise {unit} to the power {power}: exponent overflow")]
  PowerOverflow { unit: Unit, power: Power },
  #[error("Cannot multiply {left} by {right}: exponent overflow")]
  ProductOverflow { left: Unit, right: Unit },
  #[error("Cannot take the root of index {index} of {unit}")]
  InvalidRootIndex { unit: Unit, index: i64 },
}
