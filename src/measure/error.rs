use crate::units::{Unit, ArithmeticError};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MeasureError {
  #[error("Unit mismatch: expected {left}, got {right}")]
  UnitMismatch { left: Unit, right: Unit },
  #[error("{0}")]
  Arithmetic(#[from] ArithmeticError),
  #[error("Expected at least one measure")]
  NoOperands,
}
