use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};

/// Base dimensions available for units to represent. Every unit is a
/// formal product or quotient of zero or more of these.
///
/// These are the seven base SI dimensions, plus plane angle and
/// amount of information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
  Length,
  Time,
  Mass,
  Temperature,
  Current,
  LuminousIntensity,
  AmountOfSubstance,
  Angle,
  Memory,
}

pub const NDIMS: usize = 9;

impl Dimension {
  /// Every dimension, in canonical order. Display and serialization
  /// of units follow this order.
  pub const ALL: [Dimension; NDIMS] = [
    Dimension::Length,
    Dimension::Time,
    Dimension::Mass,
    Dimension::Temperature,
    Dimension::Current,
    Dimension::LuminousIntensity,
    Dimension::AmountOfSubstance,
    Dimension::Angle,
    Dimension::Memory,
  ];

  pub(crate) fn index(self) -> usize {
    match self {
      Dimension::Length => 0,
      Dimension::Time => 1,
      Dimension::Mass => 2,
      Dimension::Temperature => 3,
      Dimension::Current => 4,
      Dimension::LuminousIntensity => 5,
      Dimension::AmountOfSubstance => 6,
      Dimension::Angle => 7,
      Dimension::Memory => 8,
    }
  }
}

impl Display for Dimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Dimension::Length => write!(f, "length"),
      Dimension::Time => write!(f, "time"),
      Dimension::Mass => write!(f, "mass"),
      Dimension::Temperature => write!(f, "temperature"),
      Dimension::Current => write!(f, "current"),
      Dimension::LuminousIntensity => write!(f, "intensity"),
      Dimension::AmountOfSubstance => write!(f, "amount"),
      Dimension::Angle => write!(f, "angle"),
      Dimension::Memory => write!(f, "memory"),
    }
  }
}
