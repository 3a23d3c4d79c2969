use super::dimension::{Dimension, NDIMS};

use itertools::Itertools;
use num::One;
use num::rational::Ratio;
use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;
use std::fmt::{self, Formatter, Display};

/// The power of a single [`Dimension`] within a [`Unit`].
pub type Exponent = i64;

/// A power that a unit may be raised to. Integer powers always
/// succeed; fractional powers succeed only when every exponent of the
/// unit scales to an integer.
pub type Power = Ratio<i64>;

/// A unit is a formal product and quotient of zero or more
/// [`Dimension`] values, stored as a vector of exponents.
///
/// Internally, every dimension is present (the "complete" form), with
/// unused dimensions at zero. [`Unit::components`] gives the "minimal"
/// form, which omits the zeroes. Two units are equal exactly when
/// their complete forms are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Dimension, Exponent>", from = "BTreeMap<Dimension, Exponent>")]
pub struct Unit {
  exponents: [Exponent; NDIMS],
}

impl Unit {
  /// The dimensionless unit. Every exponent is zero.
  pub const fn scalar() -> Self {
    Self { exponents: [0; NDIMS] }
  }

  /// The unit with exponent 1 on `dimension` and 0 everywhere else.
  pub fn basis(dimension: Dimension) -> Self {
    let mut exponents = [0; NDIMS];
    exponents[dimension.index()] = 1;
    Self { exponents }
  }

  pub const fn from_complete(exponents: [Exponent; NDIMS]) -> Self {
    Self { exponents }
  }

  /// The complete form of this unit, indexed in the order of
  /// [`Dimension::ALL`].
  pub fn as_complete(&self) -> &[Exponent; NDIMS] {
    &self.exponents
  }

  pub fn get(&self, dimension: Dimension) -> Exponent {
    self.exponents[dimension.index()]
  }

  pub fn is_scalar(&self) -> bool {
    self.exponents.iter().all(|x| *x == 0)
  }

  /// The minimal form of this unit: each dimension with a nonzero
  /// exponent, in canonical order.
  pub fn components(&self) -> impl Iterator<Item = (Dimension, Exponent)> + '_ {
    Dimension::ALL.iter()
      .copied()
      .zip(self.exponents.iter().copied())
      .filter(|(_, x)| *x != 0)
  }
}

impl From<Dimension> for Unit {
  fn from(dimension: Dimension) -> Self {
    Unit::basis(dimension)
  }
}

/// Builds a unit out of (dimension, exponent) pairs. Dimensions which
/// appear more than once have their exponents summed, and missing
/// dimensions are zero.
///
/// # Panics
///
/// Panics if a summed exponent overflows.
impl FromIterator<(Dimension, Exponent)> for Unit {
  fn from_iter<I>(iter: I) -> Self
  where I: IntoIterator<Item = (Dimension, Exponent)> {
    let mut exponents: [Exponent; NDIMS] = [0; NDIMS];
    for (dimension, exponent) in iter {
      let slot = &mut exponents[dimension.index()];
      *slot = slot.checked_add(exponent).unwrap_or_else(|| {
        panic!("Exponent overflow summing powers of {}", dimension)
      });
    }
    Unit { exponents }
  }
}

impl From<BTreeMap<Dimension, Exponent>> for Unit {
  fn from(map: BTreeMap<Dimension, Exponent>) -> Self {
    map.into_iter().collect()
  }
}

impl From<Unit> for BTreeMap<Dimension, Exponent> {
  fn from(unit: Unit) -> Self {
    unit.components().collect()
  }
}

impl One for Unit {
  fn one() -> Self {
    Unit::scalar()
  }

  fn is_one(&self) -> bool {
    self.is_scalar()
  }
}

fn write_power(dim: Dimension, power: Exponent) -> String {
  if power == 1 {
    dim.to_string()
  } else {
    format!("{}^{}", dim, power)
  }
}

impl Display for Unit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let (numerator, denominator): (Vec<_>, Vec<_>) = self.components()
      .partition(|(_, power)| *power > 0);
    if numerator.is_empty() {
      write!(f, "1")?;
    } else {
      let numerator = numerator.into_iter()
        .map(|(dim, power)| write_power(dim, power))
        .join(" ");
      write!(f, "{}", numerator)?;
    }
    if !denominator.is_empty() {
      let denominator = denominator.into_iter()
        .map(|(dim, power)| write_power(dim, -power))
        .join(" ");
      write!(f, " / {}", denominator)?;
    }
    Ok(())
  }
}
