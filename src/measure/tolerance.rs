use super::generic::GenericMeasure;
use super::numeric::NumericOperations;

use approx::{AbsDiffEq, RelativeEq};

// Measures of different units are never approximately equal, no
// matter the tolerance.

impl<N> AbsDiffEq for GenericMeasure<N>
where N: NumericOperations,
      N::Value: AbsDiffEq {
  type Epsilon = <N::Value as AbsDiffEq>::Epsilon;

  fn default_epsilon() -> Self::Epsilon {
    <N::Value as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
    self.unit() == other.unit() && self.value().abs_diff_eq(other.value(), epsilon)
  }
}

impl<N> RelativeEq for GenericMeasure<N>
where N: NumericOperations,
      N::Value: RelativeEq {
  fn default_max_relative() -> Self::Epsilon {
    <N::Value as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
    self.unit() == other.unit() && self.value().relative_eq(other.value(), epsilon, max_relative)
  }
}
