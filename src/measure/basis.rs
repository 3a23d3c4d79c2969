use super::generic::GenericMeasure;
use super::numeric::NumericOperations;
use crate::units::{Unit, Dimension};

/// Something a value can be measured against: a unit, or an existing
/// measure acting as a scaled unit.
pub trait MeasureBasis<N: NumericOperations> {
  fn measure(self, value: N::Value) -> GenericMeasure<N>;
}

impl<N: NumericOperations> MeasureBasis<N> for Unit {
  fn measure(self, value: N::Value) -> GenericMeasure<N> {
    GenericMeasure::new(value, self)
  }
}

impl<N: NumericOperations> MeasureBasis<N> for Dimension {
  fn measure(self, value: N::Value) -> GenericMeasure<N> {
    GenericMeasure::new(value, Unit::basis(self))
  }
}

impl<'a, N: NumericOperations> MeasureBasis<N> for &'a GenericMeasure<N> {
  fn measure(self, value: N::Value) -> GenericMeasure<N> {
    GenericMeasure::new(N::multiply(&value, self.value()), *self.unit())
  }
}

impl<N: NumericOperations> MeasureBasis<N> for GenericMeasure<N> {
  fn measure(self, value: N::Value) -> GenericMeasure<N> {
    (&self).measure(value)
  }
}
