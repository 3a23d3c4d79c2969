//! Quantities: a value paired with a [`Unit`](crate::units::Unit).
//!
//! [`GenericMeasure`] is parameterized over a [`NumericOperations`]
//! strategy which does all arithmetic on the value, while the unit is
//! handled by the unit algebra. [`Measure`] is the `f64` instantiation.

pub mod basis;
pub mod error;
pub mod float;
pub mod generic;
pub mod numeric;
mod tolerance;

pub use basis::MeasureBasis;
pub use error::MeasureError;
pub use float::{Measure, FloatOperations};
pub use generic::GenericMeasure;
pub use numeric::NumericOperations;
