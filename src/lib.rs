//! Dimensional analysis. A [`Measure`] is a number tagged with a
//! [`Unit`], and a unit is a vector of exponents over the base
//! [`Dimension`]s. Arithmetic on measures only succeeds when it makes
//! sense dimensionally: sums need equal units, products combine units,
//! and roots need exponents that divide evenly.

pub mod measure;
pub mod units;
pub mod util;

pub use measure::{GenericMeasure, Measure, MeasureBasis, MeasureError,
                  NumericOperations, FloatOperations};
pub use units::{Dimension, Unit, Exponent, Power, ArithmeticError};
