//! Unit algebra. A unit is a vector of exponents over a fixed set of
//! base dimensions, and combining units is vector arithmetic.

pub mod algebra;
pub mod dimension;
pub mod error;
pub mod unit;

pub use dimension::{Dimension, NDIMS};
pub use error::ArithmeticError;
pub use unit::{Unit, Exponent, Power};
