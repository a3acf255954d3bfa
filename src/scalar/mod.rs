use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};

/// Element type of state vectors, time grids and trajectories.
pub trait Scalar:
    nalgebra::RealField
    + num_traits::FromPrimitive
    + num_traits::ToPrimitive
    + Serialize
    + DeserializeOwned
    + Display
    + Copy
    + PartialOrd
{
    /// Lossy conversion used for error reporting and plotting.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Scalar for f64 {}

impl Scalar for f32 {}

/// Convert an `f64` literal into any [Scalar].
#[inline]
pub fn scalar<T: Scalar>(value: f64) -> T {
    nalgebra::convert(value)
}

#[test]
fn test_scalar_conversion() {
    assert_eq!(scalar::<f64>(0.25), 0.25);
    assert_eq!(scalar::<f32>(0.25), 0.25f32);
    assert_eq!(1.5f32.as_f64(), 1.5);
}
