use nalgebra::RealField;
use num_traits::{FromPrimitive, ToPrimitive};

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the scalar type of the geometry
pub trait FloatingPoint: RealField + FromPrimitive + ToPrimitive + Copy {}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
